//! Render configuration passed explicitly to the chart renderer.
//!
//! Defaults reproduce a "darkgrid" look with a pastel bar palette on a
//! 1200x600 canvas.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Smallest canvas the layout can fit two panels and legends into.
pub const MIN_WIDTH: u32 = 400;
pub const MIN_HEIGHT: u32 = 240;

/// Canvas size, labels and colours of the analysis chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Title of the Lorenz panel.
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub theme: Theme,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            title: "OWNER DECENTRALIZATION".to_string(),
            x_label: "part of DAO".to_string(),
            y_label: "part of reputation amount".to_string(),
            theme: Theme::default(),
        }
    }
}

impl RenderConfig {
    /// Check canvas bounds and colour syntax.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }
        self.theme.validate()
    }
}

/// Colours as `#RRGGBB` hex strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Figure background.
    pub background: String,
    /// Plot area fill.
    pub panel: String,
    pub grid: String,
    pub text: String,
    pub lorenz: String,
    pub equality: String,
    /// Majority-control marker line and points.
    pub marker: String,
    /// Gini bar then Nakamoto bar.
    pub bars: [String; 2],
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            panel: "#EAEAF2".to_string(),
            grid: "#FFFFFF".to_string(),
            text: "#262626".to_string(),
            lorenz: "#008000".to_string(),
            equality: "#0000FF".to_string(),
            marker: "#FF0000".to_string(),
            bars: ["#A1C9F4".to_string(), "#FFB482".to_string()],
            font_family: "DejaVu Sans, Arial, sans-serif".to_string(),
        }
    }
}

impl Theme {
    pub fn validate(&self) -> Result<(), RenderError> {
        let fields: [(&'static str, &str); 9] = [
            ("background", &self.background),
            ("panel", &self.panel),
            ("grid", &self.grid),
            ("text", &self.text),
            ("lorenz", &self.lorenz),
            ("equality", &self.equality),
            ("marker", &self.marker),
            ("bars[0]", &self.bars[0]),
            ("bars[1]", &self.bars[1]),
        ];
        for (field, value) in fields {
            if !is_hex_color(value) {
                return Err(RenderError::InvalidColor {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// `#RGB` or `#RRGGBB`.
fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
