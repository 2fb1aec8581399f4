//! Two-panel analysis chart.
//!
//! Left: Lorenz curve, equality line, and the majority-control marker at
//! `x = 1 - nakamoto coefficient`. Right: Gini and Nakamoto coefficients as
//! bars on a fixed `[0, 1]` axis.

use std::path::Path;

use repute_core::types::{LorenzCurve, MetricsReport};
use tracing::info;

use crate::config::{RenderConfig, Theme};
use crate::error::RenderError;
use crate::svg::{Anchor, Font, Stroke, SvgDocument};

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

const TITLE_SIZE: f64 = 15.0;
const LABEL_SIZE: f64 = 13.0;
const TICK_SIZE: f64 = 11.0;

/// Axis padding around the unit square of the Lorenz panel.
const LORENZ_PAD: f64 = 0.05;

/// Vertical extent of the marker line as fractions of the plot height.
const MARKER_SPAN: (f64, f64) = (0.05, 0.95);

/// Plot area in pixels plus the data ranges it maps.
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Frame {
    /// Plot area of the panel occupying `[origin_x, origin_x + panel_width)`.
    fn in_panel(
        origin_x: f64,
        panel_width: f64,
        canvas_height: f64,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> Self {
        Self {
            left: origin_x + MARGIN_LEFT,
            top: MARGIN_TOP,
            width: panel_width - MARGIN_LEFT - MARGIN_RIGHT,
            height: canvas_height - MARGIN_TOP - MARGIN_BOTTOM,
            x_range,
            y_range,
        }
    }

    fn px(&self, x: f64) -> f64 {
        let (lo, hi) = self.x_range;
        self.left + (x - lo) / (hi - lo) * self.width
    }

    fn py(&self, y: f64) -> f64 {
        let (lo, hi) = self.y_range;
        self.top + self.height - (y - lo) / (hi - lo) * self.height
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// One legend row: a swatch and a label.
enum Swatch<'a> {
    Line(Stroke<'a>),
    Dot(&'a str),
    Block(&'a str),
}

struct Painter<'a> {
    doc: SvgDocument,
    config: &'a RenderConfig,
}

impl<'a> Painter<'a> {
    fn font(&self, size: f64, anchor: Anchor, bold: bool) -> Font<'a> {
        let theme: &'a Theme = &self.config.theme;
        Font {
            family: &theme.font_family,
            size,
            color: &theme.text,
            anchor,
            bold,
        }
    }

    /// Panel background, horizontal and vertical grid lines, tick labels.
    fn axes(&mut self, frame: &Frame, x_ticks: &[f64], y_ticks: &[f64]) {
        let theme: &'a Theme = &self.config.theme;
        self.doc.rect(frame.left, frame.top, frame.width, frame.height, &theme.panel);
        for &t in x_ticks {
            let x = frame.px(t);
            self.doc.line(x, frame.top, x, frame.bottom(), Stroke::solid(&theme.grid, 1.0));
            let font = self.font(TICK_SIZE, Anchor::Middle, false);
            self.doc.text(x, frame.bottom() + 16.0, &format!("{t:.1}"), font);
        }
        for &t in y_ticks {
            let y = frame.py(t);
            self.doc.line(frame.left, y, frame.right(), y, Stroke::solid(&theme.grid, 1.0));
            let font = self.font(TICK_SIZE, Anchor::End, false);
            self.doc.text(frame.left - 6.0, y + 4.0, &format!("{t:.1}"), font);
        }
    }

    fn labels(&mut self, frame: &Frame, title: Option<&str>, x_label: &str, y_label: &str) {
        if let Some(title) = title {
            let font = self.font(TITLE_SIZE, Anchor::Middle, true);
            self.doc.text(frame.center_x(), frame.top - 16.0, title, font);
        }
        let font = self.font(LABEL_SIZE, Anchor::Middle, false);
        self.doc.text(frame.center_x(), frame.bottom() + 40.0, x_label, font);
        let font = self.font(LABEL_SIZE, Anchor::Middle, false);
        self.doc
            .vertical_text(frame.left - 44.0, frame.top + frame.height / 2.0, y_label, font);
    }

    /// Legend box anchored at the top-left corner of the plot area.
    fn legend(&mut self, frame: &Frame, rows: &[(Swatch<'_>, String)]) {
        let row_height = 18.0;
        let longest = rows.iter().map(|(_, label)| label.chars().count()).max().unwrap_or(0);
        let box_width = 40.0 + longest as f64 * TICK_SIZE * 0.6;
        let box_height = row_height * rows.len() as f64 + 8.0;
        let (x0, y0) = (frame.left + 10.0, frame.top + 10.0);

        let theme: &'a Theme = &self.config.theme;
        self.doc.rect(x0, y0, box_width, box_height, &theme.background);
        for (i, (swatch, label)) in rows.iter().enumerate() {
            let cy = y0 + 4.0 + row_height * (i as f64 + 0.5);
            match swatch {
                Swatch::Line(stroke) => self.doc.line(x0 + 6.0, cy, x0 + 28.0, cy, *stroke),
                Swatch::Dot(color) => self.doc.circle(x0 + 17.0, cy, 4.0, color),
                Swatch::Block(color) => self.doc.rect(x0 + 8.0, cy - 5.0, 18.0, 10.0, color),
            }
            let font = self.font(TICK_SIZE, Anchor::Start, false);
            self.doc.text(x0 + 34.0, cy + 4.0, label, font);
        }
    }

    fn lorenz_panel(&mut self, frame: &Frame, report: &MetricsReport, curve: &LorenzCurve) {
        let config: &'a RenderConfig = self.config;
        let theme = &config.theme;
        let ticks: Vec<f64> = (0..=5).map(|i| i as f64 * 0.2).collect();
        self.axes(frame, &ticks, &ticks);

        let equality = curve.x.iter().map(|&x| (frame.px(x), frame.py(x)));
        self.doc.polyline(equality, Stroke::solid(&theme.equality, 2.0));

        let lorenz = curve.points().map(|(x, y)| (frame.px(x), frame.py(y)));
        self.doc.polyline(lorenz, Stroke::solid(&theme.lorenz, 2.0));

        let coefficient = report.nakamoto.coefficient;
        let marker_x = frame.px(1.0 - coefficient);
        let (lo, hi) = MARKER_SPAN;
        self.doc.line(
            marker_x,
            frame.bottom() - lo * frame.height,
            marker_x,
            frame.bottom() - hi * frame.height,
            Stroke::dashed(&theme.marker, 1.5),
        );
        self.doc.circle(marker_x, frame.py(0.0), 4.5, &theme.marker);
        self.doc.circle(frame.px(1.0), frame.py(0.0), 4.5, &theme.marker);

        let rows = [
            (Swatch::Line(Stroke::solid(&theme.lorenz, 2.0)), "lorenz curve".to_string()),
            (Swatch::Line(Stroke::solid(&theme.equality, 2.0)), "equality line".to_string()),
            (Swatch::Line(Stroke::dashed(&theme.marker, 1.5)), "51 percent".to_string()),
            (Swatch::Dot(&theme.marker), format!("nakamoto_coefficient({coefficient})")),
        ];
        self.legend(frame, &rows);

        self.labels(frame, Some(config.title.as_str()), &config.x_label, &config.y_label);
    }

    fn coefficient_panel(&mut self, frame: &Frame, report: &MetricsReport) {
        let theme: &'a Theme = &self.config.theme;
        let y_ticks: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
        self.axes(frame, &[], &y_ticks);

        let bars = [
            ("Gini", report.gini, &theme.bars[0]),
            ("Nakamoto", report.nakamoto.coefficient, &theme.bars[1]),
        ];
        for (slot, (name, value, color)) in bars.iter().enumerate() {
            let center = slot as f64;
            let left = frame.px(center - 0.4);
            let right = frame.px(center + 0.4);
            let top = frame.py(value.clamp(0.0, 1.0));
            self.doc.rect(left, top, right - left, frame.bottom() - top, color);
            let font = self.font(TICK_SIZE, Anchor::Middle, false);
            self.doc.text(frame.px(center), frame.bottom() + 16.0, name, font);
        }

        let rows = [
            (Swatch::Block(&theme.bars[0]), report.gini.to_string()),
            (Swatch::Block(&theme.bars[1]), report.nakamoto.coefficient.to_string()),
        ];
        self.legend(frame, &rows);
        self.labels(frame, None, "coefficient", "value");
    }
}

/// Render the analysis chart as a standalone SVG document.
pub fn render_analysis(
    report: &MetricsReport,
    curve: &LorenzCurve,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    config.validate()?;
    if curve.x.len() != curve.y.len() || curve.x.len() < 2 {
        return Err(RenderError::CurveMismatch {
            x_len: curve.x.len(),
            y_len: curve.y.len(),
        });
    }

    let (width, height) = (config.width as f64, config.height as f64);
    let panel_width = width / 2.0;
    let unit = (-LORENZ_PAD, 1.0 + LORENZ_PAD);
    let lorenz_frame = Frame::in_panel(0.0, panel_width, height, unit, unit);
    let bar_frame = Frame::in_panel(panel_width, panel_width, height, (-0.6, 1.6), (0.0, 1.0));

    let mut painter = Painter {
        doc: SvgDocument::new(config.width, config.height),
        config,
    };
    painter.doc.rect(0.0, 0.0, width, height, &config.theme.background);
    painter.lorenz_panel(&lorenz_frame, report, curve);
    painter.coefficient_panel(&bar_frame, report);

    Ok(painter.doc.finish())
}

/// Render the analysis chart and write it to `path`.
pub fn write_analysis(
    path: impl AsRef<Path>,
    report: &MetricsReport,
    curve: &LorenzCurve,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    let path = path.as_ref();
    let svg = render_analysis(report, curve, config)?;
    std::fs::write(path, svg).map_err(|e| RenderError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    info!(path = %path.display(), "wrote analysis chart");
    Ok(())
}
