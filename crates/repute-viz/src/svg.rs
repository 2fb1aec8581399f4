//! Minimal SVG document builder.
//!
//! Coordinates are pixels with the origin at the top-left corner. Numbers are
//! written with two decimals, text content and attributes are XML-escaped.

use std::fmt::Write;

/// Horizontal anchor of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Stroke parameters for lines and polylines.
#[derive(Debug, Clone, Copy)]
pub struct Stroke<'a> {
    pub color: &'a str,
    pub width: f64,
    /// `stroke-dasharray` value, e.g. `"6 4"`.
    pub dash: Option<&'a str>,
}

impl<'a> Stroke<'a> {
    pub fn solid(color: &'a str, width: f64) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: &'a str, width: f64) -> Self {
        Self { color, width, dash: Some("6 4") }
    }

    fn attrs(&self) -> String {
        let mut s = format!(
            r#"stroke="{}" stroke-width="{:.2}""#,
            escape(self.color),
            self.width
        );
        if let Some(dash) = self.dash {
            let _ = write!(s, r#" stroke-dasharray="{}""#, escape(dash));
        }
        s
    }
}

/// Text styling.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    pub family: &'a str,
    pub size: f64,
    pub color: &'a str,
    pub anchor: Anchor,
    pub bold: bool,
}

/// An SVG document under construction.
#[derive(Debug)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    body: String,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
            w.max(0.0),
            h.max(0.0),
            escape(fill)
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke<'_>) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" {}/>"#,
            stroke.attrs()
        );
    }

    pub fn polyline(&mut self, points: impl IntoIterator<Item = (f64, f64)>, stroke: Stroke<'_>) {
        let mut coords = String::new();
        for (x, y) in points {
            if !coords.is_empty() {
                coords.push(' ');
            }
            let _ = write!(coords, "{x:.2},{y:.2}");
        }
        let _ = writeln!(
            self.body,
            r#"<polyline points="{coords}" fill="none" {} stroke-linejoin="round"/>"#,
            stroke.attrs()
        );
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{}"/>"#,
            escape(fill)
        );
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, font: Font<'_>) {
        let weight = if font.bold { "bold" } else { "normal" };
        let _ = writeln!(
            self.body,
            r#"<text x="{x:.2}" y="{y:.2}" font-family="{}" font-size="{:.1}" font-weight="{weight}" fill="{}" text-anchor="{}">{}</text>"#,
            escape(font.family),
            font.size,
            escape(font.color),
            font.anchor.as_str(),
            escape(content)
        );
    }

    /// Text rotated 90 degrees counter-clockwise around its anchor point.
    pub fn vertical_text(&mut self, x: f64, y: f64, content: &str, font: Font<'_>) {
        let _ = writeln!(
            self.body,
            r#"<text x="{x:.2}" y="{y:.2}" transform="rotate(-90 {x:.2} {y:.2})" font-family="{}" font-size="{:.1}" fill="{}" text-anchor="{}">{}</text>"#,
            escape(font.family),
            font.size,
            escape(font.color),
            font.anchor.as_str(),
            escape(content)
        );
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

/// Escape the five XML special characters.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
