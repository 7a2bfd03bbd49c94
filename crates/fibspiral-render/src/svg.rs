//! SVG document surface.

use std::fmt::Write as _;
use std::path::Path;

use fibspiral_core::palette::Rgb;
use fibspiral_core::viewport::{Point, ScreenRect};

use crate::surface::{check_dimensions, Font, RenderError, Stroke, Surface};

/// Surface that accumulates SVG elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Result<Self, RenderError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            body: String::new(),
        })
    }

    /// The complete standalone document.
    #[must_use]
    pub fn finish(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = num(self.width),
            h = num(self.height),
            body = self.body,
        )
    }

    /// Write the document to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        std::fs::write(path.as_ref(), self.finish())?;
        tracing::info!(path = %path.as_ref().display(), "svg written");
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: Rgb) {
        self.body.clear();
        let _ = writeln!(
            self.body,
            "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{color}\"/>",
            num(self.width),
            num(self.height),
        );
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Rgb) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{color}\"/>",
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
        );
    }

    fn stroke_rect(&mut self, rect: ScreenRect, stroke: Stroke) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\"{}/>",
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            stroke_attrs(stroke),
        );
    }

    fn fill_text(&mut self, text: &str, center: Point, font: Font) {
        let weight = if font.bold { " font-weight=\"bold\"" } else { "" };
        let _ = writeln!(
            self.body,
            "  <text x=\"{}\" y=\"{}\" font-family=\"Arial, sans-serif\" font-size=\"{}\"{weight} fill=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>",
            num(center.x),
            num(center.y),
            num(font.size),
            font.color,
            escape(text),
        );
    }

    fn quadratic_curve(&mut self, from: Point, control: Point, to: Point, stroke: Stroke) {
        let _ = writeln!(
            self.body,
            "  <path d=\"M {} {} Q {} {} {} {}\" fill=\"none\"{}/>",
            num(from.x),
            num(from.y),
            num(control.x),
            num(control.y),
            num(to.x),
            num(to.y),
            stroke_attrs(stroke),
        );
    }
}

fn stroke_attrs(stroke: Stroke) -> String {
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        stroke.color,
        num(stroke.width)
    );
    if let Some([on, off]) = stroke.dash {
        let _ = write!(attrs, " stroke-dasharray=\"{} {}\"", num(on), num(off));
    }
    attrs
}

/// Two decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
