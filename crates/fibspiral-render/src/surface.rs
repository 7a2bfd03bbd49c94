//! Drawing surface abstraction.
//!
//! Coordinates are surface units with the origin at the top-left corner and
//! y growing downward.

use fibspiral_core::palette::Rgb;
use fibspiral_core::viewport::{Point, ScreenRect};

/// Error type for surfaces that can fail.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Surface dimensions must be finite and strictly positive.
    #[error("invalid surface size {width}x{height}")]
    InvalidSurface { width: f64, height: f64 },

    /// Writing the rendered output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Line style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
    /// `[on, off]` dash lengths; `None` for a solid line.
    pub dash: Option<[f64; 2]>,
}

impl Stroke {
    #[must_use]
    pub fn solid(color: Rgb, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    #[must_use]
    pub fn dashed(color: Rgb, width: f64, dash: [f64; 2]) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }
}

/// Text style. Text is always drawn centered on its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f64,
    pub bold: bool,
    pub color: Rgb,
}

/// A fixed-size target the renderer paints on.
pub trait Surface {
    /// Width in surface units.
    fn width(&self) -> f64;

    /// Height in surface units.
    fn height(&self) -> f64;

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: ScreenRect, color: Rgb);

    fn stroke_rect(&mut self, rect: ScreenRect, stroke: Stroke);

    /// Draw `text` centered horizontally and vertically on `center`.
    fn fill_text(&mut self, text: &str, center: Point, font: Font);

    /// Quadratic Bezier from `from` to `to` with a single control point.
    fn quadratic_curve(&mut self, from: Point, control: Point, to: Point, stroke: Stroke);
}

/// Validate surface dimensions.
pub(crate) fn check_dimensions(width: f64, height: f64) -> Result<(), RenderError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(RenderError::InvalidSurface { width, height })
    }
}
