//! Recording surface.
//!
//! Keeps every draw call in order so it can be replayed later (the TUI
//! canvas repaints from it each frame) or inspected in tests.

use fibspiral_core::palette::Rgb;
use fibspiral_core::viewport::{Point, ScreenRect};

use crate::surface::{check_dimensions, Font, RenderError, Stroke, Surface};

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Rgb),
    FillRect {
        rect: ScreenRect,
        color: Rgb,
    },
    StrokeRect {
        rect: ScreenRect,
        stroke: Stroke,
    },
    Text {
        text: String,
        center: Point,
        font: Font,
    },
    Curve {
        from: Point,
        control: Point,
        to: Point,
        stroke: Stroke,
    },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone)]
pub struct DisplayList {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl DisplayList {
    /// Create an empty list for a `width` x `height` surface.
    ///
    /// Use [`DisplayList::try_new`] for sizes coming from user input.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn try_new(width: f64, height: f64) -> Result<Self, RenderError> {
        check_dimensions(width, height)?;
        Ok(Self::new(width, height))
    }

    /// Recorded operations, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drop every recorded operation, including clears.
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Number of filled squares recorded.
    #[must_use]
    pub fn count_squares(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { .. }))
            .count()
    }

    /// Number of curve segments recorded.
    #[must_use]
    pub fn count_curves(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Curve { .. }))
            .count()
    }

    /// Replay the recording onto another surface.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for op in &self.ops {
            match op {
                DrawOp::Clear(color) => target.clear(*color),
                DrawOp::FillRect { rect, color } => target.fill_rect(*rect, *color),
                DrawOp::StrokeRect { rect, stroke } => target.stroke_rect(*rect, *stroke),
                DrawOp::Text { text, center, font } => target.fill_text(text, *center, *font),
                DrawOp::Curve {
                    from,
                    control,
                    to,
                    stroke,
                } => target.quadratic_curve(*from, *control, *to, *stroke),
            }
        }
    }
}

impl Surface for DisplayList {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: Rgb) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear(color));
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Rgb) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: ScreenRect, stroke: Stroke) {
        self.ops.push(DrawOp::StrokeRect { rect, stroke });
    }

    fn fill_text(&mut self, text: &str, center: Point, font: Font) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            center,
            font,
        });
    }

    fn quadratic_curve(&mut self, from: Point, control: Point, to: Point, stroke: Stroke) {
        self.ops.push(DrawOp::Curve {
            from,
            control,
            to,
            stroke,
        });
    }
}
