//! Mapping from grid units to surface units.
//!
//! The whole layout is scaled uniformly so it fits inside the surface with
//! a symmetric margin on every side.

use crate::constants::{LABEL_FONT_RATIO, MIN_LABEL_FONT_PX};
use crate::layout::{Bounds, PlacedSquare};

/// A point in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// An axis-aligned rectangle in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Uniform grid-to-surface transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    min_x: i64,
    min_y: i64,
    margin: f64,
}

impl Viewport {
    /// Fit `bounds` into a `width` x `height` surface.
    ///
    /// A zero box width or height is treated as 1 so single-square and
    /// empty layouts never divide by zero. The smaller of the two axis
    /// scales wins, preserving aspect ratio.
    ///
    /// The margin shrinks to at most a quarter of the shorter side, so at
    /// least half of each dimension stays drawable on small surfaces.
    #[must_use]
    pub fn fit(bounds: Bounds, width: f64, height: f64, margin: f64) -> Self {
        let margin = usable_margin(margin, width, height);
        let scale_x = (width - 2.0 * margin) / nonzero(bounds.width());
        let scale_y = (height - 2.0 * margin) / nonzero(bounds.height());
        let scale = scale_x.min(scale_y);
        tracing::debug!(scale_x, scale_y, scale, "viewport fitted");
        Self {
            scale,
            min_x: bounds.min_x,
            min_y: bounds.min_y,
            margin,
        }
    }

    /// Surface units per grid unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Map a grid coordinate pair to the surface.
    #[must_use]
    pub fn to_screen(&self, x: f64, y: f64) -> Point {
        Point::new(
            (x - self.min_x as f64) * self.scale + self.margin,
            (y - self.min_y as f64) * self.scale + self.margin,
        )
    }

    /// Surface rectangle covered by a square.
    #[must_use]
    pub fn square_rect(&self, square: &PlacedSquare) -> ScreenRect {
        let origin = self.to_screen(square.x as f64, square.y as f64);
        let side = square.size as f64 * self.scale;
        ScreenRect {
            x: origin.x,
            y: origin.y,
            width: side,
            height: side,
        }
    }

    /// Surface position of a square's center.
    #[must_use]
    pub fn square_center(&self, square: &PlacedSquare) -> Point {
        let (cx, cy) = square.center();
        self.to_screen(cx, cy)
    }
}

/// Label font size for a square whose side is `screen_size` surface units.
#[must_use]
pub fn label_font_size(screen_size: f64) -> f64 {
    (screen_size * LABEL_FONT_RATIO).max(MIN_LABEL_FONT_PX)
}

fn usable_margin(margin: f64, width: f64, height: f64) -> f64 {
    let limit = (width.min(height) / 4.0).max(0.0);
    margin.max(0.0).min(limit)
}

fn nonzero(extent: i64) -> f64 {
    if extent == 0 {
        1.0
    } else {
        extent as f64
    }
}
