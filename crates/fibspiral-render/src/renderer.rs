//! Spiral renderer: colored, labelled squares plus a dashed connecting curve.

use fibspiral_core::constants::DEFAULT_MARGIN;
use fibspiral_core::layout::Layout;
use fibspiral_core::palette::{color_for_index, Rgb};
use fibspiral_core::viewport::{label_font_size, Viewport};

use crate::surface::{Font, Stroke, Surface};

/// Background the surface is cleared to before a run.
pub const BACKGROUND: Rgb = Rgb::WHITE;

/// Border drawn around every square.
pub const SQUARE_BORDER: Stroke = Stroke {
    color: Rgb::WHITE,
    width: 2.0,
    dash: None,
};

/// Style of the curve joining consecutive square centers.
pub const CURVE_STROKE: Stroke = Stroke {
    color: Rgb::CURVE_GREY,
    width: 2.0,
    dash: Some([5.0, 5.0]),
};

/// Paints a layout onto a surface.
///
/// The viewport is derived once, from the layout bounds and the surface
/// size given at construction.
#[derive(Debug, Clone)]
pub struct SpiralRenderer {
    layout: Layout,
    viewport: Viewport,
    sequence_len: usize,
}

impl SpiralRenderer {
    /// Renderer for a surface of the given size, using [`DEFAULT_MARGIN`].
    #[must_use]
    pub fn new(layout: Layout, sequence_len: usize, width: f64, height: f64) -> Self {
        Self::with_margin(layout, sequence_len, width, height, DEFAULT_MARGIN)
    }

    #[must_use]
    pub fn with_margin(
        layout: Layout,
        sequence_len: usize,
        width: f64,
        height: f64,
        margin: f64,
    ) -> Self {
        let viewport = Viewport::fit(layout.bounds(), width, height, margin);
        Self {
            layout,
            viewport,
            sequence_len,
        }
    }

    /// Renderer sized for `surface`.
    #[must_use]
    pub fn for_surface<S: Surface + ?Sized>(
        layout: Layout,
        sequence_len: usize,
        surface: &S,
    ) -> Self {
        Self::new(layout, sequence_len, surface.width(), surface.height())
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Number of squares this renderer paints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Clear the surface to the background color.
    pub fn clear<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(BACKGROUND);
    }

    /// Paint square `index`: fill, border, then its value as a label.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn paint_square<S: Surface + ?Sized>(&self, surface: &mut S, index: usize) -> bool {
        let Some(square) = self.layout.squares().get(index) else {
            return false;
        };
        let rect = self.viewport.square_rect(square);
        let fill = color_for_index(index, self.sequence_len).to_rgb();

        surface.fill_rect(rect, fill);
        surface.stroke_rect(rect, SQUARE_BORDER);
        surface.fill_text(
            &square.size.to_string(),
            rect.center(),
            Font {
                size: label_font_size(rect.width),
                bold: true,
                color: Rgb::WHITE,
            },
        );
        true
    }

    /// Join consecutive square centers with dashed quadratic segments.
    ///
    /// The control point of each segment is the chord midpoint.
    pub fn paint_curve<S: Surface + ?Sized>(&self, surface: &mut S) {
        for pair in self.layout.squares().windows(2) {
            let from = self.viewport.square_center(&pair[0]);
            let to = self.viewport.square_center(&pair[1]);
            surface.quadratic_curve(from, from.midpoint(to), to, CURVE_STROKE);
        }
    }

    /// Paint the whole spiral at once: clear, every square, then the curve.
    ///
    /// An empty layout leaves the surface untouched.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        if self.is_empty() {
            return;
        }
        self.clear(surface);
        for index in 0..self.len() {
            self.paint_square(surface, index);
        }
        self.paint_curve(surface);
    }
}

/// Render `layout` onto `surface` in one pass.
pub fn render<S: Surface + ?Sized>(surface: &mut S, layout: &Layout, sequence_len: usize) {
    SpiralRenderer::for_surface(layout.clone(), sequence_len, surface).render(surface);
}
