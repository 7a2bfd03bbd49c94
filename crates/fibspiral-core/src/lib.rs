//! # fibspiral-core
//!
//! Core library for FibSpiral: Fibonacci sequence generation, the spiral
//! layout engine, and the geometry that fits a layout onto a surface.

pub mod constants;
pub mod layout;
pub mod palette;
pub mod sequence;
pub mod table;
pub mod term_count;
pub mod viewport;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_MARGIN, DEFAULT_STEP_DELAY_MS, DEFAULT_TERMS, MAX_SEQUENCE_LEN, MAX_TERMS,
    MIN_TERMS,
};
pub use layout::{layout, Bounds, Direction, Layout, PlacedSquare};
pub use palette::{color_for_index, Hsl, Rgb};
pub use sequence::{generate, to_binary, Sequence};
pub use table::{rows, SequenceRow};
pub use term_count::{TermCount, TermCountError};
pub use viewport::{label_font_size, Point, ScreenRect, Viewport};

/// Generate a validated number of terms and lay them out as a spiral.
///
/// # Example
/// ```
/// let count = fibspiral_core::TermCount::parse("5").unwrap();
/// let (sequence, layout) = fibspiral_core::spiral(count);
/// assert_eq!(sequence.len(), 5);
/// assert_eq!(layout.len(), 5);
/// ```
#[must_use]
pub fn spiral(count: TermCount) -> (Sequence, Layout) {
    let sequence = generate(count.as_i64());
    let layout = layout(&sequence);
    (sequence, layout)
}
