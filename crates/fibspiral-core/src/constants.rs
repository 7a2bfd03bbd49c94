//! Constants for term bounds, animation defaults, and drawing geometry.

/// Smallest term count accepted at the input boundary.
pub const MIN_TERMS: usize = 1;

/// Largest term count accepted at the input boundary.
pub const MAX_TERMS: usize = 25;

/// Term count shown before the user has typed anything.
pub const DEFAULT_TERMS: usize = 10;

/// Default pause between two revealed squares, in milliseconds.
pub const DEFAULT_STEP_DELAY_MS: u64 = 300;

/// Upper bound for the user-adjustable step delay, in milliseconds.
pub const MAX_STEP_DELAY_MS: u64 = 2000;

/// Increment used by interactive delay controls, in milliseconds.
pub const STEP_DELAY_INCREMENT_MS: u64 = 50;

/// Longest sequence the generator will produce.
///
/// The spiral layout places squares on an `i64` grid. Ninety terms keep
/// every corner of the layout below `i64::MAX` (the extent of the 90-term
/// layout is about 5.0e18).
pub const MAX_SEQUENCE_LEN: usize = 90;

/// Symmetric margin between the surface edge and the spiral, in surface units.
pub const DEFAULT_MARGIN: f64 = 40.0;

/// Default drawing surface width, in surface units (pixels for SVG).
pub const DEFAULT_SURFACE_WIDTH: u32 = 600;

/// Default drawing surface height, in surface units (pixels for SVG).
pub const DEFAULT_SURFACE_HEIGHT: u32 = 600;

/// Smallest label font size, in surface units.
pub const MIN_LABEL_FONT_PX: f64 = 12.0;

/// Label font size as a fraction of the square's on-screen side.
pub const LABEL_FONT_RATIO: f64 = 0.3;

/// First 25 terms of the 1-indexed sequence (1, 1, 2, ...).
pub const FIB_TERMS: [u64; MAX_TERMS] = {
    let mut table = [0u64; MAX_TERMS];
    table[0] = 1;
    table[1] = 1;
    let mut i = 2;
    while i < MAX_TERMS {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, terminal setup, ...).
    pub const ERROR_GENERIC: i32 = 1;
    /// The term count was rejected at the input boundary.
    pub const ERROR_INVALID_INPUT: i32 = 2;
}
