//! Index-ordered rainbow palette for spiral squares.

use std::fmt;

/// Saturation used for every square, in percent.
pub const SQUARE_SATURATION: f64 = 70.0;

/// Lightness used for every square, in percent.
pub const SQUARE_LIGHTNESS: f64 = 60.0;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);
    pub const CURVE_GREY: Self = Self::new(0x66, 0x66, 0x66);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    /// `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Hue (degrees), saturation and lightness (percent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Convert to RGB.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb(self) -> Rgb {
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);
        let h = self.hue.rem_euclid(360.0) / 60.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(channel(r), channel(g), channel(b))
    }
}

/// Fill color for the square at `index` out of `total`.
///
/// Hue sweeps 0..360 degrees in index order. `total == 0` yields hue 0.
#[must_use]
pub fn color_for_index(index: usize, total: usize) -> Hsl {
    let hue = if total == 0 {
        0.0
    } else {
        index as f64 / total as f64 * 360.0
    };
    Hsl {
        hue,
        saturation: SQUARE_SATURATION,
        lightness: SQUARE_LIGHTNESS,
    }
}
