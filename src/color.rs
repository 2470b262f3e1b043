//! A simple representation of color.

use std::fmt;

/// A datatype representing color.
///
/// This is a 32 bit RGBA value, with red in the most significant byte and
/// alpha in the least. Only the identity and ordering of colors matter to the
/// gradient operations in this crate; no color math is performed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Color(u32);

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::rgba32(0xff_ff_ff_ff);

    /// Opaque black.
    pub const BLACK: Color = Color::rgba32(0x00_00_00_ff);

    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba32(0x00_00_00_00);

    /// Create a color from a 32-bit rgba value (alpha as least significant byte).
    pub const fn rgba32(rgba: u32) -> Color {
        Color(rgba)
    }

    /// Create a color from a 24-bit rgb value (red most significant, blue least).
    pub const fn rgb24(rgb: u32) -> Color {
        Color::rgba32((rgb << 8) | 0xff)
    }

    /// Create a color from four floating point values, each in the range 0.0 to 1.0.
    ///
    /// Values outside that range are clamped.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        let r = to_byte(r);
        let g = to_byte(g);
        let b = to_byte(b);
        let a = to_byte(a);
        Color::rgba32((r << 24) | (g << 16) | (b << 8) | a)
    }

    /// Create an opaque color from three floating point values, each in the
    /// range 0.0 to 1.0.
    ///
    /// Values outside that range are clamped.
    pub fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color::rgba(r, g, b, 1.0)
    }

    /// Change just the alpha value of a color.
    ///
    /// The `a` value represents alpha in the range 0.0 to 1.0.
    pub fn with_alpha(self, a: f64) -> Color {
        Color::rgba32((self.0 & !0xff) | to_byte(a))
    }

    /// Convert a color value to a 32-bit rgba value.
    pub const fn as_rgba32(self) -> u32 {
        self.0
    }
}

fn to_byte(v: f64) -> u32 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u32
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}
