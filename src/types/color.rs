use serde::{Deserialize, Serialize};

use crate::color::{hex_to_rgb, hsl_to_rgb, parse_hex, rgb_to_hex, rgb_to_hsl, wrap_hue};
use crate::error::Result;

/// RGB channels, 0-255 each
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Wrap the hue and clamp saturation/lightness into range
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            h: wrap_hue(self.h),
            s: self.s.clamp(0.0, 100.0),
            l: self.l.clamp(0.0, 100.0),
        }
    }

    /// Same saturation/lightness, hue rotated by `degrees`
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: wrap_hue(self.h + degrees),
            ..self
        }
    }

    #[must_use]
    pub const fn with_saturation(self, s: f64) -> Self {
        Self { s, ..self }
    }

    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Components rounded to whole degrees/percent, as shown to users
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn rounded(self) -> (i64, i64, i64) {
        let h = self.h.round() as i64 % 360;
        (h, self.s.round() as i64, self.l.round() as i64)
    }
}

/// A color carried in all three representations at once.
///
/// `hex` is always the canonical uppercase `#RRGGBB` form of `rgb`; `hsl`
/// denotes the same color within channel rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
}

impl Color {
    /// Build from a hex string; malformed input becomes black.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        Self::from_rgb(hex_to_rgb(hex))
    }

    /// Build from a hex string, rejecting malformed input.
    ///
    /// # Errors
    /// Returns `SwatchError::InvalidHex` if the input is not six hex digits.
    pub fn parse_hex(hex: &str) -> Result<Self> {
        parse_hex(hex).map(Self::from_rgb)
    }

    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl: rgb_to_hsl(rgb.r, rgb.g, rgb.b),
        }
    }

    /// Build from HSL, keeping the (normalized) HSL as given.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let hsl = hsl.normalized();
        let rgb = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgb(Rgb::default())
    }
}
