//! Color model conversion
//!
//! Converts between `#RRGGBB` hex strings, RGB channel triples and HSL
//! (degrees / percent). Also holds the hue wrap and tone clamps shared by
//! the palette strategies.

use crate::error::{Result, SwatchError};
use crate::types::{Hsl, Rgb};

/// Lowest saturation/lightness a derived swatch may take.
pub const MIN_TONE: f64 = 10.0;
/// Highest saturation/lightness a derived swatch may take.
pub const MAX_TONE: f64 = 90.0;

/// Parse a 6-digit hex color (optional `#`), failing on anything else.
///
/// # Errors
/// Returns `SwatchError::InvalidHex` if the input is not exactly six hex digits.
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SwatchError::InvalidHex(hex.to_string()));
    }

    let channel = |start: usize| {
        digits
            .get(start..start + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| SwatchError::InvalidHex(hex.to_string()))
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Parse a hex color, returning black on malformed input.
///
/// A black result is ambiguous: callers that need to tell `#000000` apart
/// from garbage should use [`parse_hex`].
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or_default()
}

/// Format an RGB triple as `#RRGGBB`
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Convert RGB to HSL
#[allow(clippy::many_single_char_names)]
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let (rf, gf, bf) = (unit(r), unit(g), unit(b));
    let (max_f, min_f) = (unit(max), unit(min));
    let l = f64::midpoint(max_f, min_f);

    // Achromatic: hue is undefined, report 0
    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max_f - min_f;
    let s = if l > 0.5 {
        d / (2.0 - max_f - min_f)
    } else {
        d / (max_f + min_f)
    };

    let h = if max == r {
        (gf - bf) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (bf - rf) / d + 2.0
    } else {
        (rf - gf) / d + 4.0
    };

    Hsl::new(wrap_hue(h * 60.0), s * 100.0, l * 100.0)
}

/// Convert HSL to RGB
///
/// Hue is wrapped into `[0, 360)` and saturation/lightness clamped to
/// `[0, 100]` before conversion.
#[allow(clippy::many_single_char_names)]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = wrap_hue(h);
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0).floor() as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// Convert HSL to a `#RRGGBB` string
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    rgb_to_hex(hsl_to_rgb(h, s, l))
}

/// Wrap a hue in degrees into `[0, 360)`
#[must_use]
pub fn wrap_hue(h: f64) -> f64 {
    ((h % 360.0) + 360.0) % 360.0
}

/// Clamp a saturation/lightness value into `[MIN_TONE, MAX_TONE]`
#[must_use]
pub fn clamp_tone(value: f64) -> f64 {
    value.clamp(MIN_TONE, MAX_TONE)
}

/// Lower a saturation/lightness value no further than `MIN_TONE`
#[must_use]
pub fn floor_tone(value: f64) -> f64 {
    value.max(MIN_TONE)
}

/// Raise a saturation/lightness value no further than `MAX_TONE`
#[must_use]
pub fn ceil_tone(value: f64) -> f64 {
    value.min(MAX_TONE)
}

fn unit(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_red() {
        assert_eq!(hex_to_rgb("#FF0000"), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_hex_to_rgb_without_hash_and_lowercase() {
        assert_eq!(hex_to_rgb("3b82f6"), Rgb::new(59, 130, 246));
        assert_eq!(hex_to_rgb("  #3B82F6 "), Rgb::new(59, 130, 246));
    }

    #[test]
    fn test_hex_to_rgb_accepts_surrounding_whitespace() {
        // Pasted values often carry stray spaces or a trailing newline
        assert_eq!(hex_to_rgb(" #3B82F6"), Rgb::new(59, 130, 246));
        assert_eq!(hex_to_rgb("#3B82F6\n"), Rgb::new(59, 130, 246));
        assert_eq!(parse_hex("\t3B82F6 ").unwrap(), Rgb::new(59, 130, 246));
        // Inner whitespace is still malformed
        assert_eq!(hex_to_rgb("# 3B82F6"), Rgb::new(0, 0, 0));
        assert_eq!(hex_to_rgb("#3B 82F6"), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_hex_to_rgb_malformed_is_black() {
        for input in ["", "#", "#FFF", "#GGGGGG", "#FF00001", "##FF0000", "red"] {
            assert_eq!(hex_to_rgb(input), Rgb::new(0, 0, 0), "input: {input:?}");
        }
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        let err = parse_hex("#12345").unwrap_err();
        assert!(matches!(err, SwatchError::InvalidHex(s) if s == "#12345"));
        // Multibyte input must not panic on slicing
        assert!(parse_hex("#ééé").is_err());
    }

    #[test]
    fn test_rgb_to_hsl_red() {
        let hsl = rgb_to_hsl(255, 0, 0);
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 100.0);
        assert_eq!(hsl.l, 50.0);
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        for v in [0u8, 1, 127, 128, 254, 255] {
            let hsl = rgb_to_hsl(v, v, v);
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
        }
        assert_eq!(rgb_to_hsl(255, 255, 255).l, 100.0);
        assert_eq!(rgb_to_hsl(0, 0, 0).l, 0.0);
    }

    #[test]
    fn test_rgb_to_hsl_primary_hues() {
        assert!((rgb_to_hsl(0, 255, 0).h - 120.0).abs() < 1e-9);
        assert!((rgb_to_hsl(0, 0, 255).h - 240.0).abs() < 1e-9);
        assert!((rgb_to_hsl(255, 0, 255).h - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_hsl_to_hex_sectors() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#FF0000");
        assert_eq!(hsl_to_hex(60.0, 100.0, 50.0), "#FFFF00");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00FF00");
        assert_eq!(hsl_to_hex(180.0, 100.0, 50.0), "#00FFFF");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000FF");
        assert_eq!(hsl_to_hex(300.0, 100.0, 50.0), "#FF00FF");
        assert_eq!(hsl_to_hex(0.0, 0.0, 50.0), "#808080");
    }

    #[test]
    fn test_hsl_to_hex_wraps_hue() {
        assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), "#FF0000");
        assert_eq!(hsl_to_hex(-120.0, 100.0, 50.0), "#0000FF");
    }

    #[test]
    fn test_roundtrip_within_one() {
        let steps: Vec<u8> = (0..=255u8).step_by(15).chain([1, 254, 255]).collect();
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let hex = rgb_to_hex(Rgb::new(r, g, b));
                    let rgb = hex_to_rgb(&hex);
                    let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
                    let back = hex_to_rgb(&hsl_to_hex(hsl.h, hsl.s, hsl.l));
                    assert!(
                        back.r.abs_diff(r) <= 1 && back.g.abs_diff(g) <= 1 && back.b.abs_diff(b) <= 1,
                        "{hex} -> {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(0.0), 0.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(390.0), 30.0);
        assert_eq!(wrap_hue(-30.0), 330.0);
        assert_eq!(wrap_hue(-720.0), 0.0);
        assert!(wrap_hue(-1e-20) < 360.0);
    }

    #[test]
    fn test_tone_clamps() {
        assert_eq!(clamp_tone(0.0), 10.0);
        assert_eq!(clamp_tone(95.0), 90.0);
        assert_eq!(clamp_tone(42.0), 42.0);
        assert_eq!(floor_tone(-5.0), 10.0);
        assert_eq!(floor_tone(95.0), 95.0);
        assert_eq!(ceil_tone(95.0), 90.0);
        assert_eq!(ceil_tone(5.0), 5.0);
    }
}
