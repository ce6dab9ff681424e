//! The six palette strategies.
//!
//! The filler variants in `complementary`, `triadic` and `tetradic`
//! (-20/-30 saturation or lightness, +25 lightness) are fixed tuning
//! constants, not derived from color theory.

use rand::Rng;

use crate::color::{ceil_tone, clamp_tone, floor_tone};
use crate::types::{Color, Hsl, PALETTE_SIZE};

/// Offsets from the centre swatch, in steps
const CENTERED_STEPS: [f64; PALETTE_SIZE] = [-2.0, -1.0, 0.0, 1.0, 2.0];

const MONOCHROMATIC_LIGHTNESS_STEP: f64 = 20.0;
const ANALOGOUS_HUE_STEP: f64 = 30.0;

/// Lightness of the base hue/saturation in 20-point steps around the base.
#[must_use]
pub fn monochromatic(base: &Color) -> [Color; PALETTE_SIZE] {
    let hsl = base.hsl;
    CENTERED_STEPS.map(|step| {
        Color::from_hsl(hsl.with_lightness(clamp_tone(
            step.mul_add(MONOCHROMATIC_LIGHTNESS_STEP, hsl.l),
        )))
    })
}

/// Hue in 30° steps around the base.
#[must_use]
pub fn analogous(base: &Color) -> [Color; PALETTE_SIZE] {
    let hsl = base.hsl;
    CENTERED_STEPS.map(|step| Color::from_hsl(hsl.rotate(step * ANALOGOUS_HUE_STEP)))
}

/// Base, its complement, both darkened, and a desaturated base.
#[must_use]
pub fn complementary(base: &Color) -> [Color; PALETTE_SIZE] {
    let hsl = base.hsl;
    let complement = hsl.rotate(180.0);
    let darker = floor_tone(hsl.l - 20.0);

    [
        base.clone(),
        Color::from_hsl(complement),
        Color::from_hsl(hsl.with_lightness(darker)),
        Color::from_hsl(complement.with_lightness(darker)),
        Color::from_hsl(hsl.with_saturation(floor_tone(hsl.s - 20.0))),
    ]
}

/// Three hues 120° apart, then the first two lightened.
#[must_use]
pub fn triadic(base: &Color) -> [Color; PALETTE_SIZE] {
    let hsl = base.hsl;
    let second = hsl.rotate(120.0);
    let third = hsl.rotate(240.0);
    let lighter = ceil_tone(hsl.l + 25.0);

    [
        Color::from_hsl(hsl),
        Color::from_hsl(second),
        Color::from_hsl(third),
        Color::from_hsl(hsl.with_lightness(lighter)),
        Color::from_hsl(second.with_lightness(lighter)),
    ]
}

/// Four hues 90° apart, then a desaturated base.
#[must_use]
pub fn tetradic(base: &Color) -> [Color; PALETTE_SIZE] {
    let hsl = base.hsl;

    [
        Color::from_hsl(hsl),
        Color::from_hsl(hsl.rotate(90.0)),
        Color::from_hsl(hsl.rotate(180.0)),
        Color::from_hsl(hsl.rotate(270.0)),
        Color::from_hsl(hsl.with_saturation(floor_tone(hsl.s - 30.0))),
    ]
}

/// Base unchanged, then four random mid-tone colors.
pub fn random<R: Rng + ?Sized>(base: &Color, rng: &mut R) -> [Color; PALETTE_SIZE] {
    [
        base.clone(),
        random_color(rng),
        random_color(rng),
        random_color(rng),
        random_color(rng),
    ]
}

/// Hue in `[0, 360)`, saturation in `[50, 100)`, lightness in `[30, 70)`
fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    let h = rng.gen_range(0..360u16);
    let s = rng.gen_range(50..100u8);
    let l = rng.gen_range(30..70u8);
    Color::from_hsl(Hsl::new(f64::from(h), f64::from(s), f64::from(l)))
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
    use crate::color::wrap_hue;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_monochromatic_lightness_clamped() {
        // l = 50 -> 10, 30, 50, 70, 90
        let base = Color::from_hex("#FF0000");
        let lightness: Vec<f64> = monochromatic(&base).iter().map(|c| c.hsl.l).collect();
        assert_eq!(lightness, vec![10.0, 30.0, 50.0, 70.0, 90.0]);

        // Very dark base: the lower steps collapse onto the floor
        let dark = Color::from_hsl(Hsl::new(200.0, 60.0, 15.0));
        let lightness: Vec<f64> = monochromatic(&dark).iter().map(|c| c.hsl.l).collect();
        assert_eq!(lightness, vec![10.0, 10.0, 15.0, 35.0, 55.0]);
    }

    #[test]
    fn test_monochromatic_keeps_hue_and_saturation() {
        let base = Color::from_hex("#3B82F6");
        for color in monochromatic(&base) {
            assert!(close(color.hsl.h, base.hsl.h));
            assert!(close(color.hsl.s, base.hsl.s));
        }
    }

    #[test]
    fn test_analogous_wraps_below_zero() {
        let base = Color::from_hsl(Hsl::new(10.0, 80.0, 40.0));
        let hues: Vec<f64> = analogous(&base).iter().map(|c| c.hsl.h).collect();
        assert_eq!(hues, vec![310.0, 340.0, 10.0, 40.0, 70.0]);
    }

    #[test]
    fn test_complementary_entries() {
        let base = Color::from_hsl(Hsl::new(30.0, 15.0, 25.0));
        let colors = complementary(&base);
        assert_eq!(colors[0], base);
        assert_eq!(colors[1].hsl, Hsl::new(210.0, 15.0, 25.0));
        assert_eq!(colors[2].hsl, Hsl::new(30.0, 15.0, 10.0));
        assert_eq!(colors[3].hsl, Hsl::new(210.0, 15.0, 10.0));
        // Saturation floors at 10
        assert_eq!(colors[4].hsl, Hsl::new(30.0, 10.0, 25.0));
    }

    #[test]
    fn test_triadic_lighter_variants_capped() {
        let base = Color::from_hsl(Hsl::new(300.0, 50.0, 80.0));
        let colors = triadic(&base);
        assert!(close(colors[1].hsl.h, 60.0));
        assert!(close(colors[2].hsl.h, 180.0));
        assert_eq!(colors[3].hsl, Hsl::new(300.0, 50.0, 90.0));
        assert!(close(colors[4].hsl.h, 60.0));
        assert_eq!(colors[4].hsl.l, 90.0);
    }

    #[test]
    fn test_tetradic_entries() {
        let base = Color::from_hex("#3B82F6");
        let colors = tetradic(&base);
        for (i, color) in colors.iter().take(4).enumerate() {
            let expected = wrap_hue(base.hsl.h + 90.0 * f64::from(u8::try_from(i).unwrap()));
            assert!(close(color.hsl.h, expected));
            assert!(close(color.hsl.s, base.hsl.s));
        }
        assert!(close(colors[4].hsl.s, base.hsl.s - 30.0));
        assert!(close(colors[4].hsl.h, base.hsl.h));
    }

    #[test]
    fn test_tetradic_desaturated_variant_floored() {
        // s = 25 -> 25 - 30 = -5, floored to 10
        let base = Color::from_hsl(Hsl::new(40.0, 25.0, 50.0));
        let colors = tetradic(&base);
        assert_eq!(colors[4].hsl, Hsl::new(40.0, 10.0, 50.0));

        // Gray base has s = 0, so the variant also lands on the floor
        let gray = tetradic(&Color::from_hex("#808080"));
        assert_eq!(gray[4].hsl.s, 10.0);
    }

    #[test]
    fn test_random_ranges_and_base() {
        let base = Color::from_hex("#3B82F6");
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let colors = random(&base, &mut rng);
            assert_eq!(colors[0], base);
            for color in &colors[1..] {
                assert!((0.0..360.0).contains(&color.hsl.h));
                assert!((50.0..100.0).contains(&color.hsl.s));
                assert!((30.0..70.0).contains(&color.hsl.l));
            }
        }
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let base = Color::from_hex("#10B981");
        let a = random(&base, &mut StdRng::seed_from_u64(99));
        let b = random(&base, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
