//! Palette generation
//!
//! Each strategy derives exactly [`PALETTE_SIZE`] colors from one base color.
//! Everything except [`Strategy::Random`] is a pure function of the base; the
//! random strategy draws from the caller's RNG so a seeded generator gives a
//! reproducible palette.

mod strategies;

use rand::Rng;

use crate::error::Result;
use crate::types::{Color, Palette, Strategy, PALETTE_SIZE};

pub use strategies::{analogous, complementary, monochromatic, random, tetradic, triadic};

/// Derive the swatches for `strategy` from `base`.
pub fn generate_swatches<R: Rng + ?Sized>(
    base: &Color,
    strategy: Strategy,
    rng: &mut R,
) -> [Color; PALETTE_SIZE] {
    match strategy {
        Strategy::Monochromatic => monochromatic(base),
        Strategy::Analogous => analogous(base),
        Strategy::Complementary => complementary(base),
        Strategy::Triadic => triadic(base),
        Strategy::Tetradic => tetradic(base),
        Strategy::Random => random(base, rng),
    }
}

/// Generate a palette from a hex base color, stamped with the current time.
///
/// Malformed hex is treated as black.
pub fn generate_palette<R: Rng + ?Sized>(
    base_hex: &str,
    strategy: Strategy,
    rng: &mut R,
) -> Palette {
    let base = Color::from_hex(base_hex);
    let colors = generate_swatches(&base, strategy, rng);
    Palette::new(strategy, colors, now_ms())
}

/// Generate a palette from a strategy tag such as `"triadic"`.
///
/// # Errors
/// Returns `SwatchError::UnknownStrategy` if the tag names no strategy.
pub fn generate_palette_from_tag<R: Rng + ?Sized>(
    base_hex: &str,
    tag: &str,
    rng: &mut R,
) -> Result<Palette> {
    let strategy = tag.parse()?;
    Ok(generate_palette(base_hex, strategy, rng))
}

/// Wall-clock time in milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub(crate) fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Wall-clock time in milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
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
    use crate::error::SwatchError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_strategy_yields_five() {
        let mut rng = StdRng::seed_from_u64(7);
        for strategy in Strategy::ALL {
            let palette = generate_palette("#3B82F6", strategy, &mut rng);
            assert_eq!(palette.colors.len(), PALETTE_SIZE);
            assert_eq!(palette.strategy, strategy);
        }
    }

    #[test]
    fn test_palette_name_and_id() {
        let mut rng = StdRng::seed_from_u64(7);
        let palette = generate_palette("#3B82F6", Strategy::Tetradic, &mut rng);
        assert_eq!(palette.name, "Tetradic Palette");
        assert_eq!(palette.id, palette.created_at_ms.to_string());
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = generate_palette_from_tag("#3B82F6", "pastel", &mut rng).unwrap_err();
        assert!(matches!(err, SwatchError::UnknownStrategy(tag) if tag == "pastel"));
    }

    #[test]
    fn test_tag_is_case_insensitive() {
        let mut rng = StdRng::seed_from_u64(7);
        let palette = generate_palette_from_tag("#3B82F6", " Triadic ", &mut rng).unwrap();
        assert_eq!(palette.strategy, Strategy::Triadic);
    }

    #[test]
    fn test_malformed_base_treated_as_black() {
        let mut rng = StdRng::seed_from_u64(7);
        let palette = generate_palette("not-a-color", Strategy::Complementary, &mut rng);
        assert_eq!(palette.colors[0].hex, "#000000");
    }
}
