//! Integration tests for palette generation and color conversion
//!
//! These exercise the public API the palette page uses: converting colors,
//! generating each strategy, and the history/export round through the studio.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use swatchkit::color::{hex_to_rgb, hsl_to_hex, rgb_to_hsl, wrap_hue};
use swatchkit::{
    generate_palette, generate_palette_from_tag, ColorFormat, PaletteStudio, Strategy,
    StudioConfig, SwatchError, PALETTE_SIZE,
};

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// Color conversion
// ============================================================================

mod conversion {
    use super::*;
    use test_case::test_case;

    #[test_case("#FF0000", 255, 0, 0 ; "red")]
    #[test_case("#00ff00", 0, 255, 0 ; "lowercase green")]
    #[test_case("0000FF", 0, 0, 255 ; "no hash")]
    #[test_case("#3B82F6", 59, 130, 246 ; "tailwind blue")]
    #[test_case("#xyz123", 0, 0, 0 ; "malformed")]
    #[test_case("#FFF", 0, 0, 0 ; "shorthand not accepted")]
    fn test_hex_to_rgb(hex: &str, r: u8, g: u8, b: u8) {
        let rgb = hex_to_rgb(hex);
        assert_eq!((rgb.r, rgb.g, rgb.b), (r, g, b));
    }

    #[test]
    fn test_red_to_hsl() {
        let hsl = rgb_to_hsl(255, 0, 0);
        assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 100.0, 50.0));
    }

    #[test_case("#3B82F6")]
    #[test_case("#10B981")]
    #[test_case("#F59E0B")]
    #[test_case("#7F7F7F")]
    #[test_case("#010203")]
    #[test_case("#FEFDFC")]
    fn test_roundtrip(hex: &str) {
        let rgb = hex_to_rgb(hex);
        let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
        let back = hex_to_rgb(&hsl_to_hex(hsl.h, hsl.s, hsl.l));
        assert!(back.r.abs_diff(rgb.r) <= 1);
        assert!(back.g.abs_diff(rgb.g) <= 1);
        assert!(back.b.abs_diff(rgb.b) <= 1);
    }
}

// ============================================================================
// Strategies
// ============================================================================

mod strategies {
    use super::*;
    use test_case::test_case;

    #[test_case(Strategy::Monochromatic)]
    #[test_case(Strategy::Analogous)]
    #[test_case(Strategy::Complementary)]
    #[test_case(Strategy::Triadic)]
    #[test_case(Strategy::Tetradic)]
    #[test_case(Strategy::Random)]
    fn test_five_colors(strategy: Strategy) {
        for base in ["#3B82F6", "#000000", "#FFFFFF", "#808080", "garbage"] {
            let palette = generate_palette(base, strategy, &mut rng());
            assert_eq!(palette.colors.len(), PALETTE_SIZE);
            for color in &palette.colors {
                assert_eq!(swatchkit::color::hex_to_rgb(&color.hex), color.rgb);
            }
        }
    }

    #[test]
    fn test_analogous_hues() {
        let palette = generate_palette("#3B82F6", Strategy::Analogous, &mut rng());
        let base_h = rgb_to_hsl(59, 130, 246).h;
        for (color, offset) in palette.colors.iter().zip([-60.0, -30.0, 0.0, 30.0, 60.0]) {
            assert!(close(color.hsl.h, wrap_hue(base_h + offset)));
        }
    }

    #[test]
    fn test_triadic_hues() {
        let palette = generate_palette("#3B82F6", Strategy::Triadic, &mut rng());
        let base_h = rgb_to_hsl(59, 130, 246).h;
        assert!(close(palette.colors[0].hsl.h, base_h));
        assert!(close(palette.colors[1].hsl.h, wrap_hue(base_h + 120.0)));
        assert!(close(palette.colors[2].hsl.h, wrap_hue(base_h + 240.0)));
    }

    #[test_case("#3B82F6" ; "mid lightness")]
    #[test_case("#0A0A14" ; "near black")]
    #[test_case("#F5F5FA" ; "near white")]
    fn test_monochromatic_lightness(base: &str) {
        let palette = generate_palette(base, Strategy::Monochromatic, &mut rng());
        let lightness: Vec<f64> = palette.colors.iter().map(|c| c.hsl.l).collect();
        assert!(lightness.windows(2).all(|w| w[0] <= w[1]));
        assert!(lightness.iter().all(|l| (10.0..=90.0).contains(l)));
    }

    #[test]
    fn test_complementary_scenario() {
        let palette = generate_palette("#3B82F6", Strategy::Complementary, &mut rng());
        let base = rgb_to_hsl(59, 130, 246);
        let comp_h = wrap_hue(base.h + 180.0);

        assert_eq!(palette.colors[0].hex, "#3B82F6");

        let entry1 = palette.colors[1].hsl;
        assert!(close(entry1.h, comp_h));
        assert!(close(entry1.s, base.s));
        assert!(close(entry1.l, base.l));

        let entry2 = palette.colors[2].hsl;
        assert!(close(entry2.h, base.h));
        assert!(close(entry2.l, base.l - 20.0));

        let entry3 = palette.colors[3].hsl;
        assert!(close(entry3.h, comp_h));
        assert!(close(entry3.l, base.l - 20.0));

        let entry4 = palette.colors[4].hsl;
        assert!(close(entry4.h, base.h));
        assert!(close(entry4.s, base.s - 20.0));
        assert!(close(entry4.l, base.l));
    }

    #[test]
    fn test_random_scenario() {
        let mut rng = rng();
        for _ in 0..50 {
            let palette = generate_palette("#3B82F6", Strategy::Random, &mut rng);
            assert_eq!(palette.colors[0].hex, "#3B82F6");
            for color in &palette.colors[1..] {
                assert!((50.0..100.0).contains(&color.hsl.s));
                assert!((30.0..70.0).contains(&color.hsl.l));
            }
        }
    }

    #[test_case(""; "empty")]
    #[test_case("pastel"; "unknown name")]
    #[test_case("mono"; "prefix")]
    fn test_unknown_strategy(tag: &str) {
        let err = generate_palette_from_tag("#3B82F6", tag, &mut rng()).unwrap_err();
        assert!(matches!(err, SwatchError::UnknownStrategy(_)));
    }
}

// ============================================================================
// Studio: history and export
// ============================================================================

mod studio {
    use super::*;

    #[test]
    fn test_history_and_json_export() {
        let mut studio = PaletteStudio::new(StudioConfig {
            history_capacity: 2,
            seed: Some(5),
            strict_hex: false,
        })
        .unwrap();

        let first = studio.generate("#3B82F6", "triadic").unwrap();
        let second = studio.generate("#3B82F6", "tetradic").unwrap();
        let third = studio.generate("#3B82F6", "monochromatic").unwrap();

        let ids: Vec<&str> = studio.history().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec![third.id.as_str(), second.id.as_str()]);
        assert!(studio.export(&first.id).is_err());

        let json = studio.export_json(&second.id).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Tetradic Palette");
        assert_eq!(value["type"], "tetradic");
        assert_eq!(value["colors"][0]["hex"], "#3B82F6");
        assert_eq!(value["colors"][0]["hsl"], "hsl(217, 91%, 60%)");
    }

    #[test]
    fn test_copy_formats() {
        let mut studio = PaletteStudio::new(StudioConfig::default()).unwrap();
        let palette = studio.generate("#FF0000", "complementary").unwrap();
        assert_eq!(
            studio.copy_text(&palette.id, 1, ColorFormat::Hex).unwrap(),
            "#00FFFF"
        );
        assert_eq!(
            studio.copy_text(&palette.id, 1, ColorFormat::Hsl).unwrap(),
            "hsl(180, 100%, 50%)"
        );
    }

    #[test]
    fn test_palette_serializes_type_tag() {
        let palette = generate_palette("#3B82F6", Strategy::Analogous, &mut rng());
        let value = serde_json::to_value(&palette).unwrap();
        assert_eq!(value["type"], "analogous");
        assert_eq!(value["name"], "Analogous Palette");
        assert_eq!(value["colors"].as_array().unwrap().len(), 5);
        assert!(value["createdAtMs"].is_u64());
    }
}
