//! Browser-side tests for the JavaScript bindings
//!
//! Run with: wasm-pack test --headless --firefox
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use swatchkit::{Palette, PaletteStudio, Rgb};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn generate_palette_returns_object() {
    let value = swatchkit::generate_palette_js("#3B82F6", "triadic").unwrap();
    let palette: Palette = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(palette.name, "Triadic Palette");
    assert_eq!(palette.colors[0].hex, "#3B82F6");
}

#[wasm_bindgen_test]
fn unknown_type_is_rejected() {
    let err = swatchkit::generate_palette_js("#3B82F6", "pastel").unwrap_err();
    assert_eq!(err.as_string().unwrap(), "Unknown strategy: pastel");
}

#[wasm_bindgen_test]
fn hex_to_rgb_object() {
    let value = swatchkit::hex_to_rgb_js("#FF0000").unwrap();
    let rgb: Rgb = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(rgb, Rgb::new(255, 0, 0));
}

#[wasm_bindgen_test]
fn studio_history_and_export() {
    let mut studio = PaletteStudio::js_new(JsValue::UNDEFINED).unwrap();
    let value = studio.js_generate("#3B82F6", "analogous").unwrap();
    let palette: Palette = serde_wasm_bindgen::from_value(value).unwrap();

    let history: Vec<Palette> = serde_wasm_bindgen::from_value(studio.js_history().unwrap()).unwrap();
    assert_eq!(history.len(), 1);

    let text = studio.js_copy_text(&palette.id, 2, "hex").unwrap();
    assert_eq!(text, palette.colors[2].hex);
    assert_eq!(
        studio.js_export_filename(&palette.id).unwrap(),
        "analogous-palette.json"
    );
}
