//! swatchkit - color palette generation for the web
//!
//! Builds five-color palettes from one base color and converts colors
//! between hex, RGB and HSL, in the browser via WebAssembly or natively:
//! - Six strategies: monochromatic, analogous, complementary, triadic,
//!   tetradic, random
//! - Clipboard strings and JSON export for each palette
//! - Bounded history of the most recent palettes
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { PaletteStudio } from 'swatchkit';
//! await init();
//! const studio = new PaletteStudio({ historyCapacity: 10 });
//! const palette = studio.generate('#3B82F6', 'triadic');
//! studio.copyToClipboard(palette.id, 0, 'hex');
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use swatchkit::{generate_palette_from_tag, PALETTE_SIZE};
//!
//! let palette = generate_palette_from_tag("#3B82F6", "analogous", &mut rand::thread_rng()).unwrap();
//! assert_eq!(palette.colors.len(), PALETTE_SIZE);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod palette;
pub mod studio;
pub mod types;

use wasm_bindgen::prelude::*;

pub use config::StudioConfig;
pub use error::SwatchError;
pub use export::{ColorFormat, ExportedColor, ExportedPalette};
pub use history::PaletteHistory;
pub use palette::{generate_palette, generate_palette_from_tag, generate_swatches};
pub use studio::PaletteStudio;

pub use types::*;

/// Generate a palette and return it as a `JsValue`
///
/// # Arguments
/// * `base_color` - Base color as `#RRGGBB`; malformed input is treated as black
/// * `palette_type` - One of `monochromatic`, `analogous`, `complementary`,
///   `triadic`, `tetradic`, `random`
///
/// # Errors
/// Returns an error if the palette type is unknown.
#[wasm_bindgen(js_name = "generatePalette")]
pub fn generate_palette_js(base_color: &str, palette_type: &str) -> Result<JsValue, JsValue> {
    let palette = generate_palette_from_tag(base_color, palette_type, &mut rand::thread_rng())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&palette)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Generate a palette and return the export document as a JSON string
///
/// # Errors
/// Returns an error if the palette type is unknown.
#[wasm_bindgen(js_name = "generatePaletteJson")]
pub fn generate_palette_json(base_color: &str, palette_type: &str) -> Result<String, JsValue> {
    let palette = generate_palette_from_tag(base_color, palette_type, &mut rand::thread_rng())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    ExportedPalette::from(&palette)
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a hex color into `{ r, g, b }` (black on malformed input)
///
/// # Errors
/// Returns an error if the result cannot be converted to a JS object.
#[wasm_bindgen(js_name = "hexToRgb")]
pub fn hex_to_rgb_js(hex: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&color::hex_to_rgb(hex))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Convert RGB channels into `{ h, s, l }`
///
/// # Errors
/// Returns an error if the result cannot be converted to a JS object.
#[wasm_bindgen(js_name = "rgbToHsl")]
pub fn rgb_to_hsl_js(r: u8, g: u8, b: u8) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&color::rgb_to_hsl(r, g, b))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Convert HSL (degrees, percent, percent) into `#RRGGBB`
#[must_use]
#[wasm_bindgen(js_name = "hslToHex")]
pub fn hsl_to_hex_js(h: f64, s: f64, l: f64) -> String {
    color::hsl_to_hex(h, s, l)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
