//! `PaletteStudio` - the stateful entry point used by the palette page.
//!
//! Owns the things a single generation call does not:
//! - the bounded palette history
//! - the random source for the random strategy
//! - unique, increasing palette ids
//!
//! The Rust API works on every target. The JavaScript methods (wasm32 only)
//! wrap it and exchange plain objects through `serde-wasm-bindgen`.

mod clipboard;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::config::StudioConfig;
use crate::error::{Result, SwatchError};
use crate::export::{copy_text, export_filename, ColorFormat, ExportedPalette};
use crate::history::PaletteHistory;
use crate::palette::{generate_swatches, now_ms};
use crate::types::{Color, Palette, Strategy};

/// Palette generator with history, exported to JavaScript
#[wasm_bindgen]
pub struct PaletteStudio {
    config: StudioConfig,
    history: PaletteHistory,
    rng: StdRng,
    last_created_ms: u64,
}

impl PaletteStudio {
    /// # Errors
    /// Returns `SwatchError::InvalidConfig` if the configuration is rejected.
    pub fn new(config: StudioConfig) -> Result<Self> {
        config.validate()?;
        let history = PaletteHistory::with_capacity(config.history_capacity)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            history,
            rng,
            last_created_ms: 0,
        })
    }

    /// Generate a palette from a strategy tag and record it in the history.
    ///
    /// # Errors
    /// Returns `SwatchError::UnknownStrategy` for an unrecognised tag, and
    /// `SwatchError::InvalidHex` for a malformed base in strict mode.
    pub fn generate(&mut self, base_hex: &str, tag: &str) -> Result<Palette> {
        let strategy = tag.parse()?;
        self.generate_with(base_hex, strategy)
    }

    /// # Errors
    /// Returns `SwatchError::InvalidHex` for a malformed base in strict mode.
    pub fn generate_with(&mut self, base_hex: &str, strategy: Strategy) -> Result<Palette> {
        let base = self.resolve_base(base_hex)?;
        let colors = generate_swatches(&base, strategy, &mut self.rng);
        let palette = Palette::new(strategy, colors, self.next_timestamp());
        self.history.push(palette.clone());
        Ok(palette)
    }

    #[must_use]
    pub const fn history(&self) -> &PaletteHistory {
        &self.history
    }

    #[must_use]
    pub const fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// # Errors
    /// Returns `SwatchError::PaletteNotFound` if no palette has this id.
    pub fn remove(&mut self, id: &str) -> Result<Palette> {
        self.history.remove(id)
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Clipboard text for one swatch of a stored palette.
    ///
    /// # Errors
    /// Returns an error if the palette or swatch does not exist.
    pub fn copy_text(&self, id: &str, index: usize, format: ColorFormat) -> Result<String> {
        let palette = self.palette(id)?;
        let color = palette
            .colors
            .get(index)
            .ok_or(SwatchError::SwatchOutOfRange {
                index,
                len: palette.colors.len(),
            })?;
        Ok(copy_text(color, format))
    }

    /// # Errors
    /// Returns `SwatchError::PaletteNotFound` if no palette has this id.
    pub fn export(&self, id: &str) -> Result<ExportedPalette> {
        self.palette(id).map(ExportedPalette::from)
    }

    /// # Errors
    /// Returns an error if the palette does not exist or cannot be serialized.
    pub fn export_json(&self, id: &str) -> Result<String> {
        self.export(id)?.to_json()
    }

    /// # Errors
    /// Returns `SwatchError::PaletteNotFound` if no palette has this id.
    pub fn export_filename(&self, id: &str) -> Result<String> {
        self.palette(id).map(export_filename)
    }

    fn palette(&self, id: &str) -> Result<&Palette> {
        self.history
            .get(id)
            .ok_or_else(|| SwatchError::PaletteNotFound(id.to_string()))
    }

    fn resolve_base(&self, base_hex: &str) -> Result<Color> {
        if self.config.strict_hex {
            return Color::parse_hex(base_hex);
        }
        Ok(Color::parse_hex(base_hex).unwrap_or_else(|e| {
            warn(&format!("{e}; using #000000"));
            Color::default()
        }))
    }

    /// Millisecond timestamp that is strictly greater than the previous one
    fn next_timestamp(&mut self) -> u64 {
        let now = now_ms();
        let ts = if now > self.last_created_ms {
            now
        } else {
            self.last_created_ms + 1
        };
        self.last_created_ms = ts;
        ts
    }
}

#[cfg(target_arch = "wasm32")]
fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(_message: &str) {}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
fn to_js<T: serde::Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl PaletteStudio {
    /// Create a studio from an optional options object
    /// (`{ historyCapacity, seed, strictHex }`).
    #[wasm_bindgen(constructor)]
    pub fn js_new(options: JsValue) -> std::result::Result<PaletteStudio, JsValue> {
        console_error_panic_hook::set_once();

        let config = if options.is_undefined() || options.is_null() {
            StudioConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("Invalid options: {e}")))?
        };
        Ok(Self::new(config)?)
    }

    #[wasm_bindgen(js_name = "generate")]
    pub fn js_generate(
        &mut self,
        base_hex: &str,
        palette_type: &str,
    ) -> std::result::Result<JsValue, JsValue> {
        let palette = self.generate(base_hex, palette_type)?;
        to_js(&palette)
    }

    /// Stored palettes, newest first
    #[wasm_bindgen(js_name = "history")]
    pub fn js_history(&self) -> std::result::Result<JsValue, JsValue> {
        let palettes: Vec<&Palette> = self.history.iter().collect();
        to_js(&palettes)
    }

    #[wasm_bindgen(js_name = "remove")]
    pub fn js_remove(&mut self, id: &str) -> std::result::Result<(), JsValue> {
        self.remove(id)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = "clear")]
    pub fn js_clear(&mut self) {
        self.clear();
    }

    #[wasm_bindgen(js_name = "copyText")]
    pub fn js_copy_text(
        &self,
        id: &str,
        index: usize,
        format: &str,
    ) -> std::result::Result<String, JsValue> {
        Ok(self.copy_text(id, index, format.parse()?)?)
    }

    /// Write one swatch to the system clipboard and return the copied text
    #[wasm_bindgen(js_name = "copyToClipboard")]
    pub fn js_copy_to_clipboard(
        &self,
        id: &str,
        index: usize,
        format: &str,
    ) -> std::result::Result<String, JsValue> {
        let text = self.copy_text(id, index, format.parse()?)?;
        Self::copy_to_clipboard_internal(&text);
        Ok(text)
    }

    #[wasm_bindgen(js_name = "exportJson")]
    pub fn js_export_json(&self, id: &str) -> std::result::Result<String, JsValue> {
        Ok(self.export_json(id)?)
    }

    #[wasm_bindgen(js_name = "exportFilename")]
    pub fn js_export_filename(&self, id: &str) -> std::result::Result<String, JsValue> {
        Ok(self.export_filename(id)?)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn seeded() -> PaletteStudio {
        PaletteStudio::new(StudioConfig {
            seed: Some(1),
            ..StudioConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_generate_records_history() {
        let mut studio = seeded();
        let palette = studio.generate("#3B82F6", "analogous").unwrap();
        assert_eq!(studio.history().len(), 1);
        assert_eq!(studio.history().latest(), Some(&palette));
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut studio = seeded();
        let ids: Vec<u64> = (0..20)
            .map(|_| studio.generate_with("#3B82F6", Strategy::Triadic).unwrap().created_at_ms)
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_history_capped_at_ten() {
        let mut studio = seeded();
        let first = studio.generate("#3B82F6", "random").unwrap();
        for _ in 0..10 {
            studio.generate("#3B82F6", "random").unwrap();
        }
        assert_eq!(studio.history().len(), 10);
        assert!(matches!(
            studio.export(&first.id),
            Err(SwatchError::PaletteNotFound(_))
        ));
    }

    #[test]
    fn test_unknown_strategy_leaves_history_untouched() {
        let mut studio = seeded();
        assert!(matches!(
            studio.generate("#3B82F6", "pastel"),
            Err(SwatchError::UnknownStrategy(_))
        ));
        assert!(studio.history().is_empty());
    }

    #[test]
    fn test_lenient_and_strict_hex() {
        let mut lenient = seeded();
        let palette = lenient.generate("#12", "complementary").unwrap();
        assert_eq!(palette.colors[0].hex, "#000000");

        let mut strict = PaletteStudio::new(StudioConfig {
            strict_hex: true,
            ..StudioConfig::default()
        })
        .unwrap();
        assert!(matches!(
            strict.generate("#12", "complementary"),
            Err(SwatchError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_copy_text_and_export() {
        let mut studio = seeded();
        let palette = studio.generate("#3B82F6", "complementary").unwrap();
        assert_eq!(
            studio.copy_text(&palette.id, 0, ColorFormat::Rgb).unwrap(),
            "rgb(59, 130, 246)"
        );
        assert!(matches!(
            studio.copy_text(&palette.id, 5, ColorFormat::Hex),
            Err(SwatchError::SwatchOutOfRange { index: 5, len: 5 })
        ));
        let export = studio.export(&palette.id).unwrap();
        assert_eq!(export.name, "Complementary Palette");
        assert_eq!(
            studio.export_filename(&palette.id).unwrap(),
            "complementary-palette.json"
        );
    }

    #[test]
    fn test_same_seed_same_random_palette() {
        let mut a = seeded();
        let mut b = seeded();
        let pa = a.generate("#3B82F6", "random").unwrap();
        let pb = b.generate("#3B82F6", "random").unwrap();
        assert_eq!(pa.colors, pb.colors);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut studio = seeded();
        let palette = studio.generate("#3B82F6", "tetradic").unwrap();
        studio.generate("#3B82F6", "triadic").unwrap();
        studio.remove(&palette.id).unwrap();
        assert_eq!(studio.history().len(), 1);
        studio.clear();
        assert!(studio.history().is_empty());
    }
}
