//! Structured error types for swatchkit.

/// All errors that can occur while generating, storing or exporting palettes.
#[derive(Debug, thiserror::Error)]
pub enum SwatchError {
    /// Palette strategy tag not recognised.
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Hex color that is not exactly six hex digits.
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// Clipboard/text format not recognised.
    #[error("Unknown color format: {0}")]
    UnknownFormat(String),

    /// No palette with this id in the history.
    #[error("Palette not found: {0}")]
    PaletteNotFound(String),

    /// Swatch index past the end of a palette.
    #[error("Swatch index {index} out of range (palette has {len} colors)")]
    SwatchOutOfRange { index: usize, len: usize },

    /// Rejected studio configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SwatchError>;

#[cfg(target_arch = "wasm32")]
impl From<SwatchError> for wasm_bindgen::JsValue {
    fn from(e: SwatchError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SwatchError::UnknownStrategy("pastel".to_string()).to_string(),
            "Unknown strategy: pastel"
        );
        assert_eq!(
            SwatchError::SwatchOutOfRange { index: 7, len: 5 }.to_string(),
            "Swatch index 7 out of range (palette has 5 colors)"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let err: SwatchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, SwatchError::Json(_)));
    }
}
