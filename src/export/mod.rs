//! Palette export and clipboard text.
//!
//! Produces the per-color copy strings and the JSON document offered as a
//! download. Palettes are only read, never modified.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, SwatchError};
use crate::types::{Color, Palette, Strategy};

/// Text representation to copy a color as
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        })
    }
}

impl FromStr for ColorFormat {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            _ => Err(SwatchError::UnknownFormat(s.to_string())),
        }
    }
}

/// CSS-style text for the clipboard: `#3B82F6`, `rgb(59, 130, 246)`,
/// `hsl(217, 91%, 60%)`
#[must_use]
pub fn copy_text(color: &Color, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => color.hex.clone(),
        ColorFormat::Rgb => {
            let rgb = color.rgb;
            format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
        }
        ColorFormat::Hsl => {
            let (h, s, l) = color.hsl.rounded();
            format!("hsl({h}, {s}%, {l}%)")
        }
    }
}

/// Caption shown under a swatch: `#3B82F6`, `59, 130, 246`, `217°, 91%, 60%`
#[must_use]
pub fn display_text(color: &Color, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => color.hex.clone(),
        ColorFormat::Rgb => {
            let rgb = color.rgb;
            format!("{}, {}, {}", rgb.r, rgb.g, rgb.b)
        }
        ColorFormat::Hsl => {
            let (h, s, l) = color.hsl.rounded();
            format!("{h}°, {s}%, {l}%")
        }
    }
}

/// One color in an exported palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedColor {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
}

impl From<&Color> for ExportedColor {
    fn from(color: &Color) -> Self {
        Self {
            hex: copy_text(color, ColorFormat::Hex),
            rgb: copy_text(color, ColorFormat::Rgb),
            hsl: copy_text(color, ColorFormat::Hsl),
        }
    }
}

/// Download document for a palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedPalette {
    pub name: String,
    #[serde(rename = "type")]
    pub strategy: Strategy,
    pub colors: Vec<ExportedColor>,
}

impl ExportedPalette {
    /// Pretty-printed JSON with two-space indentation
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// UTF-8 JSON bytes for a file download
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Write the download bytes to `path`
    ///
    /// # Errors
    /// Returns `SwatchError::Io` if the file cannot be written.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }
}

impl From<&Palette> for ExportedPalette {
    fn from(palette: &Palette) -> Self {
        Self {
            name: palette.name.clone(),
            strategy: palette.strategy,
            colors: palette.colors.iter().map(ExportedColor::from).collect(),
        }
    }
}

/// Download filename: `"Analogous Palette"` -> `analogous-palette.json`
#[must_use]
pub fn export_filename(palette: &Palette) -> String {
    let slug = palette
        .name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{slug}.json")
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
    use crate::types::Hsl;

    #[test]
    fn test_copy_text_formats() {
        let color = Color::from_hex("#3B82F6");
        assert_eq!(copy_text(&color, ColorFormat::Hex), "#3B82F6");
        assert_eq!(copy_text(&color, ColorFormat::Rgb), "rgb(59, 130, 246)");
        assert_eq!(copy_text(&color, ColorFormat::Hsl), "hsl(217, 91%, 60%)");
    }

    #[test]
    fn test_display_text_formats() {
        let color = Color::from_hex("#3B82F6");
        assert_eq!(display_text(&color, ColorFormat::Rgb), "59, 130, 246");
        assert_eq!(display_text(&color, ColorFormat::Hsl), "217°, 91%, 60%");
    }

    #[test]
    fn test_hsl_text_never_shows_360() {
        let color = Color::from_hsl(Hsl::new(359.7, 50.0, 50.0));
        assert_eq!(copy_text(&color, ColorFormat::Hsl), "hsl(0, 50%, 50%)");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("RGB".parse::<ColorFormat>().unwrap(), ColorFormat::Rgb);
        assert!(matches!(
            "cmyk".parse::<ColorFormat>(),
            Err(SwatchError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_export_json_shape() {
        let colors = std::array::from_fn(|_| Color::from_hex("#FF0000"));
        let palette = Palette::new(Strategy::Monochromatic, colors, 1_700_000_000_000);
        let json = ExportedPalette::from(&palette).to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Monochromatic Palette");
        assert_eq!(value["type"], "monochromatic");
        assert_eq!(value["colors"].as_array().unwrap().len(), 5);
        assert_eq!(value["colors"][0]["hex"], "#FF0000");
        assert_eq!(value["colors"][0]["rgb"], "rgb(255, 0, 0)");
        assert_eq!(value["colors"][0]["hsl"], "hsl(0, 100%, 50%)");
        assert!(json.starts_with("{\n  \"name\""));
    }

    #[test]
    fn test_bytes_match_json() {
        let colors = std::array::from_fn(|_| Color::from_hex("#3B82F6"));
        let palette = Palette::new(Strategy::Triadic, colors, 1);
        let exported = ExportedPalette::from(&palette);
        assert_eq!(
            exported.to_bytes().unwrap(),
            exported.to_json().unwrap().into_bytes()
        );
    }

    #[test]
    fn test_write_to_file() {
        let colors = std::array::from_fn(|_| Color::from_hex("#10B981"));
        let palette = Palette::new(Strategy::Analogous, colors, 2);
        let exported = ExportedPalette::from(&palette);

        let path = std::env::temp_dir().join(format!(
            "swatchkit-export-{}-{}",
            std::process::id(),
            export_filename(&palette)
        ));
        exported.write_to(&path).unwrap();
        let written = fs::read(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(written, exported.to_bytes().unwrap());
    }

    #[test]
    fn test_write_to_missing_dir_is_io_error() {
        let colors = std::array::from_fn(|_| Color::default());
        let exported = ExportedPalette::from(&Palette::new(Strategy::Random, colors, 3));
        let path = std::env::temp_dir()
            .join("swatchkit-no-such-dir")
            .join("nested")
            .join("palette.json");
        assert!(matches!(exported.write_to(&path), Err(SwatchError::Io(_))));
    }

    #[test]
    fn test_export_filename() {
        let colors = std::array::from_fn(|_| Color::default());
        let palette = Palette::new(Strategy::Complementary, colors, 1);
        assert_eq!(export_filename(&palette), "complementary-palette.json");
    }
}
