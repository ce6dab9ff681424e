use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Color;
use crate::error::SwatchError;

/// Number of colors in every palette
pub const PALETTE_SIZE: usize = 5;

/// Base color the tool starts with
pub const DEFAULT_BASE_COLOR: &str = "#3B82F6";

/// Rule for deriving a palette from one base color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Monochromatic,
    #[default]
    Analogous,
    Complementary,
    Triadic,
    Tetradic,
    Random,
}

impl Strategy {
    pub const ALL: [Self; 6] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
        Self::Tetradic,
        Self::Random,
    ];

    /// Lowercase tag used on the wire
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Random => "random",
        }
    }

    /// Capitalized label, e.g. "Triadic"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monochromatic => "Monochromatic",
            Self::Analogous => "Analogous",
            Self::Complementary => "Complementary",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
            Self::Random => "Random",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Monochromatic => "Uses different shades of the same color",
            Self::Analogous => "Uses colors next to each other on the color wheel",
            Self::Complementary => "Uses colors opposite on the color wheel",
            Self::Triadic => "Uses three colors evenly spaced on the color wheel",
            Self::Tetradic => "Uses four colors forming a rectangle on the color wheel",
            Self::Random => "Generates random harmonious colors",
        }
    }

    /// Palette display name, e.g. "Triadic Palette"
    #[must_use]
    pub fn palette_name(self) -> String {
        format!("{} Palette", self.label())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Strategy {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| SwatchError::UnknownStrategy(s.to_string()))
    }
}

/// An immutable generated palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Creation timestamp in milliseconds, as a string
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub strategy: Strategy,
    pub colors: [Color; PALETTE_SIZE],
    pub created_at_ms: u64,
}

impl Palette {
    #[must_use]
    pub fn new(strategy: Strategy, colors: [Color; PALETTE_SIZE], created_at_ms: u64) -> Self {
        Self {
            id: created_at_ms.to_string(),
            name: strategy.palette_name(),
            strategy,
            colors,
            created_at_ms,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_color_parses() {
        let color = Color::parse_hex(DEFAULT_BASE_COLOR).unwrap();
        assert_eq!(color.hex, DEFAULT_BASE_COLOR);
        assert_eq!(Strategy::default(), Strategy::Analogous);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            Strategy::Tetradic.description(),
            "Uses four colors forming a rectangle on the color wheel"
        );
        for strategy in Strategy::ALL {
            assert!(!strategy.description().is_empty());
        }
    }

    #[test]
    fn test_tag_roundtrip_and_labels() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.tag().parse::<Strategy>().unwrap(), strategy);
            assert_eq!(strategy.to_string(), strategy.tag());
        }
        assert_eq!(Strategy::Monochromatic.palette_name(), "Monochromatic Palette");
    }
}
