//! Studio configuration.
//!
//! Accepted from Rust, from a JSON document, or from a JS options object:
//!
//! ```json
//! { "historyCapacity": 10, "seed": 42, "strictHex": false }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::history::DEFAULT_HISTORY_CAPACITY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudioConfig {
    /// Palettes kept before the oldest is evicted
    pub history_capacity: usize,
    /// Seed for the random strategy; fresh OS entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Reject malformed base colors instead of treating them as black
    pub strict_hex: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            seed: None,
            strict_hex: false,
        }
    }
}

impl StudioConfig {
    /// # Errors
    /// Returns an error if the JSON is malformed or the values are invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `SwatchError::InvalidConfig` if the history capacity is zero.
    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(SwatchError::InvalidConfig(
                "historyCapacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = StudioConfig::from_json("{}").unwrap();
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.history_capacity, 10);
    }

    #[test]
    fn test_camel_case_fields() {
        let config =
            StudioConfig::from_json(r#"{"historyCapacity": 3, "seed": 42, "strictHex": true}"#)
                .unwrap();
        assert_eq!(config.history_capacity, 3);
        assert_eq!(config.seed, Some(42));
        assert!(config.strict_hex);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = StudioConfig::from_json(r#"{"historyCapacity": 0}"#).unwrap_err();
        assert!(matches!(err, SwatchError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = StudioConfig::from_json("{").unwrap_err();
        assert!(matches!(err, SwatchError::Json(_)));
    }
}
