//! Bounded history of recently generated palettes.
//!
//! Newest palettes sit at the front. Pushing past capacity evicts the oldest.

use std::collections::VecDeque;

use crate::error::{Result, SwatchError};
use crate::types::Palette;

/// Palettes kept by default
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct PaletteHistory {
    entries: VecDeque<Palette>,
    capacity: usize,
}

impl PaletteHistory {
    /// # Errors
    /// Returns `SwatchError::InvalidConfig` if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SwatchError::InvalidConfig(
                "history capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Insert a palette as the newest entry, returning the evicted oldest one
    /// if the history was full.
    pub fn push(&mut self, palette: Palette) -> Option<Palette> {
        self.entries.push_front(palette);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Palette> {
        self.entries.front()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Palette> {
        self.entries.iter().find(|p| p.id == id)
    }

    /// Discard one palette by id.
    ///
    /// # Errors
    /// Returns `SwatchError::PaletteNotFound` if no palette has this id.
    pub fn remove(&mut self, id: &str) -> Result<Palette> {
        let index = self
            .entries
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| SwatchError::PaletteNotFound(id.to_string()))?;
        self.entries
            .remove(index)
            .ok_or_else(|| SwatchError::PaletteNotFound(id.to_string()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for PaletteHistory {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(DEFAULT_HISTORY_CAPACITY),
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
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
    use crate::types::{Color, Strategy};

    fn palette(ts: u64) -> Palette {
        let colors = std::array::from_fn(|_| Color::from_hex("#3B82F6"));
        Palette::new(Strategy::Analogous, colors, ts)
    }

    #[test]
    fn test_newest_first() {
        let mut history = PaletteHistory::default();
        history.push(palette(1));
        history.push(palette(2));
        let ids: Vec<&str> = history.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(history.latest().unwrap().id, "2");
    }

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let mut history = PaletteHistory::default();
        for ts in 1..=10 {
            assert!(history.push(palette(ts)).is_none());
        }
        let evicted = history.push(palette(11)).unwrap();
        assert_eq!(evicted.id, "1");
        assert_eq!(history.len(), 10);
        assert!(history.get("1").is_none());
        assert!(history.get("11").is_some());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut history = PaletteHistory::with_capacity(3).unwrap();
        history.push(palette(1));
        history.push(palette(2));
        assert_eq!(history.remove("1").unwrap().id, "1");
        assert!(matches!(
            history.remove("1"),
            Err(SwatchError::PaletteNotFound(_))
        ));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            PaletteHistory::with_capacity(0),
            Err(SwatchError::InvalidConfig(_))
        ));
    }
}
