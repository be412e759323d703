//! Play context handed to `Card::play`.
//!
//! A `GameState` always carries the mana available to the player. Callers may
//! attach any number of extra integer values (turn number, life totals, ...);
//! cards read only what they understand and ignore the rest.
//!
//! ## State Values (i64 only)
//!
//! Extra values use `FxHashMap<String, i64>`, the same shape as counters on
//! cards. Booleans are stored as 0/1.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Context for playing a card.
///
/// ```
/// use datadeck::core::GameState;
///
/// let state = GameState::with_mana(6).with_value("turn", 3);
/// assert_eq!(state.available_mana, 6);
/// assert_eq!(state.get("turn", 0), 3);
/// assert_eq!(state.get("unknown", -1), -1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Mana the player can spend right now.
    pub available_mana: i64,

    /// Additional values, ignored by cards that do not know them.
    #[serde(default)]
    pub values: FxHashMap<String, i64>,
}

impl GameState {
    /// Create a context with the given mana and no extra values.
    #[must_use]
    pub fn with_mana(available_mana: i64) -> Self {
        Self {
            available_mana,
            values: FxHashMap::default(),
        }
    }

    /// Attach an extra value (builder pattern).
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: i64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Set an extra value.
    pub fn set(&mut self, key: impl Into<String>, value: i64) {
        self.values.insert(key.into(), value);
    }

    /// Get an extra value with a default.
    #[must_use]
    pub fn get(&self, key: &str, default: i64) -> i64 {
        self.values.get(key).copied().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mana() {
        let state = GameState::with_mana(5);
        assert_eq!(state.available_mana, 5);
        assert!(state.values.is_empty());
    }

    #[test]
    fn test_extra_values() {
        let mut state = GameState::with_mana(3).with_value("turn", 2);
        state.set("life", 20);

        assert_eq!(state.get("turn", 0), 2);
        assert_eq!(state.get("life", 0), 20);
        assert_eq!(state.get("missing", 9), 9);
    }

    #[test]
    fn test_deserialize_without_values() {
        let state: GameState = serde_json::from_str(r#"{"available_mana": 4}"#).unwrap();
        assert_eq!(state, GameState::with_mana(4));
    }
}
