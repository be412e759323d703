//! Configuration for strategies, the game engine and tournaments.
//!
//! Every config has a `Default` matching the standard rules and `with_*`
//! builder methods for overrides. All configs are serde-serializable so a
//! driver can load them from JSON.

use serde::{Deserialize, Serialize};

/// Mana budget the reference strategies spend per turn.
pub const DEFAULT_MANA_BUDGET: i64 = 5;

/// Elo K-factor: maximum rating change from one match.
pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// Elo scale: a rating gap of this size means 10:1 expected odds.
pub const DEFAULT_RATING_SCALE: f64 = 400.0;

/// Rating is divided by this before being added to a match score.
pub const DEFAULT_SCORE_RATING_DIVISOR: f64 = 10.0;

/// Strategy configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Mana available for one turn.
    pub mana_budget: i64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            mana_budget: DEFAULT_MANA_BUDGET,
        }
    }
}

impl StrategyConfig {
    /// Override the mana budget.
    #[must_use]
    pub fn with_mana_budget(mut self, mana_budget: i64) -> Self {
        self.mana_budget = mana_budget;
        self
    }
}

/// Which factory method fills a hand slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotCategory {
    Creature,
    Spell,
    Artifact,
}

/// One card the engine draws from the factory each turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSlot {
    /// Factory method to call.
    pub category: SlotCategory,
    /// Name hint passed to the factory. `None` asks for the default card.
    pub hint: Option<String>,
}

impl HandSlot {
    /// A creature slot with a name hint.
    #[must_use]
    pub fn creature(hint: impl Into<String>) -> Self {
        Self {
            category: SlotCategory::Creature,
            hint: Some(hint.into()),
        }
    }

    /// A spell slot with a name hint.
    #[must_use]
    pub fn spell(hint: impl Into<String>) -> Self {
        Self {
            category: SlotCategory::Spell,
            hint: Some(hint.into()),
        }
    }

    /// An artifact slot with a name hint.
    #[must_use]
    pub fn artifact(hint: impl Into<String>) -> Self {
        Self {
            category: SlotCategory::Artifact,
            hint: Some(hint.into()),
        }
    }
}

/// Game engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Shape of the hand built every simulated turn.
    pub hand: Vec<HandSlot>,
}

impl Default for EngineConfig {
    /// Two creatures ("Dragon", "Goblin") and one spell ("Lightning Bolt").
    fn default() -> Self {
        Self {
            hand: vec![
                HandSlot::creature("Dragon"),
                HandSlot::creature("Goblin"),
                HandSlot::spell("Lightning Bolt"),
            ],
        }
    }
}

impl EngineConfig {
    /// Replace the hand shape.
    #[must_use]
    pub fn with_hand(mut self, hand: Vec<HandSlot>) -> Self {
        self.hand = hand;
        self
    }
}

/// Tournament rating configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Elo K-factor (default: 32).
    pub k_factor: f64,

    /// Elo scale (default: 400).
    pub rating_scale: f64,

    /// Divisor applied to rating in match scores (default: 10).
    pub score_rating_divisor: f64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            rating_scale: DEFAULT_RATING_SCALE,
            score_rating_divisor: DEFAULT_SCORE_RATING_DIVISOR,
        }
    }
}

impl TournamentConfig {
    /// Override the K-factor.
    #[must_use]
    pub fn with_k_factor(mut self, k_factor: f64) -> Self {
        self.k_factor = k_factor;
        self
    }

    /// Override the Elo scale.
    #[must_use]
    pub fn with_rating_scale(mut self, rating_scale: f64) -> Self {
        self.rating_scale = rating_scale;
        self
    }

    /// Override the score divisor.
    #[must_use]
    pub fn with_score_rating_divisor(mut self, divisor: f64) -> Self {
        self.score_rating_divisor = divisor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_hand() {
        let config = EngineConfig::default();
        assert_eq!(config.hand.len(), 3);
        assert_eq!(config.hand[0], HandSlot::creature("Dragon"));
        assert_eq!(config.hand[2].category, SlotCategory::Spell);
    }

    #[test]
    fn test_default_tournament_config() {
        let config = TournamentConfig::default();
        assert_eq!(config.k_factor, 32.0);
        assert_eq!(config.rating_scale, 400.0);
        assert_eq!(config.score_rating_divisor, 10.0);
    }

    #[test]
    fn test_builder_pattern() {
        let strategy = StrategyConfig::default().with_mana_budget(8);
        assert_eq!(strategy.mana_budget, 8);

        let tournament = TournamentConfig::default()
            .with_k_factor(16.0)
            .with_rating_scale(200.0);
        assert_eq!(tournament.k_factor, 16.0);
        assert_eq!(tournament.rating_scale, 200.0);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_hand(vec![HandSlot::artifact("mana_ring")]);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
