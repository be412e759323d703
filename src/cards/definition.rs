//! Fields shared by every card, and the snapshot type describing a card.
//!
//! `CardBase` holds name, cost and rarity. Concrete card types embed one and
//! add their own fields. `CardKind` is the closed discriminant every card
//! reports, used wherever cards are categorized (deck statistics, strategy
//! ordering) instead of asking for a concrete type.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};
use super::results::PlayResult;
use crate::core::GameState;

/// Card rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete card category, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardKind {
    Creature,
    Spell,
    Artifact,
    Elite,
    Tournament,
}

impl CardKind {
    /// All kinds, in declaration order.
    pub const ALL: [CardKind; 5] = [
        CardKind::Creature,
        CardKind::Spell,
        CardKind::Artifact,
        CardKind::Elite,
        CardKind::Tournament,
    ];

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardKind::Creature => "Creature",
            CardKind::Spell => "Spell",
            CardKind::Artifact => "Artifact",
            CardKind::Elite => "Elite",
            CardKind::Tournament => "Tournament",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name, cost and rarity.
///
/// Deserialization goes through [`CardBase::new`], so a stored negative cost
/// is clamped the same way.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CardBaseFields")]
pub struct CardBase {
    /// Card name (display and registry ids).
    pub name: String,
    /// Mana cost, never negative.
    pub cost: i64,
    /// Rarity.
    pub rarity: Rarity,
}

/// Unchecked wire form of [`CardBase`].
#[derive(Deserialize)]
struct CardBaseFields {
    name: String,
    cost: i64,
    rarity: Rarity,
}

impl From<CardBaseFields> for CardBase {
    fn from(fields: CardBaseFields) -> Self {
        CardBase::new(fields.name, fields.cost, fields.rarity)
    }
}

impl CardBase {
    /// Create the shared fields. A negative cost is clamped to 0.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: i64, rarity: Rarity) -> Self {
        let name = name.into();
        let cost = if cost < 0 {
            log::warn!("Invalid cost {cost} for '{name}' (< 0), clamped to 0");
            0
        } else {
            cost
        };
        Self { name, cost, rarity }
    }

    /// `true` when `available_mana` covers the cost.
    #[must_use]
    pub fn is_playable(&self, available_mana: i64) -> bool {
        available_mana >= self.cost
    }

    /// Play with the mana check applied first.
    ///
    /// `effect` is only evaluated when the card can be paid for.
    pub fn try_play(&self, state: &GameState, effect: impl FnOnce() -> String) -> PlayResult {
        if self.is_playable(state.available_mana) {
            PlayResult::played(&self.name, self.cost, effect())
        } else {
            log::debug!(
                "Cannot play '{}': costs {}, {} mana available",
                self.name,
                self.cost,
                state.available_mana
            );
            PlayResult::not_played(&self.name)
        }
    }

    /// Start a snapshot for a card of the given kind.
    #[must_use]
    pub fn info(&self, kind: CardKind) -> CardInfo {
        CardInfo {
            name: self.name.clone(),
            cost: self.cost,
            rarity: self.rarity,
            card_type: kind,
            attributes: Attributes::default(),
        }
    }
}

/// Owned snapshot of a card.
///
/// ```
/// use datadeck::cards::{Card, CreatureCard, Rarity};
///
/// let dragon = CreatureCard::new("Fire Dragon", 5, Rarity::Legendary, 7, 5);
/// let info = dragon.card_info();
///
/// assert_eq!(info.name, "Fire Dragon");
/// assert_eq!(info.get_int("attack", 0), 7);
/// assert_eq!(info.get_int("health", 0), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    pub name: String,
    pub cost: i64,
    pub rarity: Rarity,
    pub card_type: CardKind,
    /// Type-specific fields.
    pub attributes: Attributes,
}

impl CardInfo {
    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }

    /// Get an integer attribute with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_attr(key)
            .and_then(AttributeValue::as_int)
            .unwrap_or(default)
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get_attr(key).and_then(AttributeValue::as_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_cost_clamped() {
        let base = CardBase::new("Glitch", -3, Rarity::Common);
        assert_eq!(base.cost, 0);
        assert!(base.is_playable(0));
    }

    #[test]
    fn test_deserialize_clamps_cost() {
        let json = r#"{"name":"Glitch","cost":-3,"rarity":"Epic"}"#;
        let base: CardBase = serde_json::from_str(json).unwrap();
        assert_eq!(base, CardBase::new("Glitch", 0, Rarity::Epic));
        assert!(!base.is_playable(-3));
    }

    #[test]
    fn test_try_play_checks_mana() {
        let base = CardBase::new("Bolt", 3, Rarity::Common);

        let played = base.try_play(&GameState::with_mana(3), || "boom".to_string());
        assert!(played.success);
        assert_eq!(played.mana_used, 3);
        assert_eq!(played.effect.as_deref(), Some("boom"));

        let rejected = base.try_play(&GameState::with_mana(2), || unreachable!());
        assert!(!rejected.success);
        assert_eq!(rejected.mana_used, 0);
    }

    #[test]
    fn test_info_builder() {
        let info = CardBase::new("Mana Ring", 3, Rarity::Uncommon)
            .info(CardKind::Artifact)
            .with_attr("durability", 5i64)
            .with_attr("effect", "Mana");

        assert_eq!(info.card_type, CardKind::Artifact);
        assert_eq!(info.get_int("durability", 0), 5);
        assert_eq!(info.get_text("effect"), Some("Mana"));
        assert_eq!(info.get_text("missing"), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Rarity::Legendary.to_string(), "Legendary");
        assert_eq!(CardKind::Creature.to_string(), "Creature");
        assert_eq!(CardKind::ALL.len(), 5);
    }
}
