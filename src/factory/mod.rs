//! Card factories.
//!
//! A `CardFactory` builds cards from a closed catalog without callers ever
//! touching concrete constructors. Creation takes an optional `CardHint`;
//! hints the catalog does not recognize resolve to the factory's default
//! card instead of failing.

mod fantasy;

pub use fantasy::{ArtifactKind, CreatureKind, FantasyCardFactory, SpellKind};

use serde::{Deserialize, Serialize};

use crate::cards::AnyCard;
use crate::deck::Deck;

/// Hint for which catalog card to build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardHint {
    /// Catalog key or card name, matched case-insensitively.
    Name(String),
    /// Desired power level.
    Power(i64),
}

impl CardHint {
    /// Normalized catalog key for a name hint: lowercase, spaces and dashes
    /// turned into underscores. `None` for power hints.
    #[must_use]
    pub fn catalog_key(&self) -> Option<String> {
        match self {
            CardHint::Name(name) => Some(
                name.trim()
                    .to_lowercase()
                    .replace([' ', '-'], "_"),
            ),
            CardHint::Power(_) => None,
        }
    }
}

impl From<&str> for CardHint {
    fn from(name: &str) -> Self {
        CardHint::Name(name.to_string())
    }
}

impl From<String> for CardHint {
    fn from(name: String) -> Self {
        CardHint::Name(name)
    }
}

impl From<i64> for CardHint {
    fn from(power: i64) -> Self {
        CardHint::Power(power)
    }
}

/// Catalog keys a factory recognizes, per category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedTypes {
    pub creatures: Vec<String>,
    pub spells: Vec<String>,
    pub artifacts: Vec<String>,
}

/// Abstract card factory.
pub trait CardFactory {
    /// Name used in reports.
    fn factory_name(&self) -> &str;

    fn create_creature(&self, hint: Option<CardHint>) -> AnyCard;

    fn create_spell(&self, hint: Option<CardHint>) -> AnyCard;

    fn create_artifact(&self, hint: Option<CardHint>) -> AnyCard;

    /// A deck of `size` default creatures.
    fn create_themed_deck(&self, size: usize) -> Deck {
        (0..size).map(|_| self.create_creature(None)).collect()
    }

    /// Catalog keys, for introspection.
    fn supported_types(&self) -> SupportedTypes;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_key_normalization() {
        assert_eq!(
            CardHint::from("Lightning Bolt").catalog_key().as_deref(),
            Some("lightning_bolt")
        );
        assert_eq!(CardHint::from("  DRAGON ").catalog_key().as_deref(), Some("dragon"));
        assert_eq!(CardHint::from("mana-ring").catalog_key().as_deref(), Some("mana_ring"));
        assert_eq!(CardHint::from(7i64).catalog_key(), None);
    }
}
