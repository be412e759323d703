//! Fantasy card catalog and factory.
//!
//! Each category is a closed enum. `from_hint` maps a hint to a variant
//! (falling back to the category default) and `build` makes the card, so
//! hint resolution can be tested without constructing anything.

use super::{CardFactory, CardHint, SupportedTypes};
use crate::cards::{AnyCard, ArtifactCard, CreatureCard, Rarity, SpellCard};

/// Creatures in the fantasy catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CreatureKind {
    /// Fire Dragon: cost 5, Rare, attack 5, health 5.
    Dragon,
    /// Goblin Warrior: cost 2, Common, attack 5, health 2. Default.
    Goblin,
}

impl CreatureKind {
    pub const ALL: [CreatureKind; 2] = [CreatureKind::Dragon, CreatureKind::Goblin];
    pub const DEFAULT: CreatureKind = CreatureKind::Goblin;

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            CreatureKind::Dragon => "dragon",
            CreatureKind::Goblin => "goblin",
        }
    }

    /// Resolve a hint. Unknown names and power hints give the default.
    #[must_use]
    pub fn from_hint(hint: Option<&CardHint>) -> Self {
        match hint.and_then(CardHint::catalog_key).as_deref() {
            Some("dragon" | "fire_dragon") => CreatureKind::Dragon,
            Some("goblin" | "goblin_warrior") => CreatureKind::Goblin,
            _ => Self::DEFAULT,
        }
    }

    #[must_use]
    pub fn build(self) -> CreatureCard {
        match self {
            CreatureKind::Dragon => CreatureCard::new("Fire Dragon", 5, Rarity::Rare, 5, 5),
            CreatureKind::Goblin => CreatureCard::new("Goblin Warrior", 2, Rarity::Common, 5, 2),
        }
    }
}

/// Spells in the fantasy catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpellKind {
    /// Fireball: cost 4, Uncommon, Fire.
    Fireball,
    /// Lightning Bolt: cost 3, Common, Lightning. Default.
    LightningBolt,
}

impl SpellKind {
    pub const ALL: [SpellKind; 2] = [SpellKind::Fireball, SpellKind::LightningBolt];
    pub const DEFAULT: SpellKind = SpellKind::LightningBolt;

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            SpellKind::Fireball => "fireball",
            SpellKind::LightningBolt => "lightning_bolt",
        }
    }

    #[must_use]
    pub fn from_hint(hint: Option<&CardHint>) -> Self {
        match hint.and_then(CardHint::catalog_key).as_deref() {
            Some("fireball") => SpellKind::Fireball,
            Some("lightning_bolt") => SpellKind::LightningBolt,
            _ => Self::DEFAULT,
        }
    }

    #[must_use]
    pub fn build(self) -> SpellCard {
        match self {
            SpellKind::Fireball => SpellCard::new("Fireball", 4, Rarity::Uncommon, "Fire"),
            SpellKind::LightningBolt => {
                SpellCard::new("Lightning Bolt", 3, Rarity::Common, "Lightning")
            }
        }
    }
}

/// Artifacts in the fantasy catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Mana Ring: cost 3, Uncommon, durability 5, Mana. Default.
    ManaRing,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 1] = [ArtifactKind::ManaRing];
    pub const DEFAULT: ArtifactKind = ArtifactKind::ManaRing;

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ArtifactKind::ManaRing => "mana_ring",
        }
    }

    #[must_use]
    pub fn from_hint(hint: Option<&CardHint>) -> Self {
        match hint.and_then(CardHint::catalog_key).as_deref() {
            Some("mana_ring") => ArtifactKind::ManaRing,
            _ => Self::DEFAULT,
        }
    }

    #[must_use]
    pub fn build(self) -> ArtifactCard {
        match self {
            ArtifactKind::ManaRing => {
                ArtifactCard::new("Mana Ring", 3, Rarity::Uncommon, 5, "Mana")
            }
        }
    }
}

/// Factory over the fantasy catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct FantasyCardFactory;

impl FantasyCardFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CardFactory for FantasyCardFactory {
    fn factory_name(&self) -> &str {
        "FantasyCardFactory"
    }

    fn create_creature(&self, hint: Option<CardHint>) -> AnyCard {
        CreatureKind::from_hint(hint.as_ref()).build().into()
    }

    fn create_spell(&self, hint: Option<CardHint>) -> AnyCard {
        SpellKind::from_hint(hint.as_ref()).build().into()
    }

    fn create_artifact(&self, hint: Option<CardHint>) -> AnyCard {
        ArtifactKind::from_hint(hint.as_ref()).build().into()
    }

    fn supported_types(&self) -> SupportedTypes {
        SupportedTypes {
            creatures: CreatureKind::ALL.iter().map(|k| k.key().to_string()).collect(),
            spells: SpellKind::ALL.iter().map(|k| k.key().to_string()).collect(),
            artifacts: ArtifactKind::ALL.iter().map(|k| k.key().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardKind};

    #[test]
    fn test_creature_hints() {
        let hint = CardHint::from("Dragon");
        assert_eq!(CreatureKind::from_hint(Some(&hint)), CreatureKind::Dragon);
        assert_eq!(CreatureKind::from_hint(Some(&"fire dragon".into())), CreatureKind::Dragon);
        assert_eq!(CreatureKind::from_hint(Some(&"Goblin".into())), CreatureKind::Goblin);
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(CreatureKind::from_hint(None), CreatureKind::Goblin);
        assert_eq!(CreatureKind::from_hint(Some(&"Unicorn".into())), CreatureKind::Goblin);
        assert_eq!(CreatureKind::from_hint(Some(&CardHint::Power(99))), CreatureKind::Goblin);
        assert_eq!(SpellKind::from_hint(Some(&"Meteor".into())), SpellKind::LightningBolt);
        assert_eq!(ArtifactKind::from_hint(None), ArtifactKind::ManaRing);
    }

    #[test]
    fn test_spell_hints() {
        assert_eq!(SpellKind::from_hint(Some(&"FIREBALL".into())), SpellKind::Fireball);
        assert_eq!(SpellKind::from_hint(Some(&"Lightning Bolt".into())), SpellKind::LightningBolt);
    }

    #[test]
    fn test_factory_builds_catalog_cards() {
        let factory = FantasyCardFactory::new();

        let dragon = factory.create_creature(Some("dragon".into()));
        assert_eq!(dragon.name(), "Fire Dragon");
        assert_eq!(dragon.cost(), 5);
        assert_eq!(dragon.as_creature().map(|c| (c.attack(), c.health())), Some((5, 5)));

        let goblin = factory.create_creature(None);
        assert_eq!(goblin.name(), "Goblin Warrior");
        assert_eq!(goblin.cost(), 2);

        let fireball = factory.create_spell(Some("fireball".into()));
        assert_eq!(fireball.kind(), CardKind::Spell);
        assert_eq!(fireball.cost(), 4);

        let ring = factory.create_artifact(Some("anything".into()));
        assert_eq!(ring.name(), "Mana Ring");
        assert_eq!(ring.as_artifact().map(ArtifactCard::durability), Some(5));
    }

    #[test]
    fn test_themed_deck() {
        let deck = FantasyCardFactory::new().create_themed_deck(4);
        let stats = deck.get_deck_stats();

        assert_eq!(stats.total_cards, 4);
        assert_eq!(stats.creatures, 4);
        assert!(deck.cards().all(|c| c.name() == "Goblin Warrior"));
    }

    #[test]
    fn test_supported_types() {
        let types = FantasyCardFactory::new().supported_types();
        assert_eq!(types.creatures, vec!["dragon", "goblin"]);
        assert_eq!(types.spells, vec!["fireball", "lightning_bolt"]);
        assert_eq!(types.artifacts, vec!["mana_ring"]);
    }
}
