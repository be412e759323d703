//! Spell cards.

use serde::{Deserialize, Serialize};

use super::capabilities::Card;
use super::definition::{CardBase, CardInfo, CardKind, Rarity};
use super::instance::AnyCard;
use super::results::{EffectResolution, PlayResult};
use crate::core::GameState;

/// A one-shot spell. Its effect is derived from cost and effect type when
/// played; nothing is stored on the card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCard {
    base: CardBase,
    effect_type: String,
}

impl SpellCard {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cost: i64,
        rarity: Rarity,
        effect_type: impl Into<String>,
    ) -> Self {
        Self {
            base: CardBase::new(name, cost, rarity),
            effect_type: effect_type.into(),
        }
    }

    #[must_use]
    pub fn effect_type(&self) -> &str {
        &self.effect_type
    }

    /// Apply the spell to a set of targets. Only creatures are affected.
    pub fn resolve_effect(&self, targets: &[AnyCard]) -> EffectResolution {
        let affected_targets = targets
            .iter()
            .filter(|t| t.kind() == CardKind::Creature)
            .map(|t| t.name().to_string())
            .collect();

        EffectResolution {
            spell: self.base.name.clone(),
            affected_targets,
            status: "resolved".to_string(),
        }
    }
}

impl Card for SpellCard {
    fn base(&self) -> &CardBase {
        &self.base
    }

    fn kind(&self) -> CardKind {
        CardKind::Spell
    }

    fn play(&self, state: &GameState) -> PlayResult {
        self.base.try_play(state, || {
            format!("Deal {} {} to target", self.base.cost, self.effect_type)
        })
    }

    fn card_info(&self) -> CardInfo {
        self.base
            .info(self.kind())
            .with_attr("effect_type", self.effect_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ArtifactCard, CreatureCard};

    #[test]
    fn test_play_effect_uses_cost() {
        let bolt = SpellCard::new("Lightning Bolt", 3, Rarity::Rare, "damage");
        let result = bolt.play(&GameState::with_mana(999));

        assert!(result.success);
        assert_eq!(result.effect.as_deref(), Some("Deal 3 damage to target"));
    }

    #[test]
    fn test_play_insufficient_mana() {
        let fireball = SpellCard::new("Fireball", 4, Rarity::Uncommon, "Fire");
        assert!(!fireball.play(&GameState::with_mana(3)).success);
    }

    #[test]
    fn test_resolve_effect_only_hits_creatures() {
        let bolt = SpellCard::new("Lightning Bolt", 3, Rarity::Common, "Lightning");
        let targets: Vec<AnyCard> = vec![
            CreatureCard::new("Goblin Warrior", 2, Rarity::Common, 5, 2).into(),
            ArtifactCard::new("Mana Ring", 3, Rarity::Uncommon, 5, "Mana").into(),
            CreatureCard::new("Fire Dragon", 5, Rarity::Rare, 5, 5).into(),
        ];

        let resolution = bolt.resolve_effect(&targets);
        assert_eq!(resolution.affected_targets, vec!["Goblin Warrior", "Fire Dragon"]);
        assert_eq!(resolution.status, "resolved");
    }

    #[test]
    fn test_card_info() {
        let bolt = SpellCard::new("Lightning Bolt", 3, Rarity::Common, "Lightning");
        assert_eq!(bolt.card_info().get_text("effect_type"), Some("Lightning"));
    }
}
