//! Elite cards: combat and magic on one card.

use serde::{Deserialize, Serialize};

use super::capabilities::{damage_after_defense, damage_against, Card, Combatable, Magical};
use super::definition::{CardBase, CardInfo, CardKind, Rarity};
use super::results::{
    AttackResult, CombatStats, DefenseResult, MagicStats, ManaChannel, PlayResult, SpellCast,
};
use crate::core::GameState;

pub const DEFAULT_ELITE_ATTACK: i64 = 5;
pub const DEFAULT_ELITE_DEFENSE: i64 = 3;
pub const DEFAULT_ELITE_MANA: i64 = 4;

/// A card that is both `Combatable` and `Magical`.
///
/// ```
/// use datadeck::cards::{EliteCard, Magical, Rarity};
///
/// let mut warrior = EliteCard::new("Arcane Warrior", 5, Rarity::Rare);
/// assert_eq!(warrior.channel_mana(3).total_mana, 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliteCard {
    base: CardBase,
    attack_power: i64,
    defense: i64,
    mana: i64,
}

impl EliteCard {
    /// Create an elite card with default stats (attack 5, defense 3, mana 4).
    #[must_use]
    pub fn new(name: impl Into<String>, cost: i64, rarity: Rarity) -> Self {
        Self {
            base: CardBase::new(name, cost, rarity),
            attack_power: DEFAULT_ELITE_ATTACK,
            defense: DEFAULT_ELITE_DEFENSE,
            mana: DEFAULT_ELITE_MANA,
        }
    }

    /// Override the combat and magic stats.
    #[must_use]
    pub fn with_stats(mut self, attack_power: i64, defense: i64, mana: i64) -> Self {
        self.attack_power = attack_power;
        self.defense = defense;
        self.mana = mana;
        self
    }

    #[must_use]
    pub fn attack_power(&self) -> i64 {
        self.attack_power
    }

    #[must_use]
    pub fn defense(&self) -> i64 {
        self.defense
    }

    #[must_use]
    pub fn mana(&self) -> i64 {
        self.mana
    }
}

impl Card for EliteCard {
    fn base(&self) -> &CardBase {
        &self.base
    }

    fn kind(&self) -> CardKind {
        CardKind::Elite
    }

    fn play(&self, state: &GameState) -> PlayResult {
        self.base.try_play(state, || {
            "Enters the battlefield with combat and magic capabilities".to_string()
        })
    }

    fn card_info(&self) -> CardInfo {
        self.base
            .info(self.kind())
            .with_attr("attack_power", self.attack_power)
            .with_attr("defense", self.defense)
            .with_attr("mana", self.mana)
    }

    fn as_combatable(&self) -> Option<&dyn Combatable> {
        Some(self)
    }

    fn as_magical(&self) -> Option<&dyn Magical> {
        Some(self)
    }

    fn as_magical_mut(&mut self) -> Option<&mut dyn Magical> {
        Some(self)
    }
}

impl Combatable for EliteCard {
    fn attack(&self, target: &dyn Card) -> AttackResult {
        AttackResult {
            attacker: self.base.name.clone(),
            target: target.name().to_string(),
            damage_dealt: damage_against(self.attack_power, target),
            combat_type: "melee".to_string(),
        }
    }

    fn defend(&self, incoming_damage: i64) -> DefenseResult {
        let damage_taken = damage_after_defense(incoming_damage, self.defense);
        DefenseResult {
            defender: self.base.name.clone(),
            damage_taken,
            damage_blocked: incoming_damage.max(0) - damage_taken,
        }
    }

    fn combat_stats(&self) -> CombatStats {
        CombatStats {
            attack: self.attack_power,
            defense: self.defense,
        }
    }
}

impl Magical for EliteCard {
    fn cast_spell(&self, spell_name: &str, targets: &[String]) -> SpellCast {
        SpellCast {
            caster: self.base.name.clone(),
            spell: spell_name.to_string(),
            targets: targets.to_vec(),
            mana_used: self.mana,
        }
    }

    fn channel_mana(&mut self, amount: i64) -> ManaChannel {
        let channeled = if amount < 0 {
            log::warn!("Ignoring negative mana channel ({amount}) on '{}'", self.base.name);
            0
        } else {
            amount
        };
        self.mana += channeled;
        ManaChannel {
            channeled,
            total_mana: self.mana,
        }
    }

    fn magic_stats(&self) -> MagicStats {
        MagicStats { mana: self.mana }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{SpellCard, TournamentCard};

    fn arcane_warrior() -> EliteCard {
        EliteCard::new("Arcane Warrior", 5, Rarity::Rare).with_stats(5, 3, 4)
    }

    #[test]
    fn test_defaults() {
        let card = EliteCard::new("Arcane Warrior", 5, Rarity::Rare);
        assert_eq!(card.combat_stats(), CombatStats { attack: 5, defense: 3 });
        assert_eq!(card.magic_stats(), MagicStats { mana: 4 });
    }

    #[test]
    fn test_play_checks_mana() {
        let card = arcane_warrior();
        assert!(card.play(&GameState::with_mana(5)).success);
        assert!(!card.play(&GameState::with_mana(4)).success);
    }

    #[test]
    fn test_attack_non_combatant() {
        let card = arcane_warrior();
        let target = SpellCard::new("Decoy", 0, Rarity::Common, "none");

        let result = card.attack(&target);
        assert_eq!(result.damage_dealt, 5);
        assert_eq!(result.target, "Decoy");
        assert_eq!(result.combat_type, "melee");
    }

    #[test]
    fn test_attack_reduced_by_defense() {
        let card = arcane_warrior();
        let target = TournamentCard::new("Ice Wizard", 4, Rarity::Epic, 70, 2);
        assert_eq!(card.attack(&target).damage_dealt, 3);
    }

    #[test]
    fn test_defend() {
        let card = arcane_warrior();

        let hit = card.defend(5);
        assert_eq!(hit.damage_taken, 2);
        assert_eq!(hit.damage_blocked, 3);

        let graze = card.defend(2);
        assert_eq!(graze.damage_taken, 0);
        assert_eq!(graze.damage_blocked, 2);
    }

    #[test]
    fn test_cast_spell() {
        let card = arcane_warrior();
        let targets = vec!["Enemy1".to_string(), "Enemy2".to_string()];

        let cast = card.cast_spell("Fireball", &targets);
        assert_eq!(cast.spell, "Fireball");
        assert_eq!(cast.targets, targets);
        assert_eq!(cast.mana_used, 4);
    }

    #[test]
    fn test_channel_mana_only_increases() {
        let mut card = arcane_warrior();

        assert_eq!(card.channel_mana(3), ManaChannel { channeled: 3, total_mana: 7 });
        assert_eq!(card.channel_mana(-10), ManaChannel { channeled: 0, total_mana: 7 });
        assert_eq!(card.mana(), 7);
    }

    #[test]
    fn test_capability_queries() {
        let mut card = arcane_warrior();
        assert!(card.as_combatable().is_some());
        assert!(card.as_rankable().is_none());

        if let Some(magic) = card.as_magical_mut() {
            magic.channel_mana(1);
        }
        assert_eq!(card.mana(), 5);
    }
}
