//! Capability traits.
//!
//! `Card` is the contract every card meets (it is also the "playable"
//! contract). `Combatable`, `Magical` and `Rankable` are orthogonal: a card
//! type implements any combination and advertises it through the `as_*`
//! queries on `Card`, so callers can ask "can this fight?" without knowing the
//! concrete type.
//!
//! ```
//! use datadeck::cards::{Card, EliteCard, SpellCard, Rarity};
//!
//! let elite = EliteCard::new("Arcane Warrior", 5, Rarity::Rare);
//! let bolt = SpellCard::new("Lightning Bolt", 3, Rarity::Common, "Lightning");
//!
//! assert!(elite.as_combatable().is_some());
//! assert!(elite.as_magical().is_some());
//! assert!(bolt.as_combatable().is_none());
//! ```

use super::definition::{CardBase, CardInfo, CardKind, Rarity};
use super::results::{
    AttackResult, CombatStats, DefenseResult, MagicStats, ManaChannel, PlayResult, RankInfo,
    SpellCast,
};
use crate::core::GameState;

/// Behavior shared by all cards.
pub trait Card {
    /// Shared name/cost/rarity fields.
    fn base(&self) -> &CardBase;

    /// Concrete category, fixed at construction.
    fn kind(&self) -> CardKind;

    /// Play the card.
    ///
    /// Must check `is_playable` before applying any effect and return a
    /// result with `success == false` when the mana is insufficient.
    fn play(&self, state: &GameState) -> PlayResult;

    /// Owned snapshot of the card, including type-specific fields.
    fn card_info(&self) -> CardInfo {
        self.base().info(self.kind())
    }

    fn name(&self) -> &str {
        &self.base().name
    }

    fn cost(&self) -> i64 {
        self.base().cost
    }

    fn rarity(&self) -> Rarity {
        self.base().rarity
    }

    /// `true` iff `available_mana >= cost`.
    fn is_playable(&self, available_mana: i64) -> bool {
        self.base().is_playable(available_mana)
    }

    fn as_combatable(&self) -> Option<&dyn Combatable> {
        None
    }

    fn as_magical(&self) -> Option<&dyn Magical> {
        None
    }

    fn as_magical_mut(&mut self) -> Option<&mut dyn Magical> {
        None
    }

    fn as_rankable(&self) -> Option<&dyn Rankable> {
        None
    }

    fn as_rankable_mut(&mut self) -> Option<&mut dyn Rankable> {
        None
    }
}

/// Cards that can attack and defend.
pub trait Combatable {
    /// Attack `target` with this card's attack power.
    ///
    /// Damage is reduced by the target's defense when the target is itself
    /// combat-capable, and never goes below 0.
    fn attack(&self, target: &dyn Card) -> AttackResult;

    /// Absorb `incoming_damage`; defense is subtracted first.
    fn defend(&self, incoming_damage: i64) -> DefenseResult;

    fn combat_stats(&self) -> CombatStats;
}

/// Cards that can cast spells and store mana.
pub trait Magical {
    fn cast_spell(&self, spell_name: &str, targets: &[String]) -> SpellCast;

    /// Add mana to the pool. The pool only grows: negative amounts add nothing.
    fn channel_mana(&mut self, amount: i64) -> ManaChannel;

    fn magic_stats(&self) -> MagicStats;
}

/// Cards with a skill rating and a win/loss record.
pub trait Rankable {
    fn calculate_rating(&self) -> i64;

    /// Add to the win count. Counts only grow and saturate at `u32::MAX`.
    fn update_wins(&mut self, wins: u32);

    fn update_losses(&mut self, losses: u32);

    fn rank_info(&self) -> RankInfo;
}

/// Damage `attack_power` inflicts on `target` after its defense, if any.
#[must_use]
pub fn damage_against(attack_power: i64, target: &dyn Card) -> i64 {
    match target.as_combatable() {
        Some(defender) => (attack_power - defender.combat_stats().defense).max(0),
        None => attack_power.max(0),
    }
}

/// Damage taken from `incoming_damage` by a defender with `defense`.
#[must_use]
pub fn damage_after_defense(incoming_damage: i64, defense: i64) -> i64 {
    (incoming_damage - defense).max(0)
}
