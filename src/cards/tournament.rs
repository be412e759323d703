//! Tournament cards: combat-capable and ranked.

use serde::{Deserialize, Serialize};

use super::capabilities::{damage_after_defense, damage_against, Card, Combatable, Rankable};
use super::definition::{CardBase, CardInfo, CardKind, Rarity};
use super::results::{AttackResult, CombatStats, DefenseResult, PlayResult, RankInfo};
use crate::core::GameState;

/// Rating every tournament card starts with unless overridden.
pub const DEFAULT_RATING: i64 = 1000;

/// A card that can be registered on a `TournamentPlatform`.
///
/// Rating only changes through platform matches; wins and losses only grow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentCard {
    base: CardBase,
    attack_power: i64,
    defense_power: i64,
    rating: i64,
    wins: u32,
    losses: u32,
}

/// Everything known about a tournament card in one record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentStats {
    pub info: CardInfo,
    pub combat: CombatStats,
    pub rank: RankInfo,
}

impl TournamentCard {
    /// Create a card with the default rating (1000) and an empty record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cost: i64,
        rarity: Rarity,
        attack_power: i64,
        defense_power: i64,
    ) -> Self {
        Self {
            base: CardBase::new(name, cost, rarity),
            attack_power,
            defense_power,
            rating: DEFAULT_RATING,
            wins: 0,
            losses: 0,
        }
    }

    /// Override the starting rating.
    #[must_use]
    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = rating;
        self
    }

    #[must_use]
    pub fn attack_power(&self) -> i64 {
        self.attack_power
    }

    #[must_use]
    pub fn defense_power(&self) -> i64 {
        self.defense_power
    }

    #[must_use]
    pub fn rating(&self) -> i64 {
        self.rating
    }

    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Record as `"W-L"`.
    #[must_use]
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    /// Shift the rating by `delta`. Reserved for match settlement.
    pub(crate) fn adjust_rating(&mut self, delta: i64) {
        self.rating += delta;
    }

    #[must_use]
    pub fn tournament_stats(&self) -> TournamentStats {
        TournamentStats {
            info: self.card_info(),
            combat: self.combat_stats(),
            rank: self.rank_info(),
        }
    }
}

impl Card for TournamentCard {
    fn base(&self) -> &CardBase {
        &self.base
    }

    fn kind(&self) -> CardKind {
        CardKind::Tournament
    }

    fn play(&self, state: &GameState) -> PlayResult {
        self.base
            .try_play(state, || "Enters the tournament arena".to_string())
    }

    fn card_info(&self) -> CardInfo {
        self.base
            .info(self.kind())
            .with_attr("attack_power", self.attack_power)
            .with_attr("defense_power", self.defense_power)
            .with_attr("rating", self.rating)
            .with_attr("record", self.record())
    }

    fn as_combatable(&self) -> Option<&dyn Combatable> {
        Some(self)
    }

    fn as_rankable(&self) -> Option<&dyn Rankable> {
        Some(self)
    }

    fn as_rankable_mut(&mut self) -> Option<&mut dyn Rankable> {
        Some(self)
    }
}

impl Combatable for TournamentCard {
    fn attack(&self, target: &dyn Card) -> AttackResult {
        AttackResult {
            attacker: self.base.name.clone(),
            target: target.name().to_string(),
            damage_dealt: damage_against(self.attack_power, target),
            combat_type: "arena".to_string(),
        }
    }

    fn defend(&self, incoming_damage: i64) -> DefenseResult {
        let damage_taken = damage_after_defense(incoming_damage, self.defense_power);
        DefenseResult {
            defender: self.base.name.clone(),
            damage_taken,
            damage_blocked: incoming_damage.max(0) - damage_taken,
        }
    }

    fn combat_stats(&self) -> CombatStats {
        CombatStats {
            attack: self.attack_power,
            defense: self.defense_power,
        }
    }
}

impl Rankable for TournamentCard {
    fn calculate_rating(&self) -> i64 {
        self.rating
    }

    fn update_wins(&mut self, wins: u32) {
        self.wins = self.wins.saturating_add(wins);
    }

    fn update_losses(&mut self, losses: u32) {
        self.losses = self.losses.saturating_add(losses);
    }

    fn rank_info(&self) -> RankInfo {
        RankInfo {
            rating: self.rating,
            wins: self.wins,
            losses: self.losses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire_dragon() -> TournamentCard {
        TournamentCard::new("Fire Dragon", 5, Rarity::Legendary, 80, 60).with_rating(1200)
    }

    #[test]
    fn test_defaults() {
        let card = TournamentCard::new("Ice Wizard", 4, Rarity::Epic, 70, 40);
        assert_eq!(card.rating(), DEFAULT_RATING);
        assert_eq!(card.record(), "0-0");
    }

    #[test]
    fn test_attack_against_defender() {
        let dragon = fire_dragon();
        let wizard = TournamentCard::new("Ice Wizard", 4, Rarity::Epic, 70, 40);

        let result = dragon.attack(&wizard);
        assert_eq!(result.damage_dealt, 40);
        assert_eq!(result.target, "Ice Wizard");

        // Wizard cannot get through the dragon's defense
        assert_eq!(wizard.attack(&dragon).damage_dealt, 10);
    }

    #[test]
    fn test_defend() {
        let dragon = fire_dragon();
        let result = dragon.defend(100);
        assert_eq!(result.damage_taken, 40);
        assert_eq!(result.damage_blocked, 60);
        assert_eq!(dragon.defend(10).damage_taken, 0);
    }

    #[test]
    fn test_rankable_is_additive() {
        let mut card = fire_dragon();
        card.update_wins(2);
        card.update_losses(1);
        card.update_wins(1);

        assert_eq!(card.rank_info(), RankInfo { rating: 1200, wins: 3, losses: 1 });
        assert_eq!(card.calculate_rating(), 1200);
    }

    #[test]
    fn test_record_saturates_at_max() {
        let mut card = fire_dragon();
        card.update_wins(u32::MAX);
        card.update_wins(1);
        card.update_losses(u32::MAX);
        card.update_losses(u32::MAX);

        assert_eq!(card.wins(), u32::MAX);
        assert_eq!(card.losses(), u32::MAX);
        assert_eq!(card.record(), format!("{0}-{0}", u32::MAX));
    }

    #[test]
    fn test_tournament_stats() {
        let stats = fire_dragon().tournament_stats();
        assert_eq!(stats.info.name, "Fire Dragon");
        assert_eq!(stats.info.get_int("rating", 0), 1200);
        assert_eq!(stats.combat, CombatStats { attack: 80, defense: 60 });
        assert_eq!(stats.rank.wins, 0);
    }

    #[test]
    fn test_play_checks_mana() {
        let card = fire_dragon();
        assert!(card.play(&GameState::with_mana(5)).success);
        assert!(!card.play(&GameState::with_mana(4)).success);
    }
}
