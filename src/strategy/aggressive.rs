//! Aggressive strategy: creatures first, cheapest first, everything at the
//! enemy player.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::{GameStrategy, TurnResult};
use crate::cards::{AnyCard, Card, CardKind};
use crate::core::StrategyConfig;

/// The only target the aggressive strategy ever picks.
pub const ENEMY_PLAYER: &str = "Enemy Player";

/// Spend the turn's mana on as much damage as possible.
///
/// The hand is ordered creatures first, then everything else, ties broken by
/// ascending cost; cards are then played greedily while mana lasts. A
/// creature deals its attack as damage, a spell deals its cost.
///
/// ```
/// use datadeck::cards::{AnyCard, CreatureCard, Rarity, SpellCard};
/// use datadeck::strategy::{AggressiveStrategy, GameStrategy};
///
/// let hand: Vec<AnyCard> = vec![
///     SpellCard::new("Lightning Bolt", 3, Rarity::Common, "Lightning").into(),
///     CreatureCard::new("Goblin Warrior", 2, Rarity::Common, 5, 2).into(),
/// ];
///
/// let result = AggressiveStrategy::new().execute_turn(&hand, &[]);
/// assert_eq!(result.cards_played, vec!["Goblin Warrior", "Lightning Bolt"]);
/// assert_eq!(result.damage_dealt, 8);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AggressiveStrategy {
    config: StrategyConfig,
}

impl AggressiveStrategy {
    /// Create the strategy with the default 5-mana budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: StrategyConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn mana_budget(&self) -> i64 {
        self.config.mana_budget
    }
}

impl GameStrategy for AggressiveStrategy {
    fn execute_turn(&self, hand: &[AnyCard], _battlefield: &[AnyCard]) -> TurnResult {
        let mut order: SmallVec<[&AnyCard; 8]> = hand.iter().collect();
        // Stable sort: equal keys keep hand order
        order.sort_by_key(|card| (card.kind() != CardKind::Creature, card.cost()));

        let mut result = TurnResult::default();
        let mut seen_targets = FxHashSet::default();

        for card in order {
            if card.cost() > self.config.mana_budget - result.mana_used {
                continue;
            }

            result.mana_used += card.cost();
            result.cards_played.push(card.name().to_string());

            let damage = match card {
                AnyCard::Creature(creature) => Some(creature.attack()),
                AnyCard::Spell(spell) => Some(spell.cost()),
                _ => None,
            };

            if let Some(damage) = damage {
                result.damage_dealt += damage;
                if seen_targets.insert(ENEMY_PLAYER) {
                    result.targets_attacked.push(ENEMY_PLAYER.to_string());
                }
            }
        }

        log::debug!(
            "{}: played {:?} for {} mana, {} damage",
            self.strategy_name(),
            result.cards_played,
            result.mana_used,
            result.damage_dealt
        );
        result
    }

    fn strategy_name(&self) -> &str {
        "AggressiveStrategy"
    }

    fn prioritize_targets(&self, _available_targets: &[String]) -> Vec<String> {
        vec![ENEMY_PLAYER.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ArtifactCard, CreatureCard, Rarity, SpellCard};

    fn creature(name: &str, cost: i64, attack: i64) -> AnyCard {
        CreatureCard::new(name, cost, Rarity::Common, attack, 2).into()
    }

    fn spell(name: &str, cost: i64) -> AnyCard {
        SpellCard::new(name, cost, Rarity::Common, "Lightning").into()
    }

    #[test]
    fn test_creature_and_spell_fill_budget() {
        let hand = vec![creature("Goblin Warrior", 2, 5), spell("Lightning Bolt", 3)];
        let result = AggressiveStrategy::new().execute_turn(&hand, &[]);

        assert_eq!(result.cards_played, vec!["Goblin Warrior", "Lightning Bolt"]);
        assert_eq!(result.mana_used, 5);
        assert_eq!(result.damage_dealt, 8);
        assert_eq!(result.targets_attacked, vec![ENEMY_PLAYER]);
    }

    #[test]
    fn test_creatures_before_cheaper_spells() {
        let hand = vec![spell("Spark", 1), creature("Ogre", 4, 6)];
        let result = AggressiveStrategy::new().execute_turn(&hand, &[]);

        // Ogre takes 4 of 5 mana, Spark still fits
        assert_eq!(result.cards_played, vec!["Ogre", "Spark"]);
        assert_eq!(result.damage_dealt, 7);
    }

    #[test]
    fn test_skips_unaffordable_and_continues() {
        let hand = vec![
            creature("Fire Dragon", 5, 5),
            creature("Goblin Warrior", 2, 5),
            spell("Lightning Bolt", 3),
        ];
        let result = AggressiveStrategy::new().execute_turn(&hand, &[]);

        // Goblin (2) then Bolt (3); the dragon no longer fits after the goblin
        assert_eq!(result.cards_played, vec!["Goblin Warrior", "Lightning Bolt"]);
        assert_eq!(result.mana_used, 5);
        assert_eq!(result.damage_dealt, 8);
    }

    #[test]
    fn test_other_kinds_spend_mana_without_damage() {
        let hand: Vec<AnyCard> =
            vec![ArtifactCard::new("Mana Ring", 3, Rarity::Uncommon, 5, "Mana").into()];
        let result = AggressiveStrategy::new().execute_turn(&hand, &[]);

        assert_eq!(result.cards_played, vec!["Mana Ring"]);
        assert_eq!(result.mana_used, 3);
        assert_eq!(result.damage_dealt, 0);
        assert!(result.targets_attacked.is_empty());
    }

    #[test]
    fn test_empty_hand() {
        let result = AggressiveStrategy::new().execute_turn(&[], &[]);
        assert_eq!(result, TurnResult::default());
    }

    #[test]
    fn test_hand_not_reordered() {
        let hand = vec![spell("Lightning Bolt", 3), creature("Goblin Warrior", 2, 5)];
        let before = hand.clone();

        let strategy = AggressiveStrategy::new();
        let first = strategy.execute_turn(&hand, &[]);
        let second = strategy.execute_turn(&hand, &[]);

        assert_eq!(hand, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_budget() {
        let strategy =
            AggressiveStrategy::with_config(StrategyConfig::default().with_mana_budget(10));
        let hand = vec![
            creature("Fire Dragon", 5, 5),
            creature("Goblin Warrior", 2, 5),
            spell("Bolt", 3),
        ];

        let result = strategy.execute_turn(&hand, &[]);
        assert_eq!(result.cards_played.len(), 3);
        assert_eq!(result.damage_dealt, 13);
        assert_eq!(strategy.mana_budget(), 10);
    }

    #[test]
    fn test_prioritize_targets() {
        let strategy = AggressiveStrategy::new();
        let targets = vec!["Goblin".to_string(), "Dragon".to_string()];
        assert_eq!(strategy.prioritize_targets(&targets), vec![ENEMY_PLAYER]);
        assert_eq!(strategy.strategy_name(), "AggressiveStrategy");
    }
}
