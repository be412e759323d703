//! Turn strategies.
//!
//! A `GameStrategy` decides which cards to play from a hand. Strategies are
//! pure: the same hand and battlefield always give the same `TurnResult`,
//! and the caller's hand is never reordered.

mod aggressive;

pub use aggressive::{AggressiveStrategy, ENEMY_PLAYER};

use serde::{Deserialize, Serialize};

use crate::cards::AnyCard;

/// What a strategy did in one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Names of the cards played, in play order.
    pub cards_played: Vec<String>,
    pub mana_used: i64,
    /// Targets attacked, without duplicates, in first-attacked order.
    pub targets_attacked: Vec<String>,
    pub damage_dealt: i64,
}

/// Turn-decision policy.
pub trait GameStrategy {
    /// Decide and summarize one turn.
    fn execute_turn(&self, hand: &[AnyCard], battlefield: &[AnyCard]) -> TurnResult;

    /// Stable name, used as a key when reporting.
    fn strategy_name(&self) -> &str;

    /// Rank the available targets, most preferred first.
    fn prioritize_targets(&self, available_targets: &[String]) -> Vec<String>;
}
