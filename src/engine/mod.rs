//! Game engine: drives a factory and a strategy through simulated turns.
//!
//! ## Lifecycle
//!
//! An engine starts unconfigured. `configure_engine` installs a factory and
//! a strategy; after that every `simulate_turn` builds a hand from the
//! factory, lets the strategy play it and folds the result into the session
//! counters. Simulating before configuring is a usage error.
//!
//! Counters belong to the engine value; two engines never share them.
//!
//! ```
//! use datadeck::engine::GameEngine;
//! use datadeck::factory::FantasyCardFactory;
//! use datadeck::strategy::AggressiveStrategy;
//!
//! let mut engine = GameEngine::new();
//! assert!(engine.simulate_turn().is_err());
//!
//! engine.configure_engine(FantasyCardFactory::new(), AggressiveStrategy::new());
//! let turn = engine.simulate_turn().unwrap();
//!
//! let status = engine.get_engine_status();
//! assert_eq!(status.turns_simulated, 1);
//! assert_eq!(status.total_damage, turn.damage_dealt);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{AnyCard, Card};
use crate::core::{EngineConfig, SlotCategory};
use crate::error::{GameError, Result};
use crate::factory::{CardFactory, CardHint};
use crate::strategy::{GameStrategy, TurnResult};

/// Snapshot of an engine's session counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStatus {
    pub turns_simulated: u64,
    /// Name of the configured strategy, `None` before configuration.
    pub strategy_used: Option<String>,
    pub total_damage: i64,
    pub cards_created: u64,
}

/// Turn simulator.
pub struct GameEngine {
    config: EngineConfig,
    factory: Option<Box<dyn CardFactory>>,
    strategy: Option<Box<dyn GameStrategy>>,
    turns_simulated: u64,
    total_damage: i64,
    cards_created: u64,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("factory", &self.factory.as_ref().map(|f| f.factory_name()))
            .field("strategy", &self.strategy.as_ref().map(|s| s.strategy_name()))
            .field("turns_simulated", &self.turns_simulated)
            .field("total_damage", &self.total_damage)
            .field("cards_created", &self.cards_created)
            .finish()
    }
}

impl GameEngine {
    /// Create an unconfigured engine with the default hand shape.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            factory: None,
            strategy: None,
            turns_simulated: 0,
            total_damage: 0,
            cards_created: 0,
        }
    }

    /// Install the factory and strategy used for every following turn.
    ///
    /// Reconfiguring swaps both; session counters are kept.
    pub fn configure_engine(
        &mut self,
        factory: impl CardFactory + 'static,
        strategy: impl GameStrategy + 'static,
    ) {
        log::info!(
            "Configuring engine: factory={}, strategy={}",
            factory.factory_name(),
            strategy.strategy_name()
        );
        self.factory = Some(Box::new(factory));
        self.strategy = Some(Box::new(strategy));
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.factory.is_some() && self.strategy.is_some()
    }

    /// Build a hand, let the strategy play it and accumulate the results.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EngineNotConfigured` if `configure_engine` has not
    /// been called.
    pub fn simulate_turn(&mut self) -> Result<TurnResult> {
        let (Some(factory), Some(strategy)) = (self.factory.as_deref(), self.strategy.as_deref())
        else {
            return Err(GameError::EngineNotConfigured);
        };

        log::info!(
            "Simulating {} turn...",
            strategy.strategy_name().replace("Strategy", "").to_lowercase()
        );

        let hand = Self::build_hand(&self.config, factory);
        log::debug!(
            "Hand: [{}]",
            hand.iter()
                .map(|c| format!("{} ({})", c.name(), c.cost()))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let result = strategy.execute_turn(&hand, &[]);

        self.cards_created += hand.len() as u64;
        self.turns_simulated += 1;
        self.total_damage += result.damage_dealt;

        Ok(result)
    }

    fn build_hand(config: &EngineConfig, factory: &dyn CardFactory) -> Vec<AnyCard> {
        config
            .hand
            .iter()
            .map(|slot| {
                let hint = slot.hint.clone().map(CardHint::Name);
                match slot.category {
                    SlotCategory::Creature => factory.create_creature(hint),
                    SlotCategory::Spell => factory.create_spell(hint),
                    SlotCategory::Artifact => factory.create_artifact(hint),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn get_engine_status(&self) -> EngineStatus {
        EngineStatus {
            turns_simulated: self.turns_simulated,
            strategy_used: self.strategy.as_ref().map(|s| s.strategy_name().to_string()),
            total_damage: self.total_damage,
            cards_created: self.cards_created,
        }
    }
}
