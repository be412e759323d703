//! Core types shared by every component: entity handles, the play context,
//! RNG and configuration.

pub mod entity;
pub mod rng;
pub mod config;
pub mod state;

pub use entity::{EntityAllocator, EntityId};
pub use rng::GameRng;
pub use config::{
    EngineConfig, HandSlot, SlotCategory, StrategyConfig, TournamentConfig,
    DEFAULT_K_FACTOR, DEFAULT_MANA_BUDGET, DEFAULT_RATING_SCALE, DEFAULT_SCORE_RATING_DIVISOR,
};
pub use state::GameState;
