//! # datadeck
//!
//! A small card-game model: typed cards with optional capabilities, decks,
//! pluggable turn strategies, card factories, a turn-simulating engine and a
//! rated tournament platform.
//!
//! ## Design Principles
//!
//! 1. **Capabilities, not hierarchies**: every card implements `Card`;
//!    combat, magic and ranking are separate traits a card type opts into
//!    and exposes through `Card::as_*` queries.
//!
//! 2. **Closed sums**: `AnyCard` holds any concrete card by value, and the
//!    factory catalogs are enums, so every lookup is total.
//!
//! 3. **Never fail on data**: constructors clamp bad values and log a
//!    warning; preconditions are reported in result records. Only caller
//!    contract violations return `GameError`.
//!
//! ## Modules
//!
//! - `core`: Entity handles, play context, RNG, configuration
//! - `cards`: Card types, capability traits and result records
//! - `deck`: Ordered card container with statistics
//! - `strategy`: Turn strategies
//! - `factory`: Card factories over closed catalogs
//! - `engine`: Turn simulation
//! - `tournament`: Registry, matches, Elo ratings, leaderboard
//! - `error`: Crate error type

pub mod core;
pub mod cards;
pub mod deck;
pub mod strategy;
pub mod factory;
pub mod engine;
pub mod tournament;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    EntityId, GameRng, GameState,
    EngineConfig, HandSlot, SlotCategory, StrategyConfig, TournamentConfig,
};

pub use crate::cards::{
    AnyCard, Card, CardInfo, CardKind, Combatable, Magical, Rankable, Rarity,
    ArtifactCard, CreatureCard, EliteCard, SpellCard, TournamentCard,
};

pub use crate::deck::{Deck, DeckStats};

pub use crate::strategy::{AggressiveStrategy, GameStrategy, TurnResult};

pub use crate::factory::{CardFactory, CardHint, FantasyCardFactory};

pub use crate::engine::{EngineStatus, GameEngine};

pub use crate::tournament::{LeaderboardEntry, MatchResult, TournamentPlatform, TournamentReport};

pub use crate::error::{GameError, Result};
