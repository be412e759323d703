//! Error types for caller-contract violations.
//!
//! Game outcomes (not enough mana, an invalid attack target) are reported as
//! ordinary result records with `success: false`. `GameError` is reserved for
//! misuse of the API: simulating with an unconfigured engine or naming a card
//! the tournament platform has never seen.

use serde::Serialize;
use thiserror::Error;

/// Errors raised when the library is used out of contract.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
pub enum GameError {
    #[error("Engine not configured: call configure_engine before simulate_turn")]
    EngineNotConfigured,

    #[error("Card '{card_id}' is not registered on this platform")]
    CardNotFound { card_id: String },

    #[error("Card '{card_id}' cannot be matched against itself")]
    SelfMatch { card_id: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
