//! Competitive play between tournament cards.
//!
//! ## Matches
//!
//! A match compares `attack + defense + rating / 10` for both cards. The
//! higher score wins, ties going to the first card named. Ratings then move
//! by an Elo delta (`K = 32`, scale 400) floored once and applied to both
//! sides with opposite signs, so the sum of all ratings never changes.
//!
//! ## Ids
//!
//! Registered cards are addressed by string ids like `fire_dragon_001`.

pub mod rating;
mod platform;

pub use platform::{
    LeaderboardEntry, MatchResult, PlatformStatus, TournamentPlatform, TournamentReport,
};
pub use rating::{expected_score, match_score, rating_delta};
