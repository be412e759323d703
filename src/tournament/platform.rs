//! Tournament platform: card registry, matches and standings.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::rating::{match_score, rating_delta};
use crate::cards::{Card, Rankable, TournamentCard};
use crate::core::TournamentConfig;
use crate::error::{GameError, Result};

/// Outcome of one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: String,
    pub loser: String,
    pub winner_score: f64,
    pub loser_score: f64,
    /// Points moved from loser to winner.
    pub rating_change: i64,
    pub winner_rating: i64,
    pub loser_rating: i64,
}

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub rating: i64,
    /// `"W-L"`.
    pub record: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformStatus {
    Active,
}

/// Platform-wide summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub total_cards: usize,
    pub matches_played: usize,
    /// Mean rating, floored. 0 when no cards are registered.
    pub avg_rating: i64,
    pub platform_status: PlatformStatus,
}

#[derive(Clone, Debug)]
struct Registration {
    id: String,
    card: TournamentCard,
}

/// Registry of tournament cards and the matches played between them.
///
/// Cards are never removed once registered. Ids are derived from the card
/// name: lowercased, spaces replaced by underscores, plus a 3-digit sequence
/// number per name.
///
/// ```
/// use datadeck::cards::{Rarity, TournamentCard};
/// use datadeck::tournament::TournamentPlatform;
///
/// let mut platform = TournamentPlatform::new();
/// let dragon = TournamentCard::new("Fire Dragon", 5, Rarity::Legendary, 80, 60);
/// let a = platform.register_card(dragon.clone());
/// let b = platform.register_card(dragon);
///
/// assert_eq!(a, "fire_dragon_001");
/// assert_eq!(b, "fire_dragon_002");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TournamentPlatform {
    config: TournamentConfig,
    /// Registration order, used to break rating ties on the leaderboard.
    cards: Vec<Registration>,
    index: FxHashMap<String, usize>,
    /// Registrations seen per id base.
    base_counts: FxHashMap<String, u32>,
    history: Vec<MatchResult>,
}

impl TournamentPlatform {
    /// Create an empty platform with standard rating rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: TournamentConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Id base for a card name: lowercase, spaces as underscores.
    #[must_use]
    pub fn id_base(name: &str) -> String {
        name.to_lowercase().replace(' ', "_")
    }

    /// Register a card and return its new id. Never fails.
    pub fn register_card(&mut self, card: TournamentCard) -> String {
        let base = Self::id_base(card.name());
        let count = self.base_counts.entry(base.clone()).or_insert(0);

        let id = loop {
            *count += 1;
            let candidate = format!("{base}_{count:03}");
            // A different name can produce the same text (e.g. "X 001")
            if !self.index.contains_key(&candidate) {
                break candidate;
            }
        };

        log::debug!("Registered '{}' as {}", card.name(), id);
        self.index.insert(id.clone(), self.cards.len());
        self.cards.push(Registration {
            id: id.clone(),
            card,
        });
        id
    }

    /// Look up a registered card.
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&TournamentCard> {
        self.index.get(id).map(|&i| &self.cards[i].card)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over `(id, card)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TournamentCard)> {
        self.cards.iter().map(|r| (r.id.as_str(), &r.card))
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GameError::CardNotFound {
                card_id: id.to_string(),
            })
    }

    /// Play a match between two registered cards.
    ///
    /// The higher score wins; a tie goes to `card1_id`. Ratings move by the
    /// Elo delta, the winner gains a win and the loser a loss.
    ///
    /// # Errors
    ///
    /// `CardNotFound` if either id is unknown and `SelfMatch` if both ids are
    /// the same. No card is modified in either case.
    pub fn create_match(&mut self, card1_id: &str, card2_id: &str) -> Result<MatchResult> {
        let first = self.position(card1_id)?;
        let second = self.position(card2_id)?;
        if first == second {
            return Err(GameError::SelfMatch {
                card_id: card1_id.to_string(),
            });
        }

        let score1 = match_score(&self.cards[first].card, &self.config);
        let score2 = match_score(&self.cards[second].card, &self.config);

        let (winner, loser, winner_score, loser_score) = if score1 >= score2 {
            (first, second, score1, score2)
        } else {
            (second, first, score2, score1)
        };

        let delta = rating_delta(
            self.cards[winner].card.rating(),
            self.cards[loser].card.rating(),
            &self.config,
        );

        let winner_card = &mut self.cards[winner].card;
        winner_card.adjust_rating(delta);
        winner_card.update_wins(1);
        let winner_rating = winner_card.rating();

        let loser_card = &mut self.cards[loser].card;
        loser_card.adjust_rating(-delta);
        loser_card.update_losses(1);
        let loser_rating = loser_card.rating();

        let result = MatchResult {
            winner: self.cards[winner].id.clone(),
            loser: self.cards[loser].id.clone(),
            winner_score,
            loser_score,
            rating_change: delta,
            winner_rating,
            loser_rating,
        };

        log::info!(
            "Match {} vs {}: {} wins ({:.1} to {:.1}), rating change {}",
            card1_id,
            card2_id,
            result.winner,
            winner_score,
            loser_score,
            delta
        );

        self.history.push(result.clone());
        Ok(result)
    }

    /// Every match played, oldest first.
    #[must_use]
    pub fn match_history(&self) -> &[MatchResult] {
        &self.history
    }

    #[must_use]
    pub fn matches_played(&self) -> usize {
        self.history.len()
    }

    /// All cards by descending rating; equal ratings keep registration order.
    #[must_use]
    pub fn get_leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut ordered: Vec<&Registration> = self.cards.iter().collect();
        ordered.sort_by(|a, b| b.card.calculate_rating().cmp(&a.card.calculate_rating()));

        ordered
            .into_iter()
            .enumerate()
            .map(|(i, r)| LeaderboardEntry {
                rank: i + 1,
                id: r.id.clone(),
                name: r.card.name().to_string(),
                rating: r.card.calculate_rating(),
                record: r.card.record(),
            })
            .collect()
    }

    #[must_use]
    pub fn generate_tournament_report(&self) -> TournamentReport {
        let avg_rating = if self.cards.is_empty() {
            0
        } else {
            let total: i64 = self.cards.iter().map(|r| r.card.calculate_rating()).sum();
            total.div_euclid(self.cards.len() as i64)
        };

        TournamentReport {
            total_cards: self.cards.len(),
            matches_played: self.history.len(),
            avg_rating,
            platform_status: PlatformStatus::Active,
        }
    }
}
