//! Match scoring and Elo-style rating math.
//!
//! All functions are pure so the numbers can be checked without a platform.
//!
//! ```
//! use datadeck::core::TournamentConfig;
//! use datadeck::tournament::rating::rating_delta;
//!
//! // 1200 beats 1150: expected ~0.571, 32 * 0.429 = 13.7, floored to 13
//! assert_eq!(rating_delta(1200, 1150, &TournamentConfig::default()), 13);
//! ```

use crate::cards::TournamentCard;
use crate::core::TournamentConfig;

/// Strength of a card in a match: attack + defense + rating / divisor.
#[must_use]
pub fn match_score(card: &TournamentCard, config: &TournamentConfig) -> f64 {
    (card.attack_power() + card.defense_power()) as f64
        + card.rating() as f64 / config.score_rating_divisor
}

/// Probability that a player rated `rating` beats one rated `opponent`.
#[must_use]
pub fn expected_score(rating: i64, opponent: i64, rating_scale: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent - rating) as f64 / rating_scale))
}

/// Points moved from loser to winner.
///
/// `floor(K * (1 - expected_winner))`. The value is floored once and applied
/// with opposite signs to both sides, so the rating total is conserved.
#[must_use]
pub fn rating_delta(winner_rating: i64, loser_rating: i64, config: &TournamentConfig) -> i64 {
    let expected = expected_score(winner_rating, loser_rating, config.rating_scale);
    (config.k_factor * (1.0 - expected)).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rarity;
    use proptest::prelude::*;

    #[test]
    fn test_match_score() {
        let config = TournamentConfig::default();
        let dragon =
            TournamentCard::new("Fire Dragon", 5, Rarity::Legendary, 80, 60).with_rating(1200);
        let wizard = TournamentCard::new("Ice Wizard", 4, Rarity::Epic, 70, 40).with_rating(1150);

        assert!((match_score(&dragon, &config) - 260.0).abs() < 1e-9);
        assert!((match_score(&wizard, &config) - 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_keeps_fractional_rating() {
        let card = TournamentCard::new("Odd", 1, Rarity::Common, 1, 1).with_rating(1005);
        assert!((match_score(&card, &TournamentConfig::default()) - 102.5).abs() < 1e-9);
    }

    #[test]
    fn test_expected_score_even() {
        assert!((expected_score(1000, 1000, 400.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_expected_scores_sum_to_one() {
        let a = expected_score(1200, 1150, 400.0);
        let b = expected_score(1150, 1200, 400.0);
        assert!((a + b - 1.0).abs() < 1e-12);
        assert!(a > 0.5);
    }

    #[test]
    fn test_rating_delta_known_values() {
        let config = TournamentConfig::default();
        assert_eq!(rating_delta(1200, 1150, &config), 13);
        assert_eq!(rating_delta(1000, 1000, &config), 16);
        // Upset: the underdog gains more
        assert_eq!(rating_delta(1150, 1200, &config), 18);
    }

    proptest! {
        #[test]
        fn prop_delta_within_k(winner in 0i64..3000, loser in 0i64..3000) {
            let delta = rating_delta(winner, loser, &TournamentConfig::default());
            prop_assert!((0..=32).contains(&delta));
        }

        #[test]
        fn prop_upset_pays_at_least_as_much(a in 0i64..3000, b in 0i64..3000) {
            let config = TournamentConfig::default();
            let (high, low) = if a >= b { (a, b) } else { (b, a) };
            prop_assert!(rating_delta(low, high, &config) >= rating_delta(high, low, &config));
        }
    }
}
