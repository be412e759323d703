//! Deck: an ordered, mutable pile of cards.
//!
//! The front of the deck is the top: `draw_card` takes from the front and
//! `add_card` puts new cards at the back. Every card added gets a fresh
//! `EntityId`, so the same card added twice gives two independent entries
//! and `remove_card` removes exactly the one named.
//!
//! Backed by `im::Vector`, so cloning a deck (to try a line of play and
//! throw it away) is O(1).
//!
//! ```
//! use datadeck::cards::{CreatureCard, Rarity, SpellCard};
//! use datadeck::deck::Deck;
//!
//! let mut deck = Deck::with_seed(7);
//! let bolt = deck.add_card(SpellCard::new("Lightning Bolt", 3, Rarity::Rare, "damage"));
//! deck.add_card(CreatureCard::new("Fire Dragon", 7, Rarity::Legendary, 12, 50));
//!
//! assert!(deck.remove_card(bolt));
//! assert!(!deck.remove_card(bolt));
//! assert_eq!(deck.get_deck_stats().creatures, 1);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{AnyCard, Card, CardKind};
use crate::core::{EntityAllocator, EntityId, GameRng};

/// One card in a deck, with the handle it was added under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckEntry {
    pub id: EntityId,
    pub card: AnyCard,
}

/// Aggregate deck statistics.
///
/// Counts are by exact `CardKind`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckStats {
    pub total_cards: usize,
    pub creatures: usize,
    pub spells: usize,
    pub artifacts: usize,
    pub elites: usize,
    pub tournament: usize,
    /// Mean cost; 0.0 for an empty deck.
    pub avg_cost: f64,
}

impl DeckStats {
    /// Count for one kind.
    #[must_use]
    pub fn count(&self, kind: CardKind) -> usize {
        match kind {
            CardKind::Creature => self.creatures,
            CardKind::Spell => self.spells,
            CardKind::Artifact => self.artifacts,
            CardKind::Elite => self.elites,
            CardKind::Tournament => self.tournament,
        }
    }
}

/// Ordered card container.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vector<DeckEntry>,
    ids: EntityAllocator,
    rng: GameRng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Create an empty deck whose shuffles are seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create an empty deck with reproducible shuffles.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    fn with_rng(rng: GameRng) -> Self {
        Self {
            cards: Vector::new(),
            ids: EntityAllocator::new(),
            rng,
        }
    }

    /// Seed used for shuffling.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Append a card to the bottom of the deck.
    ///
    /// Returns the handle for later removal.
    pub fn add_card(&mut self, card: impl Into<AnyCard>) -> EntityId {
        let card = card.into();
        let id = self.ids.alloc();
        log::debug!("Deck: added '{}' as {}", card.name(), id);
        self.cards.push_back(DeckEntry { id, card });
        id
    }

    /// Remove the entry added under `id`.
    ///
    /// Returns `false` when no such entry is in the deck.
    pub fn remove_card(&mut self, id: EntityId) -> bool {
        match self.cards.iter().position(|entry| entry.id == id) {
            Some(index) => {
                let entry = self.cards.remove(index);
                log::debug!("Deck: removed '{}' ({})", entry.card.name(), id);
                true
            }
            None => false,
        }
    }

    /// Randomly reorder the whole deck.
    pub fn shuffle(&mut self) {
        let mut entries: Vec<DeckEntry> = self.cards.iter().cloned().collect();
        self.rng.shuffle(&mut entries);
        self.cards = entries.into_iter().collect();
    }

    /// Take the top card. `None` when the deck is empty.
    pub fn draw_card(&mut self) -> Option<AnyCard> {
        self.cards.pop_front().map(|entry| entry.card)
    }

    /// Look at the top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&AnyCard> {
        self.cards.front().map(|entry| &entry.card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over entries from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &DeckEntry> {
        self.cards.iter()
    }

    /// Iterate over cards from top to bottom.
    pub fn cards(&self) -> impl Iterator<Item = &AnyCard> {
        self.cards.iter().map(|entry| &entry.card)
    }

    #[must_use]
    pub fn get_deck_stats(&self) -> DeckStats {
        let mut stats = DeckStats {
            total_cards: self.cards.len(),
            creatures: 0,
            spells: 0,
            artifacts: 0,
            elites: 0,
            tournament: 0,
            avg_cost: 0.0,
        };

        let mut total_cost = 0i64;
        for card in self.cards() {
            total_cost += card.cost();
            match card.kind() {
                CardKind::Creature => stats.creatures += 1,
                CardKind::Spell => stats.spells += 1,
                CardKind::Artifact => stats.artifacts += 1,
                CardKind::Elite => stats.elites += 1,
                CardKind::Tournament => stats.tournament += 1,
            }
        }

        if stats.total_cards > 0 {
            stats.avg_cost = total_cost as f64 / stats.total_cards as f64;
        }
        stats
    }
}

impl FromIterator<AnyCard> for Deck {
    fn from_iter<I: IntoIterator<Item = AnyCard>>(iter: I) -> Self {
        let mut deck = Deck::new();
        for card in iter {
            deck.add_card(card);
        }
        deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ArtifactCard, CreatureCard, EliteCard, Rarity, SpellCard};

    fn starter_deck() -> Deck {
        let mut deck = Deck::with_seed(42);
        deck.add_card(SpellCard::new("Lightning Bolt", 3, Rarity::Rare, "damage"));
        deck.add_card(ArtifactCard::new("Mana Crystal", 2, Rarity::Rare, 1, "mana"));
        deck.add_card(CreatureCard::new("Fire Dragon", 7, Rarity::Legendary, 12, 50));
        deck
    }

    #[test]
    fn test_draw_is_fifo() {
        let mut deck = starter_deck();

        let names: Vec<_> = std::iter::from_fn(|| deck.draw_card())
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["Lightning Bolt", "Mana Crystal", "Fire Dragon"]);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_draw_empty() {
        let mut deck = Deck::with_seed(1);
        assert!(deck.draw_card().is_none());
        assert!(deck.draw_card().is_none());
        assert_eq!(deck.len(), 0);
    }

    #[test]
    fn test_stats() {
        let stats = starter_deck().get_deck_stats();
        assert_eq!(stats.total_cards, 3);
        assert_eq!(stats.creatures, 1);
        assert_eq!(stats.spells, 1);
        assert_eq!(stats.artifacts, 1);
        assert_eq!(stats.count(CardKind::Elite), 0);
        assert!((stats.avg_cost - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_empty() {
        let stats = Deck::with_seed(1).get_deck_stats();
        assert_eq!(stats.total_cards, 0);
        assert_eq!(stats.avg_cost, 0.0);
    }

    #[test]
    fn test_stats_exact_kind() {
        let mut deck = Deck::with_seed(1);
        deck.add_card(EliteCard::new("Arcane Warrior", 5, Rarity::Rare));
        let stats = deck.get_deck_stats();
        // Elites are combat-capable but not creatures
        assert_eq!(stats.creatures, 0);
        assert_eq!(stats.elites, 1);
    }

    #[test]
    fn test_remove_by_handle() {
        let mut deck = Deck::with_seed(1);
        let goblin = CreatureCard::new("Goblin Warrior", 2, Rarity::Common, 5, 2);

        let first = deck.add_card(goblin.clone());
        let second = deck.add_card(goblin);
        assert_ne!(first, second);

        assert!(deck.remove_card(second));
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.iter().next().map(|e| e.id), Some(first));

        assert!(!deck.remove_card(second));
        assert!(!deck.remove_card(EntityId::new(99)));
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut deck = Deck::with_seed(3);
        for cost in 0..20 {
            deck.add_card(CreatureCard::new(format!("Minion {cost}"), cost, Rarity::Common, 1, 1));
        }
        let before: Vec<_> = deck.iter().map(|e| e.id).collect();

        deck.shuffle();

        let mut after: Vec<_> = deck.iter().map(|e| e.id).collect();
        assert_ne!(before, after);
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut a = starter_deck();
        let mut b = starter_deck();
        a.shuffle();
        b.shuffle();

        let order_a: Vec<_> = a.cards().map(|c| c.name().to_string()).collect();
        let order_b: Vec<_> = b.cards().map(|c| c.name().to_string()).collect();
        assert_eq!(order_a, order_b);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut deck = starter_deck();
        let snapshot = deck.clone();

        deck.draw_card();
        assert_eq!(deck.len(), 2);
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.peek().map(|c| c.name()), Some("Lightning Bolt"));
    }

    #[test]
    fn test_from_iterator() {
        let cards = vec![
            AnyCard::from(CreatureCard::new("Goblin Warrior", 2, Rarity::Common, 5, 2)),
            AnyCard::from(SpellCard::new("Fireball", 4, Rarity::Uncommon, "Fire")),
        ];
        let deck: Deck = cards.into_iter().collect();
        assert_eq!(deck.len(), 2);
    }
}
