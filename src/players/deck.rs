//! A player's draw pile and the card-selection policies used by the swap.

use std::collections::VecDeque;

use crate::cards::{Card, Rank};

use super::stats::Stats;

/// Name given to players built without one.
pub const UNKNOWN_PLAYER: &str = "unknown";

/// An ordered FIFO of cards bound to a stat block and a display name.
///
/// The front of the queue is the next card played; won piles go to the back.
/// A deck never holds joker placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerDeck {
    cards: VecDeque<Card>,
    stats: Stats,
    name: String,
}

impl PlayerDeck {
    /// Create an empty deck.
    pub fn new(name: impl Into<String>, stats: Stats) -> Self {
        Self {
            cards: VecDeque::new(),
            stats,
            name: name.into(),
        }
    }

    /// An empty deck named "unknown" with base stats.
    pub fn unnamed() -> Self {
        Self::new(UNKNOWN_PLAYER, Stats::default())
    }

    /// Seed the deck with `cards`, front first.
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.add_cards(cards);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    /// Cards in play order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Remove and return the front card.
    pub fn play_card(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Append cards to the back, keeping their order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.add_card(card);
        }
    }

    pub fn add_card(&mut self, card: Card) {
        debug_assert!(!card.is_joker(), "joker placeholder entered {}'s deck", self.name);
        self.cards.push_back(card);
    }

    /// Surrender the highest card at or below `13 - intelligence_gap`.
    ///
    /// Ranks are scanned from the cap down to Ace; the first card of the first
    /// rank found is removed. A gap of 13 or more protects every card.
    pub fn give_best_card(&mut self, intelligence_gap: i32) -> Option<Card> {
        let cap = i32::from(Rank::KING.value())
            .saturating_sub(intelligence_gap)
            .min(i32::from(Rank::KING.value()));
        if cap < 1 {
            return None;
        }

        (1..=cap as u8)
            .rev()
            .find_map(|value| self.take_rank(Rank::new(value)))
    }

    /// Surrender the lowest card from Two up to King.
    ///
    /// Aces are never given up here, even when they are the only cards left.
    pub fn give_worst_card(&mut self) -> Option<Card> {
        (Rank::TWO.value()..=Rank::KING.value()).find_map(|value| self.take_rank(Rank::new(value)))
    }

    /// Surrender one Ace, if any.
    pub fn give_ace(&mut self) -> Option<Card> {
        self.take_rank(Rank::ACE)
    }

    /// Remove the first card of `rank` in play order.
    fn take_rank(&mut self, rank: Rank) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.rank == rank)?;
        self.cards.remove(index)
    }
}
