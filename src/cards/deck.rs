//! Deck generation.

use super::card::{Card, Rank};

/// Cards in one standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// A standard 52-card deck: 13 ranks in each of 4 suits, suit-major order.
///
/// ```
/// use war_machine::cards::standard_deck;
///
/// let deck = standard_deck();
/// assert_eq!(deck.len(), 52);
/// assert!(deck.iter().all(|c| !c.is_joker()));
/// ```
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    (0..STANDARD_DECK_SIZE)
        .map(|i| {
            let value = (i % Rank::COUNT as usize) as u8 + 1;
            let suit = (i / Rank::COUNT as usize) as u8;
            Card::new(Rank::new(value), suit)
        })
        .collect()
}

/// `count` standard decks combined into one shoe.
#[must_use]
pub fn standard_decks(count: usize) -> Vec<Card> {
    (0..count).flat_map(|_| standard_deck()).collect()
}
