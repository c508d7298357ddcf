//! Cards and deck generation.
//!
//! - `Card`: rank and suit value object with the pairwise ranking rule
//! - `Rank`: numeric rank, including the joker placeholder
//! - `standard_deck`: the 52-card deck a game is dealt from

mod card;
mod deck;

pub use card::{Card, Rank};
pub use deck::{standard_deck, standard_decks, STANDARD_DECK_SIZE};
