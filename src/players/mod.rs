//! Players: stat blocks and the decks they play from.

mod deck;
mod stats;

pub use deck::{PlayerDeck, UNKNOWN_PLAYER};
pub use stats::{Preset, Stats};
