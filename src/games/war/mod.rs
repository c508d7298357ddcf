//! Stat-biased multiplayer War.
//!
//! - Cards are shuffled and dealt round-robin, then the swap phase lets
//!   stronger and faster characters trade for better cards
//! - Each round every player turns over a card; the strongest unique card
//!   takes the pile
//! - Ties start a war: one card face down, one face up, repeated until the
//!   tie breaks or nobody has cards left
//! - The game ends when one player holds everything or the round cap hits
//!
//! Supports any number of players from 1 to 255.

mod machine;
mod round;
mod swap;

pub use machine::{GameOutcome, WarMachine};
pub use round::{PlayedCards, RoundMarker, RoundObserver, RoundPhase, RoundReport};
pub use swap::{swap_cards, SwapSummary};
