//! Rules shared by every round: ranking played cards and reading results.
//!
//! The round state machine in `games::war` calls into these but keeps all
//! card movement to itself.

pub mod ranking;
pub mod result;

pub use ranking::{determine_winner, rank_cards, Ranking, Showdown};
pub use result::GameResult;
