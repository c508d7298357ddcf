//! Result of a finished game.

use crate::core::PlayerId;

/// How a game of war ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// One player holds every card.
    Winner(PlayerId),
    /// The round cap was hit with several players still holding cards.
    Survivors(Vec<PlayerId>),
    /// Nobody holds a card.
    Draw,
}

impl GameResult {
    /// Build a result from the seats still holding cards.
    #[must_use]
    pub fn from_survivors(mut survivors: Vec<PlayerId>) -> Self {
        match survivors.len() {
            0 => GameResult::Draw,
            1 => GameResult::Winner(survivors.remove(0)),
            _ => GameResult::Survivors(survivors),
        }
    }

    /// Check if a player finished holding cards.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Survivors(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}
