//! Rule configuration.
//!
//! Every rule toggle lives in a [`RuleConfig`] value handed to the engine at
//! construction, so games with different rule sets can run side by side.

use serde::{Deserialize, Serialize};

/// Default hard cap on rounds per game.
pub const DEFAULT_MAX_ROUNDS: usize = 10_000;

/// Rule toggles for one game of war.
///
/// Missing fields take their defaults when deserialized, so a rules file only
/// needs to name the toggles it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// An Ace beats a King (and only a King) outside the general order.
    pub aces_beat_kings: bool,

    /// An Ace beats every non-Ace. Checked before `aces_beat_kings`.
    pub ace_beats_all: bool,

    /// Shuffle a won pile before it goes to the bottom of the winner's deck.
    pub shuffle_winners_pile: bool,

    /// During a war, a player down to one card plays it face up instead of
    /// losing the comparison to a placeholder.
    pub last_card_played_face_up: bool,

    /// Run the stat-driven swap phase after the deal.
    pub do_swap: bool,

    /// Hard cap on rounds before the game is called with several survivors.
    pub max_rounds: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            aces_beat_kings: true,
            ace_beats_all: false,
            shuffle_winners_pile: true,
            last_card_played_face_up: true,
            do_swap: true,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl RuleConfig {
    /// Create the default rule set.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_aces_beat_kings(mut self, enabled: bool) -> Self {
        self.aces_beat_kings = enabled;
        self
    }

    #[must_use]
    pub fn with_ace_beats_all(mut self, enabled: bool) -> Self {
        self.ace_beats_all = enabled;
        self
    }

    #[must_use]
    pub fn with_shuffle_winners_pile(mut self, enabled: bool) -> Self {
        self.shuffle_winners_pile = enabled;
        self
    }

    #[must_use]
    pub fn with_last_card_played_face_up(mut self, enabled: bool) -> Self {
        self.last_card_played_face_up = enabled;
        self
    }

    #[must_use]
    pub fn with_swap(mut self, enabled: bool) -> Self {
        self.do_swap = enabled;
        self
    }

    /// Set the round cap.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
