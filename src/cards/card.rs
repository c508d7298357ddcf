//! Card values and the pairwise ranking rule.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::RuleConfig;

/// Card rank. Values 1-13 are Ace through King; 0 is the joker placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// Placeholder for "no card was played". Never dealt.
    pub const JOKER: Rank = Rank(0);
    pub const ACE: Rank = Rank(1);
    pub const TWO: Rank = Rank(2);
    pub const THREE: Rank = Rank(3);
    pub const FOUR: Rank = Rank(4);
    pub const FIVE: Rank = Rank(5);
    pub const SIX: Rank = Rank(6);
    pub const SEVEN: Rank = Rank(7);
    pub const EIGHT: Rank = Rank(8);
    pub const NINE: Rank = Rank(9);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Number of ordinary ranks in a suit.
    pub const COUNT: u8 = 13;

    /// Create a rank from its numeric value.
    ///
    /// Panics if `value` is outside 0..=13.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value <= Self::COUNT, "Rank value must be 0-13");
        Self(value)
    }

    /// Numeric value (0 for the joker placeholder).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.0 == 0
    }

    /// Iterate the ordinary ranks, Ace to King.
    pub fn ordinary() -> impl DoubleEndedIterator<Item = Rank> {
        (1..=Self::COUNT).map(Rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "Joker"),
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}

/// An immutable playing card.
///
/// Suit carries no gameplay weight; it only distinguishes the four copies of
/// each rank in a standard deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: u8,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: u8) -> Self {
        Self { rank, suit }
    }

    /// The placeholder used when a player has no card to play.
    #[must_use]
    pub const fn joker() -> Self {
        Self { rank: Rank::JOKER, suit: 0 }
    }

    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }

    /// Numeric rank value, as shown in round output.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Rank this card against `other`.
    ///
    /// `Greater` means this card is stronger. Equal ranks always compare
    /// `Equal`. With `ace_beats_all` an Ace beats any non-Ace; otherwise with
    /// `aces_beat_kings` an Ace beats a King (only that pairing); everything
    /// else follows the numeric order, King high and Ace low.
    ///
    /// The Ace/King exception makes this relation non-transitive: K > Q and
    /// Q > A, but A > K.
    #[must_use]
    pub fn compare(&self, other: &Card, rules: &RuleConfig) -> Ordering {
        if self.rank == other.rank {
            return Ordering::Equal;
        }

        if rules.ace_beats_all {
            if other.rank == Rank::ACE {
                return Ordering::Less;
            }
            if self.rank == Rank::ACE {
                return Ordering::Greater;
            }
        }

        if rules.aces_beat_kings {
            if self.rank == Rank::KING && other.rank == Rank::ACE {
                return Ordering::Less;
            }
            if self.rank == Rank::ACE && other.rank == Rank::KING {
                return Ordering::Greater;
            }
        }

        self.rank.value().cmp(&other.rank.value())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rank)
    }
}
