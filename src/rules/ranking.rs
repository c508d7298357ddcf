//! Ranking the cards played in one round.
//!
//! Cards are ordered strongest-first with a stable insertion sort driven by
//! [`Card::compare`]. The winning value is the value of the card that sorts
//! first; a round has a unique winner only if no other played card shares
//! that value.
//!
//! With three or more players the Ace/King exception makes the pairwise
//! relation cyclic (K > Q > A > K), so which of those cards sorts first
//! depends on seat order. That outcome is kept as-is: the sort decides, not
//! a pairwise win count.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::RuleConfig;

/// Seat indices ordered strongest card first.
pub type Ranking = SmallVec<[usize; 8]>;

/// Outcome of comparing one set of simultaneously played cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Showdown {
    /// Exactly one seat holds the strongest card.
    Winner(usize),
    /// The strongest value is shared, or only placeholders were played.
    Tie,
}

/// Order seats by their played card, strongest first.
///
/// Equal cards keep seat order.
///
/// Cyclic K/Q/A sets are settled by this linear pass in seat order. That is
/// a fixed tie-break of its own: a binary-insertion or merge sort over the
/// same comparator can put a different card first.
pub fn rank_cards(cards: &[Card], rules: &RuleConfig) -> Ranking {
    let mut order: Ranking = (0..cards.len()).collect();
    for i in 1..order.len() {
        let mut j = i;
        while j > 0 && cards[order[j]].compare(&cards[order[j - 1]], rules).is_gt() {
            order.swap(j, j - 1);
            j -= 1;
        }
    }
    order
}

/// Find the seat that wins this set of played cards.
///
/// Joker placeholders take part in the ordering but never win: if the
/// strongest card is a placeholder the result is a tie.
pub fn determine_winner(cards: &[Card], rules: &RuleConfig) -> Showdown {
    let order = rank_cards(cards, rules);
    let Some(&top) = order.first() else {
        return Showdown::Tie;
    };

    let winning = cards[top];
    if winning.is_joker() {
        return Showdown::Tie;
    }

    let sharing = cards.iter().filter(|c| c.value() == winning.value()).count();
    if sharing == 1 {
        Showdown::Winner(top)
    } else {
        Showdown::Tie
    }
}
