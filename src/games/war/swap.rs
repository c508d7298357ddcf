//! Stat-driven card swap run once after the deal.
//!
//! Every unordered pair of seats `(i, j)` with `i < j` is visited once, outer
//! index ascending then inner index ascending. Each visit runs strength theft
//! then agility theft, and later pairs see the decks earlier pairs left
//! behind.

use log::trace;

use crate::players::PlayerDeck;

/// Cards moved by one swap pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapSummary {
    /// Cards taken by stronger players (high cards surrendered by the weaker).
    pub cards_stolen: usize,
    /// Worst cards handed back by stronger players in exchange.
    pub cards_returned: usize,
    /// Aces taken by faster players.
    pub aces_stolen: usize,
}

/// Run the swap phase over `players` in seat order.
pub fn swap_cards(players: &mut [PlayerDeck]) -> SwapSummary {
    let mut summary = SwapSummary::default();

    for i in 0..players.len() {
        for j in (i + 1)..players.len() {
            let (first, second) = pair_mut(players, i, j);
            strength_theft(first, second, &mut summary);
            agility_theft(first, second, &mut summary);
        }
    }

    summary
}

/// The stronger player takes the weaker's best card (capped by how much
/// smarter the weaker player is) and hands back its own worst card, once per
/// point of strength difference.
///
/// The exchange is deterministic in the two decks, so it settles into a
/// cycle after a handful of steps. Once a pair of decks repeats, whole cycles
/// are skipped and only the leftover steps are played.
fn strength_theft(first: &mut PlayerDeck, second: &mut PlayerDeck, summary: &mut SwapSummary) {
    let diff = first.stats().strength.saturating_sub(second.stats().strength);
    if diff == 0 {
        return;
    }

    let (stronger, weaker) = if diff > 0 { (first, second) } else { (second, first) };
    let gap = weaker.stats().intelligence.saturating_sub(stronger.stats().intelligence).max(0);

    let mut remaining = diff.unsigned_abs();
    let mut seen: Vec<(PlayerDeck, PlayerDeck, SwapSummary)> = Vec::new();

    while remaining > 0 {
        if let Some(start) = seen.iter().position(|(s, w, _)| s == &*stronger && w == &*weaker) {
            let before = seen[start].2;
            let period = (seen.len() - start) as u32;
            let cycles = (remaining / period) as usize;

            summary.cards_stolen = summary
                .cards_stolen
                .saturating_add((summary.cards_stolen - before.cards_stolen).saturating_mul(cycles));
            summary.cards_returned = summary
                .cards_returned
                .saturating_add((summary.cards_returned - before.cards_returned).saturating_mul(cycles));

            remaining %= period;
            seen.clear();
            continue;
        }

        seen.push((stronger.clone(), weaker.clone(), *summary));
        exchange_once(stronger, weaker, gap, summary);
        remaining -= 1;
    }
}

fn exchange_once(stronger: &mut PlayerDeck, weaker: &mut PlayerDeck, gap: i32, summary: &mut SwapSummary) {
    let taken = weaker.give_best_card(gap);
    let returned = stronger.give_worst_card();
    trace!(
        "{} takes {:?} from {}, returns {:?}",
        stronger.name(),
        taken.map(|c| c.value()),
        weaker.name(),
        returned.map(|c| c.value())
    );

    summary.cards_stolen += usize::from(taken.is_some());
    summary.cards_returned += usize::from(returned.is_some());
    stronger.add_cards(taken);
    weaker.add_cards(returned);
}

/// The faster player takes one Ace per point of agility difference, handing
/// back its worst card for each Ace actually taken.
fn agility_theft(first: &mut PlayerDeck, second: &mut PlayerDeck, summary: &mut SwapSummary) {
    let diff = first.stats().agility.saturating_sub(second.stats().agility);
    if diff == 0 {
        return;
    }

    let (faster, slower) = if diff > 0 { (first, second) } else { (second, first) };

    for _ in 0..diff.unsigned_abs() {
        // No Ace now means no Ace on any later step either.
        let Some(ace) = slower.give_ace() else {
            break;
        };
        let returned = faster.give_worst_card();
        trace!("{} takes an Ace from {}", faster.name(), slower.name());

        summary.aces_stolen += 1;
        summary.cards_returned += usize::from(returned.is_some());
        faster.add_card(ace);
        slower.add_cards(returned);
    }
}

/// Borrow two distinct seats mutably. Requires `i < j`.
fn pair_mut(players: &mut [PlayerDeck], i: usize, j: usize) -> (&mut PlayerDeck, &mut PlayerDeck) {
    debug_assert!(i < j);
    let (head, tail) = players.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
