//! The war engine: deal, swap, and play rounds to a terminal state.

use log::{debug, warn};

use crate::cards::Card;
use crate::core::{PlayerId, RuleConfig, Shuffle};
use crate::players::PlayerDeck;
use crate::rules::GameResult;

use super::round::RoundObserver;
use super::swap::swap_cards;

/// One game of war between two or more seated players.
///
/// Construction shuffles the deck, deals it round-robin starting at seat 0,
/// then runs the swap phase if the rules enable it. Between rounds every
/// dealt card sits in exactly one player's deck.
#[derive(Clone, Debug)]
pub struct WarMachine<R: Shuffle> {
    pub(super) players: Vec<PlayerDeck>,
    pub(super) rules: RuleConfig,
    pub(super) rng: R,
    pub(super) rounds_played: usize,
}

/// Final state of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    /// Seats still holding cards, in seat order.
    pub survivors: Vec<PlayerId>,
    /// Display names of those seats.
    pub names: Vec<String>,
    /// Rounds played.
    pub rounds: usize,
    /// The round cap ended the game.
    pub capped: bool,
}

impl GameOutcome {
    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult::from_survivors(self.survivors.clone())
    }
}

impl<R: Shuffle> WarMachine<R> {
    /// Deal `cards` to `players` and run the swap phase.
    ///
    /// Panics if there are no players or more than 255.
    pub fn new(mut cards: Vec<Card>, mut players: Vec<PlayerDeck>, rules: RuleConfig, mut rng: R) -> Self {
        assert!(!players.is_empty(), "Must have at least 1 player");
        assert!(players.len() <= 255, "At most 255 players supported");

        rng.shuffle(&mut cards);
        let seats = players.len();
        for (i, card) in cards.into_iter().enumerate() {
            players[i % seats].add_card(card);
        }

        if rules.do_swap {
            let summary = swap_cards(&mut players);
            debug!(
                "swap phase: {} stolen, {} returned, {} aces",
                summary.cards_stolen, summary.cards_returned, summary.aces_stolen
            );
        }

        Self {
            players,
            rules,
            rng,
            rounds_played: 0,
        }
    }

    /// Seat `player_count` unnamed players with base stats.
    pub fn with_player_count(cards: Vec<Card>, player_count: usize, rules: RuleConfig, rng: R) -> Self {
        let players = (0..player_count).map(|_| PlayerDeck::unnamed()).collect();
        Self::new(cards, players, rules, rng)
    }

    pub fn players(&self) -> &[PlayerDeck] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &PlayerDeck {
        &self.players[id.index()]
    }

    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Cards held across all decks.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(PlayerDeck::len).sum()
    }

    /// At least two players still hold cards.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.players.iter().filter(|p| p.has_cards()).take(2).count() == 2
    }

    /// Seats still holding cards.
    pub fn survivor_ids(&self) -> Vec<PlayerId> {
        PlayerId::all(self.players.len())
            .filter(|&id| self.player(id).has_cards())
            .collect()
    }

    /// Names of players still holding cards.
    pub fn survivors(&self) -> Vec<&str> {
        self.players
            .iter()
            .filter(|p| p.has_cards())
            .map(PlayerDeck::name)
            .collect()
    }

    /// Play rounds until fewer than two players hold cards or the round cap
    /// is reached.
    pub fn play_game(&mut self) -> GameOutcome {
        self.play_game_observed(&mut ())
    }

    /// [`play_game`](Self::play_game) with every round reported to `observer`.
    pub fn play_game_observed<O: RoundObserver + ?Sized>(&mut self, observer: &mut O) -> GameOutcome {
        while self.is_playing() && self.rounds_played < self.rules.max_rounds {
            self.play_round_observed(observer);
        }
        observer.on_game_over();

        let capped = self.is_playing();
        if capped {
            warn!(
                "round cap of {} reached with {} players holding cards",
                self.rules.max_rounds,
                self.survivor_ids().len()
            );
        }

        GameOutcome {
            survivors: self.survivor_ids(),
            names: self.survivors().into_iter().map(String::from).collect(),
            rounds: self.rounds_played,
            capped,
        }
    }
}
