//! Batch runner: play many independent games and count who survives.

use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{standard_decks, Card};
use crate::core::{GameRng, RuleConfig, Shuffle};
use crate::games::war::{GameOutcome, RoundObserver, WarMachine};
use crate::players::PlayerDeck;

use super::config::SimulationConfig;

/// Play one game to its end and return the names still holding cards.
pub fn play_game<R: Shuffle>(cards: Vec<Card>, players: Vec<PlayerDeck>, rules: RuleConfig, rng: R) -> Vec<String> {
    WarMachine::new(cards, players, rules, rng).play_game().names
}

/// Survivor counts across a batch.
///
/// A game that hits the round cap credits every survivor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games recorded.
    pub games: usize,
    /// Games ended by the round cap.
    pub capped: usize,
    /// Games survived, by player name.
    pub survivals: FxHashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished game.
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        if outcome.capped {
            self.capped += 1;
        }
        for name in &outcome.names {
            *self.survivals.entry(name.clone()).or_insert(0) += 1;
        }
    }

    /// Games survived by `name`.
    #[must_use]
    pub fn survivals(&self, name: &str) -> usize {
        self.survivals.get(name).copied().unwrap_or(0)
    }

    /// Survivor counts, most first, ties broken by name.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.survivals.iter().map(|(n, &c)| (n.as_str(), c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} games", self.games)?;
        if self.capped > 0 {
            write!(f, " ({} capped)", self.capped)?;
        }
        for (name, count) in self.ranked() {
            write!(f, ", {}: {}", name, count)?;
        }
        Ok(())
    }
}

/// Runs a batch of games described by a [`SimulationConfig`].
///
/// Games share nothing: each gets a fresh deck, fresh players and its own
/// forked RNG stream.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Panics if the lineup is empty or has more than 255 seats, the same
    /// bounds [`WarMachine::new`] enforces for every game.
    pub fn new(config: SimulationConfig) -> Self {
        assert!(!config.lineup.is_empty(), "Lineup must have at least 1 seat");
        assert!(config.lineup.len() <= 255, "At most 255 seats supported");
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play every game and tally survivors.
    pub fn run(&self) -> Tally {
        self.run_observed(&mut ())
    }

    /// [`run`](Self::run) with every round of every game reported to `observer`.
    pub fn run_observed<O: RoundObserver + ?Sized>(&self, observer: &mut O) -> Tally {
        let mut base = GameRng::new(self.config.seed);
        let mut tally = Tally::new();
        let progress = (self.config.games / 10).max(1);

        for game in 0..self.config.games {
            let outcome = self.game(base.fork()).play_game_observed(observer);
            tally.record(&outcome);

            if (game + 1) % progress == 0 {
                info!("{:<16}{:>8} / {}", "games played", game + 1, self.config.games);
            }
        }

        info!("{}", tally);
        tally
    }

    /// Set up one game with a fresh deck and lineup.
    fn game(&self, rng: GameRng) -> WarMachine<GameRng> {
        let players = self
            .config
            .lineup
            .iter()
            .map(|seat| PlayerDeck::new(seat.name.clone(), seat.stats))
            .collect();
        WarMachine::new(standard_decks(self.config.decks), players, self.config.rules.clone(), rng)
    }
}
