//! # war-machine
//!
//! A multiplayer War card game engine where character stats bias the deal.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Any number of seats from 1 to 255. Swap pairing,
//!    ranking and war resolution never assume two players.
//!
//! 2. **Configuration Over Globals**: Every rule toggle lives in a
//!    `RuleConfig` passed to the engine, so rule sets can coexist.
//!
//! 3. **Injectable Randomness**: The engine shuffles only through the
//!    `Shuffle` trait. `GameRng` is seeded ChaCha8; `Unshuffled` makes deals
//!    fully scripted.
//!
//! ## Game Flow
//!
//! - Shuffle and deal round-robin
//! - Swap phase: strength steals high cards, agility steals Aces,
//!   intelligence limits what can be stolen
//! - Rounds until one player holds every card or the round cap hits
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG and the shuffle seam, rule configuration
//! - `cards`: Ranks, cards, the ranking rule, deck generation
//! - `players`: Stats, presets and player decks with selection policies
//! - `rules`: Ranking a round's played cards, game results
//! - `games`: The war engine (deal, swap, round state machine)
//! - `simulation`: Batch driver and round transcripts

pub mod core;
pub mod cards;
pub mod players;
pub mod rules;
pub mod games;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{GameRng, PlayerId, RuleConfig, Shuffle, Unshuffled};

pub use crate::cards::{standard_deck, standard_decks, Card, Rank};

pub use crate::players::{PlayerDeck, Preset, Stats};

pub use crate::rules::{determine_winner, rank_cards, GameResult, Showdown};

pub use crate::games::war::{
    GameOutcome, RoundMarker, RoundObserver, RoundPhase, RoundReport, WarMachine,
};

pub use crate::simulation::{RoundLog, SeatConfig, Simulation, SimulationConfig, Tally};
