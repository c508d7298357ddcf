//! Core engine types: players, RNG and the shuffle seam, rule configuration.

pub mod player;
pub mod rng;
pub mod config;

pub use player::PlayerId;
pub use rng::{GameRng, Shuffle, Unshuffled};
pub use config::{RuleConfig, DEFAULT_MAX_ROUNDS};
