//! Batch simulation driver.
//!
//! Plays many independent games of war with a fixed lineup and counts which
//! player names are still holding cards at the end of each.
//!
//! ## Usage
//!
//! ```
//! use war_machine::players::Preset;
//! use war_machine::simulation::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::default()
//!     .with_games(3)
//!     .with_seed(42)
//!     .with_lineup([Preset::Warrior, Preset::Thief]);
//!
//! let tally = Simulation::new(config).run();
//! assert_eq!(tally.games, 3);
//! ```

pub mod config;
pub mod render;
pub mod runner;

pub use config::{SeatConfig, SimulationConfig};
pub use render::RoundLog;
pub use runner::{play_game, Simulation, Tally};
