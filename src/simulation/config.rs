//! Batch simulation configuration.

use serde::{Deserialize, Serialize};

use crate::core::RuleConfig;
use crate::players::{Preset, Stats};

/// One seat at the table: a display name and its stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub name: String,
    #[serde(default)]
    pub stats: Stats,
}

impl SeatConfig {
    pub fn new(name: impl Into<String>, stats: Stats) -> Self {
        Self { name: name.into(), stats }
    }
}

impl From<Preset> for SeatConfig {
    fn from(preset: Preset) -> Self {
        Self::new(preset.name(), preset.stats())
    }
}

/// Configuration for a batch of independent games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: usize,

    /// Base seed. Each game forks its own stream from it, so the whole batch
    /// is reproducible.
    pub seed: u64,

    /// Standard decks shuffled together for each game.
    pub decks: usize,

    /// Seats in play order.
    pub lineup: Vec<SeatConfig>,

    /// Rules every game uses.
    pub rules: RuleConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            seed: 0,
            decks: 1,
            lineup: vec![Preset::Warrior.into(), Preset::Wizard.into()],
            rules: RuleConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a new simulation config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many standard decks are combined per game.
    pub fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Replace the lineup.
    pub fn with_lineup(mut self, lineup: impl IntoIterator<Item = impl Into<SeatConfig>>) -> Self {
        self.lineup = lineup.into_iter().map(Into::into).collect();
        self
    }

    /// Set the rules.
    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lineup() {
        let config = SimulationConfig::default();
        assert_eq!(config.games, 1000);
        assert_eq!(config.lineup.len(), 2);
        assert_eq!(config.lineup[0].name, "Warrior");
        assert_eq!(config.lineup[1].stats, Stats::wizard());
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new()
            .with_games(10)
            .with_seed(7)
            .with_decks(2)
            .with_lineup([Preset::Thief, Preset::Warrior, Preset::Wizard])
            .with_rules(RuleConfig::default().with_swap(false));

        assert_eq!(config.games, 10);
        assert_eq!(config.seed, 7);
        assert_eq!(config.decks, 2);
        assert_eq!(config.lineup[0], SeatConfig::new("Thief", Stats::thief()));
        assert!(!config.rules.do_swap);
    }

    #[test]
    fn test_seat_defaults_stats() {
        let seat: SeatConfig = serde_json::from_str(r#"{ "name": "Peasant" }"#).unwrap();
        assert_eq!(seat, SeatConfig::new("Peasant", Stats::default()));
    }
}
