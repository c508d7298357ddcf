//! Batch War simulator.
//!
//! Plays a lineup of stat presets against each other many times and reports
//! how often each survives.
//!
//! Options: --games, --seed, --decks, --players, --rules, --show-rounds, --json

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use war_machine::players::Preset;
use war_machine::simulation::{RoundLog, Simulation, SimulationConfig};
use war_machine::RuleConfig;

#[derive(Parser, Debug)]
#[command(name = "war-sim", about = "Simulate stat-biased games of War")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: usize,

    /// Base seed for the whole batch
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Standard decks shuffled together per game
    #[arg(long, default_value_t = 1)]
    decks: usize,

    /// Seats in play order
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = [Preset::Warrior, Preset::Wizard])]
    players: Vec<Preset>,

    /// JSON file with rule toggles; missing fields keep their defaults
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Log every round of every game
    #[arg(long)]
    show_rounds: bool,

    /// Print the final tally as JSON
    #[arg(long)]
    json: bool,
}

fn rules(path: Option<&PathBuf>) -> anyhow::Result<RuleConfig> {
    let Some(path) = path else {
        return Ok(RuleConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading rules file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing rules file {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    anyhow::ensure!(!args.players.is_empty(), "at least one player is required");
    anyhow::ensure!(args.players.len() <= 255, "at most 255 players are supported");
    anyhow::ensure!(args.decks > 0, "at least one deck is required");

    let config = SimulationConfig::new()
        .with_games(args.games)
        .with_seed(args.seed)
        .with_decks(args.decks)
        .with_lineup(args.players.iter().copied())
        .with_rules(rules(args.rules.as_ref())?);
    log::info!("{:<16}{:?}", "lineup", args.players);

    let simulation = Simulation::new(config);
    let tally = if args.show_rounds {
        simulation.run_observed(&mut RoundLog::echoing())
    } else {
        simulation.run()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{}", tally);
    }
    Ok(())
}
