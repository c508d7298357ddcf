//! Character stats that bias the pre-game card swap.
//!
//! - Strength: steal high cards from weaker opponents
//! - Agility: steal Aces from slower opponents
//! - Stamina: carried but not read by any rule yet
//! - Intelligence: caps how valuable a card a stronger opponent can steal

use serde::{Deserialize, Serialize};

/// Per-player stat block. All zero by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub strength: i32,
    pub agility: i32,
    pub stamina: i32,
    pub intelligence: i32,
}

impl Stats {
    #[must_use]
    pub const fn new(strength: i32, agility: i32, stamina: i32, intelligence: i32) -> Self {
        Self { strength, agility, stamina, intelligence }
    }

    #[must_use]
    pub const fn warrior() -> Self {
        Self::new(2, 1, 0, 0)
    }

    #[must_use]
    pub const fn wizard() -> Self {
        Self::new(0, 2, 0, 3)
    }

    #[must_use]
    pub const fn thief() -> Self {
        Self::new(0, 3, 0, 1)
    }
}

/// Named stat presets for the simulation driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Preset {
    Warrior,
    Wizard,
    Thief,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Warrior, Preset::Wizard, Preset::Thief];

    #[must_use]
    pub const fn stats(self) -> Stats {
        match self {
            Preset::Warrior => Stats::warrior(),
            Preset::Wizard => Stats::wizard(),
            Preset::Thief => Stats::thief(),
        }
    }

    /// Display name a player built from this preset carries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Warrior => "Warrior",
            Preset::Wizard => "Wizard",
            Preset::Thief => "Thief",
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
