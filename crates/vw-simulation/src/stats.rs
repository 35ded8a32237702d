use std::fmt;

use serde::Serialize;

/// How the cleaner is being driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Moves only on manual commands.
    Manual,
    /// Wanders at random every turn.
    AutomaticRandom,
    /// Heads for the dirtiest cell every turn.
    AutomaticGoalSeeking,
}

impl Mode {
    /// Derive the mode from the two control toggles.
    pub fn from_flags(automatic: bool, goal_seeking: bool) -> Self {
        match (automatic, goal_seeking) {
            (false, _) => Self::Manual,
            (true, false) => Self::AutomaticRandom,
            (true, true) => Self::AutomaticGoalSeeking,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => write!(f, "Manual"),
            Self::AutomaticRandom => write!(f, "Automatic (random)"),
            Self::AutomaticGoalSeeking => write!(f, "Automatic (goal-seeking)"),
        }
    }
}

/// Snapshot of the numbers reported after every turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Turns played so far.
    pub turn: u64,
    /// Remaining battery charge.
    pub battery: u32,
    /// Full battery charge.
    pub battery_capacity: u32,
    /// Units of dirt in the bag.
    pub bag_fill: u32,
    /// Units of dirt the bag holds.
    pub bag_capacity: u32,
    /// Automatic moves made by the cleaner.
    pub steps: u64,
    /// Sum of all dirt levels on the grid.
    pub remaining_dirt: u32,
    /// Number of dirty cells.
    pub dirty_cells: usize,
    /// Current control mode.
    pub mode: Mode,
    /// Whether a disruptor is on the grid.
    pub disruptor_present: bool,
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Battery: {}/{}", self.battery, self.battery_capacity)?;
        writeln!(f, "Bag: {}/{}", self.bag_fill, self.bag_capacity)?;
        writeln!(f, "Steps: {}", self.steps)?;
        writeln!(f, "Remaining dirt: {} units", self.remaining_dirt)?;
        write!(f, "Mode: {}", self.mode)
    }
}

/// Everything a caller needs to show after a turn.
#[derive(Debug, Clone)]
pub struct TurnReport {
    /// The turn that was just played.
    pub turn: u64,
    /// The grid with both actors drawn in.
    pub rendering: String,
    /// Numbers after the turn.
    pub stats: SimStats,
}

/// Conditions a caller should tell the user about after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alert {
    /// No dirt is left anywhere.
    AllClean,
    /// The cleaner's battery is drained.
    BatteryEmpty,
    /// The cleaner's bag is full.
    BagFull,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllClean => write!(f, "All the dirt has been cleaned up!"),
            Self::BatteryEmpty => write!(f, "The cleaner has run out of battery."),
            Self::BagFull => write!(f, "The cleaner's bag is full."),
        }
    }
}
