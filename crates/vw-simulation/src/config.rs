use serde::{Deserialize, Serialize};
use vw_world::Grid;

use crate::error::{SimError, SimResult};

/// How an actor picks directions when wandering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionSearch {
    /// Eight independent draws; a direction may be tried twice and another never.
    #[default]
    RandomDraws,
    /// Every direction exactly once, in shuffled order.
    Shuffle,
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for deterministic simulation.
    pub seed: u64,
    /// Grid height.
    pub rows: usize,
    /// Grid width.
    pub cols: usize,
    /// Share of cells drawn for obstacles during setup.
    pub obstacle_percent: u32,
    /// Share of cells drawn for dirt during setup.
    pub dirt_percent: u32,
    /// Full battery charge of the cleaner.
    pub battery_capacity: u32,
    /// Units of dirt the cleaner's bag holds.
    pub bag_capacity: u32,
    /// Chance per turn, in percent, that a disruptor appears when none is present.
    pub spawn_percent: u32,
    /// Moves a disruptor makes before it leaves.
    pub disruptor_moves: u32,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
    /// Direction search used by both actors.
    pub search: DirectionSearch,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rows: 10,
            cols: 20,
            obstacle_percent: 5,
            dirt_percent: 30,
            battery_capacity: 100,
            bag_capacity: 50,
            spawn_percent: 10,
            disruptor_moves: 10,
            max_events: 0,
            search: DirectionSearch::RandomDraws,
        }
    }
}

impl SimConfig {
    /// Set the RNG seed for deterministic simulation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the grid dimensions.
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the obstacle share used during setup.
    pub fn with_obstacle_percent(mut self, percent: u32) -> Self {
        self.obstacle_percent = percent;
        self
    }

    /// Set the dirt share used during setup.
    pub fn with_dirt_percent(mut self, percent: u32) -> Self {
        self.dirt_percent = percent;
        self
    }

    /// Set the cleaner's battery capacity.
    pub fn with_battery_capacity(mut self, capacity: u32) -> Self {
        self.battery_capacity = capacity;
        self
    }

    /// Set the cleaner's bag capacity.
    pub fn with_bag_capacity(mut self, capacity: u32) -> Self {
        self.bag_capacity = capacity;
        self
    }

    /// Set the per-turn disruptor spawn chance in percent.
    pub fn with_spawn_percent(mut self, percent: u32) -> Self {
        self.spawn_percent = percent;
        self
    }

    /// Set how many moves a disruptor gets.
    pub fn with_disruptor_moves(mut self, moves: u32) -> Self {
        self.disruptor_moves = moves;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Set the direction search used by the actors.
    pub fn with_search(mut self, search: DirectionSearch) -> Self {
        self.search = search;
        self
    }

    /// Check that all values are in range.
    pub fn validate(&self) -> SimResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SimError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows > Grid::MAX_SIDE || self.cols > Grid::MAX_SIDE {
            return Err(SimError::InvalidConfig(format!(
                "grid sides must be at most {}, got {}x{}",
                Grid::MAX_SIDE,
                self.rows,
                self.cols
            )));
        }
        for (name, value) in [
            ("obstacle_percent", self.obstacle_percent),
            ("dirt_percent", self.dirt_percent),
            ("spawn_percent", self.spawn_percent),
        ] {
            if value > 100 {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be at most 100, got {value}"
                )));
            }
        }
        Ok(())
    }
}
