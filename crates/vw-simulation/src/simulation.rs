use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vw_world::{Direction, Grid};

use crate::cleaner::Cleaner;
use crate::command::Command;
use crate::config::SimConfig;
use crate::context::SimContext;
use crate::disruptor::Disruptor;
use crate::error::{SimError, SimResult};
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::stats::{Alert, Mode, SimStats, TurnReport};

/// Lifecycle of a simulation after setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Turns can be played.
    Running,
    /// The grid is clean or a stop was requested.
    Terminated,
}

/// The turn controller.
///
/// Owns the grid, the cleaner, the optional disruptor, the RNG and the
/// event log. Each call to [`Simulation::turn`] is one atomic step; the
/// controller never stops on its own, callers check [`Simulation::phase`].
pub struct Simulation {
    grid: Grid,
    cleaner: Cleaner,
    disruptor: Option<Disruptor>,
    rng: StdRng,
    events: EventLog,
    config: SimConfig,
    automatic: bool,
    goal_seeking: bool,
    turn: u64,
    stopped: bool,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("turn", &self.turn)
            .field("cleaner", &self.cleaner)
            .field("disruptor", &self.disruptor)
            .field("remaining_dirt", &self.grid.total_dirt())
            .field("events", &self.events.len())
            .finish()
    }
}

impl Simulation {
    /// Set up a random room: obstacles first, then dirt, then the cleaner on
    /// a random accessible cell.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut grid = Grid::new(config.rows, config.cols)?;
        grid.scatter_obstacles(config.obstacle_percent, &mut rng)?;
        grid.scatter_dirt(config.dirt_percent, &mut rng)?;
        let start = grid
            .random_accessible(&mut rng)
            .ok_or(SimError::NoAccessibleCell("cleaner"))?;
        let cleaner = Cleaner::new(start, config.battery_capacity, config.bag_capacity);
        Ok(Self::assemble(grid, cleaner, rng, config))
    }

    /// Start from a prepared grid and cleaner. Grid size settings in
    /// `config` are ignored; the cleaner must stand on an accessible cell.
    pub fn with_world(grid: Grid, cleaner: Cleaner, config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let at = cleaner.position();
        if !grid.is_accessible(at.row, at.col) {
            return Err(SimError::InvalidConfig(format!(
                "cleaner position {at} is not accessible"
            )));
        }
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self::assemble(grid, cleaner, rng, config))
    }

    fn assemble(grid: Grid, cleaner: Cleaner, rng: StdRng, config: SimConfig) -> Self {
        Self {
            grid,
            cleaner,
            disruptor: None,
            rng,
            events: EventLog::new(config.max_events),
            config,
            automatic: true,
            goal_seeking: false,
            turn: 0,
            stopped: false,
        }
    }

    fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events
            .push(SimEvent::new(self.turn, kind, description));
    }

    /// Play one turn: move the cleaner, then spawn or move the disruptor.
    pub fn turn(&mut self) -> TurnReport {
        self.turn += 1;
        self.emit(SimEventKind::TurnStarted, format!("Turn {}", self.turn));

        self.move_cleaner();
        self.move_disruptor();

        TurnReport {
            turn: self.turn,
            rendering: self.render(),
            stats: self.stats(),
        }
    }

    /// Play `n` turns in a row.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.turn();
        }
    }

    fn move_cleaner(&mut self) {
        if !self.cleaner.is_active() {
            return;
        }
        if !self.automatic {
            self.emit(
                SimEventKind::AwaitingManualMove,
                "Manual mode: move the cleaner with w/a/s/d.",
            );
            return;
        }
        let target = if self.goal_seeking {
            self.grid.dirtiest_cell()
        } else {
            None
        };
        let mut ctx = SimContext {
            grid: &mut self.grid,
            events: &mut self.events,
            rng: &mut self.rng,
            turn: self.turn,
            search: self.config.search,
        };
        match target {
            Some(target) => {
                self.cleaner.move_toward(&mut ctx, target);
            }
            None => {
                self.cleaner.move_random(&mut ctx);
            }
        }
    }

    fn move_disruptor(&mut self) {
        let Some(mut cat) = self.disruptor.take() else {
            self.maybe_spawn_disruptor();
            return;
        };
        let mut ctx = SimContext {
            grid: &mut self.grid,
            events: &mut self.events,
            rng: &mut self.rng,
            turn: self.turn,
            search: self.config.search,
        };
        if cat.move_and_dirty(&mut ctx) {
            self.disruptor = Some(cat);
        } else {
            let at = cat.position();
            ctx.emit(SimEventKind::DisruptorLeft { at }, "The cat has left.");
        }
    }

    fn maybe_spawn_disruptor(&mut self) {
        if self.rng.random_range(0..100) >= self.config.spawn_percent {
            return;
        }
        let Some(at) = self.grid.random_accessible(&mut self.rng) else {
            return;
        };
        self.disruptor = Some(Disruptor::new(at, self.config.disruptor_moves));
        self.emit(
            SimEventKind::DisruptorAppeared { at },
            format!("A cat has appeared at {at}!"),
        );
    }

    /// Apply one control command. Returns the report when a turn was played.
    pub fn apply(&mut self, command: Command) -> Option<TurnReport> {
        match command {
            Command::Advance => return Some(self.turn()),
            Command::ToggleAutomatic => self.toggle_automatic(),
            Command::ToggleGoalSeeking => self.toggle_goal_seeking(),
            Command::Move(direction) => {
                self.manual_move(direction);
            }
            Command::Recharge => self.recharge_battery(),
            Command::EmptyBag => self.empty_bag(),
            Command::Quit => self.stop(),
            Command::Unknown(input) => {
                let description = format!("Unrecognized command: {input}");
                self.emit(SimEventKind::UnknownCommand { input }, description);
            }
        }
        None
    }

    /// Switch between automatic and manual control.
    pub fn toggle_automatic(&mut self) {
        self.automatic = !self.automatic;
        let label = if self.automatic { "Automatic" } else { "Manual" };
        self.emit_mode_change(format!("Mode changed to: {label}"));
    }

    /// Switch automatic moves between random and goal-seeking.
    pub fn toggle_goal_seeking(&mut self) {
        self.goal_seeking = !self.goal_seeking;
        let label = if self.goal_seeking { "on" } else { "off" };
        self.emit_mode_change(format!("Goal seeking: {label}"));
    }

    fn emit_mode_change(&mut self, description: String) {
        let kind = SimEventKind::ModeChanged {
            automatic: self.automatic,
            goal_seeking: self.goal_seeking,
        };
        self.emit(kind, description);
    }

    /// Move the cleaner one cell by hand.
    ///
    /// Only cardinal directions are accepted, and only in manual mode.
    /// Returns true when the cleaner moved.
    pub fn manual_move(&mut self, direction: Direction) -> bool {
        if self.automatic {
            self.emit(
                SimEventKind::MoveIgnored { direction },
                "Switch to manual mode first (m).",
            );
            return false;
        }
        if !direction.is_cardinal() {
            self.emit(
                SimEventKind::MoveBlocked { direction },
                format!("Cannot move {direction}: manual moves go north, east, south or west."),
            );
            return false;
        }
        let mut ctx = SimContext {
            grid: &mut self.grid,
            events: &mut self.events,
            rng: &mut self.rng,
            turn: self.turn,
            search: self.config.search,
        };
        self.cleaner.step(&mut ctx, direction)
    }

    /// Charge the cleaner's battery back to capacity.
    pub fn recharge_battery(&mut self) {
        self.cleaner.recharge_battery();
        let description = format!(
            "Battery recharged to {}.",
            self.cleaner.battery_capacity()
        );
        self.emit(SimEventKind::BatteryRecharged, description);
    }

    /// Empty the cleaner's bag.
    pub fn empty_bag(&mut self) {
        self.cleaner.empty_bag();
        self.emit(SimEventKind::BagEmptied, "Bag emptied.");
    }

    /// Request the simulation to stop.
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.emit(SimEventKind::StopRequested, "Simulation stopped.");
        }
    }

    /// Whether no dirt is left.
    pub fn is_clean(&self) -> bool {
        self.grid.total_dirt() == 0
    }

    /// Running until the grid is clean or a stop is requested.
    pub fn phase(&self) -> Phase {
        if self.stopped || self.is_clean() {
            Phase::Terminated
        } else {
            Phase::Running
        }
    }

    /// Conditions worth telling the user about right now.
    pub fn alerts(&self) -> Vec<Alert> {
        let mut alerts = Vec::new();
        if self.is_clean() {
            alerts.push(Alert::AllClean);
        }
        if self.cleaner.battery() == 0 {
            alerts.push(Alert::BatteryEmpty);
        }
        if self.cleaner.bag_fill() >= self.cleaner.bag_capacity() {
            alerts.push(Alert::BagFull);
        }
        alerts
    }

    /// The grid with both actors drawn in.
    pub fn render(&self) -> String {
        self.grid.render(
            self.cleaner.position(),
            self.disruptor.as_ref().map(Disruptor::position),
        )
    }

    /// Current numbers for reporting.
    pub fn stats(&self) -> SimStats {
        SimStats {
            turn: self.turn,
            battery: self.cleaner.battery(),
            battery_capacity: self.cleaner.battery_capacity(),
            bag_fill: self.cleaner.bag_fill(),
            bag_capacity: self.cleaner.bag_capacity(),
            steps: self.cleaner.steps(),
            remaining_dirt: self.grid.total_dirt(),
            dirty_cells: self.grid.dirty_cells(),
            mode: self.mode(),
            disruptor_present: self.disruptor.is_some(),
        }
    }

    /// Current control mode.
    pub fn mode(&self) -> Mode {
        Mode::from_flags(self.automatic, self.goal_seeking)
    }

    /// Whether automatic moves head for the dirtiest cell.
    pub fn is_goal_seeking(&self) -> bool {
        self.goal_seeking
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The cleaner.
    pub fn cleaner(&self) -> &Cleaner {
        &self.cleaner
    }

    /// The disruptor, when one is on the grid.
    pub fn disruptor(&self) -> Option<&Disruptor> {
        self.disruptor.as_ref()
    }

    /// The event log.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The configuration this run was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Turns played so far.
    pub fn current_turn(&self) -> u64 {
        self.turn
    }
}
