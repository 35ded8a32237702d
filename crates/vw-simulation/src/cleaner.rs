use std::fmt;

use serde::Serialize;
use vw_world::{Cell, CellVisitor, DirtLevel, Direction, Position};

use crate::context::SimContext;
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::movement::find_open_step;

/// Why the cleaner refuses to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InertReason {
    /// The battery is drained.
    BatteryEmpty,
    /// The bag holds as much dirt as it can.
    BagFull,
}

impl fmt::Display for InertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BatteryEmpty => write!(f, "battery empty"),
            Self::BagFull => write!(f, "bag full"),
        }
    }
}

/// Result of an automatic cleaner move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The cleaner moved to the given position and cleaned there.
    Moved(Position),
    /// No accessible neighbour was found; the cleaner stayed put.
    Trapped,
    /// The cleaner could not act at all.
    Inert(InertReason),
}

/// The vacuum: wanders or seeks dirt, draining its battery and filling its bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaner {
    position: Position,
    battery: u32,
    battery_capacity: u32,
    bag_fill: u32,
    bag_capacity: u32,
    steps: u64,
}

impl Cleaner {
    /// A fully charged cleaner with an empty bag.
    pub fn new(position: Position, battery_capacity: u32, bag_capacity: u32) -> Self {
        Self {
            position,
            battery: battery_capacity,
            battery_capacity,
            bag_fill: 0,
            bag_capacity,
            steps: 0,
        }
    }

    /// Start with a partially drained battery, capped at capacity.
    pub fn with_battery(mut self, battery: u32) -> Self {
        self.battery = battery.min(self.battery_capacity);
        self
    }

    /// Start with some dirt already in the bag, capped at capacity.
    pub fn with_bag_fill(mut self, fill: u32) -> Self {
        self.bag_fill = fill.min(self.bag_capacity);
        self
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Remaining battery charge.
    pub fn battery(&self) -> u32 {
        self.battery
    }

    /// Full battery charge.
    pub fn battery_capacity(&self) -> u32 {
        self.battery_capacity
    }

    /// Units of dirt in the bag.
    pub fn bag_fill(&self) -> u32 {
        self.bag_fill
    }

    /// Units of dirt the bag holds.
    pub fn bag_capacity(&self) -> u32 {
        self.bag_capacity
    }

    /// Automatic moves made so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Why the cleaner cannot move, or `None` when it can.
    pub fn inert_reason(&self) -> Option<InertReason> {
        if self.battery == 0 {
            Some(InertReason::BatteryEmpty)
        } else if self.bag_fill >= self.bag_capacity {
            Some(InertReason::BagFull)
        } else {
            None
        }
    }

    /// Returns true when the cleaner can move.
    pub fn is_active(&self) -> bool {
        self.inert_reason().is_none()
    }

    /// Charge the battery back to capacity.
    pub fn recharge_battery(&mut self) {
        self.battery = self.battery_capacity;
    }

    /// Throw away everything in the bag.
    pub fn empty_bag(&mut self) {
        self.bag_fill = 0;
    }

    fn check_active(&self, ctx: &mut SimContext<'_>) -> Option<InertReason> {
        let reason = self.inert_reason()?;
        let message = match reason {
            InertReason::BatteryEmpty => "Battery empty! The cleaner has stopped.",
            InertReason::BagFull => "Bag full! The cleaner has stopped.",
        };
        ctx.emit(SimEventKind::CleanerInert { reason }, message);
        Some(reason)
    }

    /// Wander to a random accessible neighbour and clean it.
    pub fn move_random(&mut self, ctx: &mut SimContext<'_>) -> MoveOutcome {
        if let Some(reason) = self.check_active(ctx) {
            return MoveOutcome::Inert(reason);
        }
        match find_open_step(ctx.grid, self.position, ctx.rng, ctx.search) {
            Some(to) => {
                self.drive_to(ctx, to);
                MoveOutcome::Moved(to)
            }
            None => {
                ctx.emit(
                    SimEventKind::CleanerTrapped { at: self.position },
                    format!("The cleaner is trapped at {} and cannot move.", self.position),
                );
                MoveOutcome::Trapped
            }
        }
    }

    /// Take one greedy step toward `target`, falling back to a random move.
    ///
    /// Returns true only when the greedy step was taken. When the cleaner is
    /// already on `target` the step is taken in place, so it keeps cleaning
    /// that cell.
    pub fn move_toward(&mut self, ctx: &mut SimContext<'_>, target: Position) -> bool {
        if self.check_active(ctx).is_some() {
            return false;
        }
        let to = self.position.toward(target);
        if ctx.grid.is_accessible(to.row, to.col) {
            self.drive_to(ctx, to);
            true
        } else {
            self.move_random(ctx);
            false
        }
    }

    /// Manual one-cell move. Costs no battery and is not counted as a step.
    ///
    /// Returns false, logging the rejection, when the target is inaccessible.
    pub fn step(&mut self, ctx: &mut SimContext<'_>, direction: Direction) -> bool {
        let to = self.position.step(direction);
        if !ctx.grid.is_accessible(to.row, to.col) {
            let description = match ctx.grid.cell_at(to.row, to.col) {
                Ok(Cell::Obstacle(kind)) => {
                    format!("Cannot move {direction}: {} in the way.", kind.name())
                }
                _ => format!("Cannot move {direction}: the room ends there."),
            };
            ctx.emit(SimEventKind::MoveBlocked { direction }, description);
            return false;
        }
        self.enter(ctx, to);
        true
    }

    fn drive_to(&mut self, ctx: &mut SimContext<'_>, to: Position) {
        self.battery = self.battery.saturating_sub(1);
        self.steps += 1;
        self.enter(ctx, to);
    }

    fn enter(&mut self, ctx: &mut SimContext<'_>, to: Position) {
        self.position = to;
        let mut visit = CleaningVisit {
            cleaner: self,
            events: &mut *ctx.events,
            turn: ctx.turn,
        };
        ctx.grid.visit(to, &mut visit);
    }
}

/// The cleaner's side of a visit: picks up one unit of dirt.
struct CleaningVisit<'a> {
    cleaner: &'a mut Cleaner,
    events: &'a mut EventLog,
    turn: u64,
}

impl CellVisitor for CleaningVisit<'_> {
    fn visit_clean(&mut self, _at: Position) -> bool {
        false
    }

    fn visit_dirty(&mut self, at: Position, level: &mut DirtLevel) -> bool {
        let from = *level;
        let cleared = level.reduce();
        self.cleaner.bag_fill = (self.cleaner.bag_fill + 1).min(self.cleaner.bag_capacity);

        let to = (!cleared).then_some(*level);
        let now = to.map_or_else(|| "clean".to_string(), |l| l.to_string());
        self.events.push(SimEvent::new(
            self.turn,
            SimEventKind::Cleaned { at, from, to },
            format!("Cleaned cell {at}. Previous level: {from}, current level: {now}"),
        ));
        cleared
    }

    fn replacement(&self) -> Cell {
        Cell::Clean
    }
}
