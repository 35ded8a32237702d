use serde::Serialize;
use vw_world::{DirtLevel, Direction, Position};

use crate::cleaner::InertReason;

/// What kind of simulation event occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEventKind {
    /// A new turn began.
    TurnStarted,

    // Cleaner
    /// The cleaner removed one unit of dirt.
    Cleaned {
        /// The cleaned cell.
        at: Position,
        /// Level before cleaning.
        from: DirtLevel,
        /// Level after cleaning, `None` when the cell is now clean.
        to: Option<DirtLevel>,
    },
    /// The cleaner found no accessible neighbour.
    CleanerTrapped {
        /// Where the cleaner is stuck.
        at: Position,
    },
    /// The cleaner refused to move.
    CleanerInert {
        /// Why it cannot move.
        reason: InertReason,
    },
    /// A manual move targeted an inaccessible cell.
    MoveBlocked {
        /// The requested direction.
        direction: Direction,
    },
    /// A manual move was requested while in automatic mode.
    MoveIgnored {
        /// The requested direction.
        direction: Direction,
    },
    /// The turn passed in manual mode without moving the cleaner.
    AwaitingManualMove,
    /// The battery was recharged.
    BatteryRecharged,
    /// The bag was emptied.
    BagEmptied,

    // Disruptor
    /// A disruptor entered the grid.
    DisruptorAppeared {
        /// Where it appeared.
        at: Position,
    },
    /// A disruptor turned a clean cell dirty.
    Dirtied {
        /// The affected cell.
        at: Position,
    },
    /// A disruptor made a dirty cell dirtier.
    DirtIncreased {
        /// The affected cell.
        at: Position,
        /// Level before.
        from: DirtLevel,
        /// Level after (unchanged when already at the maximum).
        to: DirtLevel,
    },
    /// A disruptor left the grid.
    DisruptorLeft {
        /// Its last position.
        at: Position,
    },

    // Control
    /// Automatic or goal-seeking mode was toggled.
    ModeChanged {
        /// Whether the cleaner now moves on its own.
        automatic: bool,
        /// Whether automatic moves head for the dirtiest cell.
        goal_seeking: bool,
    },
    /// A stop was requested.
    StopRequested,
    /// Input that is not a command.
    UnknownCommand {
        /// The input as typed, trimmed.
        input: String,
    },
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimEvent {
    /// The turn during which this event occurred.
    pub turn: u64,
    /// The specific kind of event that occurred.
    pub kind: SimEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl SimEvent {
    /// Create a new simulation event with the given turn, kind, and description.
    pub fn new(turn: u64, kind: SimEventKind, description: impl Into<String>) -> Self {
        Self {
            turn,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a simulation run.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
    max_events: usize,
    pushed: u64,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
            pushed: 0,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
        self.pushed += 1;
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all retained events.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Total number of events ever pushed, including dropped ones.
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    /// Events pushed after the log had seen `mark` events in total.
    ///
    /// Pair with [`EventLog::pushed`] to pick up what a command produced.
    /// Events already dropped by the capacity limit are not returned.
    pub fn since(&self, mark: u64) -> &[SimEvent] {
        let fresh = self.pushed.saturating_sub(mark);
        let fresh = usize::try_from(fresh).unwrap_or(usize::MAX).min(self.events.len());
        &self.events[self.events.len() - fresh..]
    }

    /// Return the number of retained events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events are retained.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirtied(turn: u64, row: i32, col: i32) -> SimEvent {
        SimEvent::new(
            turn,
            SimEventKind::Dirtied {
                at: Position::new(row, col),
            },
            "test",
        )
    }

    #[test]
    fn event_log_push_and_query() {
        let mut log = EventLog::new(0);
        log.push(dirtied(1, 2, 3));
        assert_eq!(log.len(), 1);
        assert!(!log.is_empty());
        assert_eq!(log.pushed(), 1);
        assert_eq!(
            log.events()[0].kind,
            SimEventKind::Dirtied {
                at: Position::new(2, 3)
            }
        );
    }

    #[test]
    fn event_log_max_events_trims() {
        let mut log = EventLog::new(2);
        for i in 0..5 {
            log.push(dirtied(i, 0, 0));
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.pushed(), 5);
        // Oldest events were dropped, newest remain
        assert_eq!(log.events()[0].turn, 3);
        assert_eq!(log.events()[1].turn, 4);
    }

    #[test]
    fn since_returns_events_after_mark() {
        let mut log = EventLog::new(0);
        log.push(dirtied(1, 0, 0));
        let mark = log.pushed();
        log.push(dirtied(2, 0, 0));
        log.push(dirtied(3, 0, 0));
        let fresh: Vec<u64> = log.since(mark).iter().map(|e| e.turn).collect();
        assert_eq!(fresh, vec![2, 3]);
        assert!(log.since(log.pushed()).is_empty());
    }

    #[test]
    fn since_survives_trimming() {
        let mut log = EventLog::new(2);
        let mark = log.pushed();
        for i in 0..5 {
            log.push(dirtied(i, 0, 0));
        }
        assert_eq!(log.since(mark).len(), 2);
    }

    #[test]
    fn event_log_empty_queries() {
        let log = EventLog::new(0);
        assert!(log.events().is_empty());
        assert!(log.since(0).is_empty());
        assert!(log.is_empty());
    }
}
