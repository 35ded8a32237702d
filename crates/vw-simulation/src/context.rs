use rand::rngs::StdRng;
use vw_world::Grid;

use crate::config::DirectionSearch;
use crate::event::{EventLog, SimEvent, SimEventKind};

/// Mutable context lent to an actor for the duration of its move.
pub struct SimContext<'a> {
    /// The world being cleaned and dirtied.
    pub grid: &'a mut Grid,
    /// Where actors report what they did.
    pub events: &'a mut EventLog,
    /// The simulation's single random source.
    pub rng: &'a mut StdRng,
    /// The current turn number.
    pub turn: u64,
    /// How wandering actors pick directions.
    pub search: DirectionSearch,
}

impl SimContext<'_> {
    /// Emit a simulation event at the current turn.
    pub fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events.push(SimEvent::new(self.turn, kind, description));
    }
}
