use vw_world::{Cell, CellVisitor, DirtLevel, Position};

use crate::context::SimContext;
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::movement::find_open_step;

/// The cat: wanders at random, tracking dirt everywhere, then leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disruptor {
    position: Position,
    remaining_moves: u32,
}

impl Disruptor {
    /// A disruptor at `position` that will make `moves` moves.
    pub fn new(position: Position, moves: u32) -> Self {
        Self {
            position,
            remaining_moves: moves,
        }
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves left before it leaves.
    pub fn remaining_moves(&self) -> u32 {
        self.remaining_moves
    }

    /// Move to a random accessible neighbour and dirty it.
    ///
    /// Returns false when the disruptor should be removed. A turn without
    /// any accessible neighbour still uses up a move.
    pub fn move_and_dirty(&mut self, ctx: &mut SimContext<'_>) -> bool {
        if self.remaining_moves == 0 {
            return false;
        }
        self.remaining_moves -= 1;

        let Some(to) = find_open_step(ctx.grid, self.position, ctx.rng, ctx.search) else {
            return self.remaining_moves > 0;
        };
        self.position = to;
        let mut visit = DisruptingVisit {
            events: &mut *ctx.events,
            turn: ctx.turn,
        };
        ctx.grid.visit(to, &mut visit);
        true
    }
}

struct DisruptingVisit<'a> {
    events: &'a mut EventLog,
    turn: u64,
}

impl CellVisitor for DisruptingVisit<'_> {
    fn visit_clean(&mut self, at: Position) -> bool {
        self.events.push(SimEvent::new(
            self.turn,
            SimEventKind::Dirtied { at },
            format!("The cat dirtied clean cell {at}"),
        ));
        true
    }

    fn visit_dirty(&mut self, at: Position, level: &mut DirtLevel) -> bool {
        let from = *level;
        level.increase();
        let to = *level;
        self.events.push(SimEvent::new(
            self.turn,
            SimEventKind::DirtIncreased { at, from, to },
            format!("The cat made cell {at} dirtier. Previous level: {from}, current level: {to}"),
        ));
        false
    }

    fn replacement(&self) -> Cell {
        Cell::dirty(1)
    }
}
