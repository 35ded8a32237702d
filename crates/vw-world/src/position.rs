use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// A row/column coordinate.
///
/// Coordinates are signed so that stepping off the edge produces a value the
/// grid can reject instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, growing southwards.
    pub row: i32,
    /// Column index, growing eastwards.
    pub col: i32,
}

impl Position {
    /// Create a position from a row and column.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self::new(self.row + dr, self.col + dc)
    }

    /// One greedy step toward `target`: each axis moves by the sign of its delta.
    pub fn toward(self, target: Position) -> Self {
        Self::new(
            self.row + (target.row - self.row).signum(),
            self.col + (target.col - self.col).signum(),
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}
