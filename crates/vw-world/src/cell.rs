use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WorldError;
use crate::position::Position;

/// Contamination level of a dirty cell, always within `1..=4`.
///
/// Deserialized levels are validated, not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct DirtLevel(u8);

impl DirtLevel {
    /// Lightest contamination.
    pub const MIN: DirtLevel = DirtLevel(1);
    /// Heaviest contamination.
    pub const MAX: DirtLevel = DirtLevel(4);

    /// Create a level, clamping `level` into `1..=4`.
    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// The numeric level.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Remove one unit of dirt.
    ///
    /// Returns true when the last unit was removed. The level is left at 1 in
    /// that case; the owning cell is expected to be replaced.
    pub fn reduce(&mut self) -> bool {
        if self.0 <= Self::MIN.0 {
            return true;
        }
        self.0 -= 1;
        false
    }

    /// Add one unit of dirt, saturating at the maximum.
    pub fn increase(&mut self) {
        self.0 = (self.0 + 1).min(Self::MAX.0);
    }
}

impl TryFrom<u8> for DirtLevel {
    type Error = WorldError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(WorldError::InvalidDirtLevel(level))
        }
    }
}

impl From<DirtLevel> for u8 {
    fn from(level: DirtLevel) -> Self {
        level.0
    }
}

impl fmt::Display for DirtLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What an obstacle is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleKind {
    /// Furniture.
    Sofa,
    /// A piece of wall.
    Wall,
    /// Anything else in the way.
    Generic,
}

impl ObstacleKind {
    /// Get the display name for this obstacle kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sofa => "sofa",
            Self::Wall => "wall",
            Self::Generic => "obstacle",
        }
    }
}

/// State of a single grid location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Cell {
    /// Nothing to clean.
    Clean,
    /// Dirty at the given level.
    Dirty(DirtLevel),
    /// Blocks movement; never cleaned or dirtied.
    Obstacle(ObstacleKind),
}

impl Cell {
    /// A dirty cell at `level`, clamped into `1..=4`.
    pub fn dirty(level: u8) -> Self {
        Self::Dirty(DirtLevel::new(level))
    }

    /// Returns true for obstacle cells.
    pub fn is_obstacle(&self) -> bool {
        matches!(self, Self::Obstacle(_))
    }

    /// The dirt level, or `None` for clean cells and obstacles.
    pub fn dirt_level(&self) -> Option<DirtLevel> {
        match self {
            Self::Dirty(level) => Some(*level),
            Self::Clean | Self::Obstacle(_) => None,
        }
    }

    /// The three-character glyph used when rendering the grid.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Clean => " . ",
            Self::Dirty(level) => match level.get() {
                1 => "...",
                2 => "ooo",
                3 => "OOO",
                _ => "***",
            },
            Self::Obstacle(ObstacleKind::Sofa) => "[#]",
            Self::Obstacle(ObstacleKind::Wall) => "###",
            Self::Obstacle(ObstacleKind::Generic) => "[-]",
        }
    }

    /// Dispatch a visit to the handler for this cell's variant.
    ///
    /// Returns the visitor's replace-signal: true means the caller must swap
    /// this cell for [`CellVisitor::replacement`]. A dirty cell's level may
    /// change in place even when the signal is false.
    pub fn accept<V: CellVisitor + ?Sized>(&mut self, at: Position, visitor: &mut V) -> bool {
        match self {
            Self::Clean => visitor.visit_clean(at),
            Self::Dirty(level) => visitor.visit_dirty(at, level),
            Self::Obstacle(kind) => visitor.visit_obstacle(at, *kind),
        }
    }
}

/// Something that lands on cells and reacts to what it finds there.
pub trait CellVisitor {
    /// Visit a clean cell.
    fn visit_clean(&mut self, at: Position) -> bool;

    /// Visit a dirty cell, possibly changing its level.
    fn visit_dirty(&mut self, at: Position, level: &mut DirtLevel) -> bool;

    /// Visit an obstacle. Actors are filtered by accessibility before they
    /// get here, so the default leaves the cell alone.
    fn visit_obstacle(&mut self, _at: Position, _kind: ObstacleKind) -> bool {
        false
    }

    /// The cell that replaces the visited one when a visit signals true.
    fn replacement(&self) -> Cell;
}
