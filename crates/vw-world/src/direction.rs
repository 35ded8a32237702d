use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the eight compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// One row up.
    North,
    /// Up and right.
    NorthEast,
    /// One column right.
    East,
    /// Down and right.
    SouthEast,
    /// One row down.
    South,
    /// Down and left.
    SouthWest,
    /// One column left.
    West,
    /// Up and left.
    NorthWest,
}

impl Direction {
    /// All directions in search order, indexable by `0..8`.
    pub const ALL: [Direction; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The four directions available to manual moves.
    pub const CARDINAL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Row and column offset of a single step.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Returns true for north, east, south and west.
    pub fn is_cardinal(self) -> bool {
        Self::CARDINAL.contains(&self)
    }

    /// Parse a cardinal direction from a keyboard key or a name.
    ///
    /// Accepts the `w`/`a`/`s`/`d` layout and the full names.
    pub fn parse_cardinal(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "w" | "up" | "north" => Some(Self::North),
            "a" | "left" | "west" => Some(Self::West),
            "s" | "down" | "south" => Some(Self::South),
            "d" | "right" | "east" => Some(Self::East),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::NorthEast => "northeast",
            Self::East => "east",
            Self::SouthEast => "southeast",
            Self::South => "south",
            Self::SouthWest => "southwest",
            Self::West => "west",
            Self::NorthWest => "northwest",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
