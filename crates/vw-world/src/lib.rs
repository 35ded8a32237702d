//! Core types for Vacuum World: the grid, its cells, and how actors visit them.
//!
//! The [`Grid`] owns every [`Cell`]. Actors never hold references to cells;
//! they hand the grid a [`Position`] and a [`CellVisitor`], and the grid
//! swaps the cell out when the visit signals a change of variant.

/// Cell variants, dirt levels, and the visit protocol.
pub mod cell;
/// Compass directions and their grid offsets.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// The grid that owns all cells.
pub mod grid;
/// Row/column coordinates.
pub mod position;

/// Re-export cell types.
pub use cell::{Cell, CellVisitor, DirtLevel, ObstacleKind};
/// Re-export the direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export the grid.
pub use grid::Grid;
/// Re-export the position type.
pub use position::Position;
