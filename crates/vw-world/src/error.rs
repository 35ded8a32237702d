/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when building or querying a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// The coordinates lie outside the grid.
    #[error("position [{row},{col}] is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// The requested row.
        row: i32,
        /// The requested column.
        col: i32,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },

    /// A grid needs at least one row and one column.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions {
        /// The requested number of rows.
        rows: usize,
        /// The requested number of columns.
        cols: usize,
    },

    /// A percentage outside 0..=100 was supplied.
    #[error("percentage must be between 0 and 100, got {0}")]
    InvalidPercent(u32),

    /// A dirt level outside 1..=4 was supplied.
    #[error("dirt level must be between 1 and 4, got {0}")]
    InvalidDirtLevel(u8),
}
