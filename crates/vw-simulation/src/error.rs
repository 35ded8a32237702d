use vw_world::WorldError;

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while setting up a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The grid rejected an operation.
    #[error(transparent)]
    World(#[from] WorldError),

    /// Every cell is an obstacle, so there is nowhere to place an actor.
    #[error("no accessible cell to place the {0}")]
    NoAccessibleCell(&'static str),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
