//! Turn-based simulation for Vacuum World.
//!
//! A [`Simulation`] owns a [`vw_world::Grid`], a [`Cleaner`] and at most one
//! [`Disruptor`]. Every turn the cleaner moves (at random or toward the
//! dirtiest cell) and cleans where it lands, then a disruptor either appears
//! by chance or wanders and dirties. Everything worth telling the user is
//! recorded in the [`EventLog`].

/// The cleaning actor.
pub mod cleaner;
/// Textual control commands.
pub mod command;
/// Configuration types for simulation runs.
pub mod config;
/// Mutable context lent to actors while they move.
pub mod context;
/// The disrupting actor.
pub mod disruptor;
/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// Direction search shared by wandering actors.
pub mod movement;
/// Top-level turn controller.
pub mod simulation;
/// Per-turn statistics, reports and alerts.
pub mod stats;

/// Re-exports of [`cleaner::Cleaner`], [`cleaner::InertReason`] and [`cleaner::MoveOutcome`].
pub use cleaner::{Cleaner, InertReason, MoveOutcome};
/// Re-export of [`command::Command`].
pub use command::Command;
/// Re-exports of [`config::SimConfig`] and [`config::DirectionSearch`].
pub use config::{DirectionSearch, SimConfig};
/// Re-export of [`context::SimContext`].
pub use context::SimContext;
/// Re-export of [`disruptor::Disruptor`].
pub use disruptor::Disruptor;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::EventLog`], [`event::SimEvent`], and [`event::SimEventKind`].
pub use event::{EventLog, SimEvent, SimEventKind};
/// Re-exports of [`simulation::Simulation`] and [`simulation::Phase`].
pub use simulation::{Phase, Simulation};
/// Re-exports of the reporting types.
pub use stats::{Alert, Mode, SimStats, TurnReport};
