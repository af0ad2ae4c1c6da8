//! Session runtime for the asset scoreboard.
//!
//! This crate wires the pure [`ledger_core`] model to storage and to an
//! in-process event bus. Hosts embed a [`Scoreboard`] to apply commands from
//! the control surface, and widgets subscribe to its [`EventBus`] to redraw.
//!
//! Modules are organized by responsibility:
//! - [`scoreboard`] hosts the session and its builder
//! - [`api`] exposes the command and error types downstream clients use
//! - [`events`] provides the kind-based event bus
//! - [`gateway`] and [`repository`] move the ledger record to and from storage
//! - [`config`] and [`logging`] cover environment-driven setup
pub mod api;
pub mod config;
pub mod events;
pub mod gateway;
pub mod logging;
pub mod repository;
pub mod scoreboard;

pub use ledger_core;

pub use api::{Command, Result, ScoreboardError};
pub use config::{LoggingConfig, ScoreboardConfig};
pub use events::{Event, EventBus, EventKind, SubscriptionHandle};
pub use gateway::{DEFAULT_STORAGE_KEY, PersistenceGateway};
pub use logging::{LoggingGuard, setup_logging};
pub use repository::{FileLedgerRepository, InMemoryLedgerRepo, LedgerRepository, RepositoryError};
pub use scoreboard::{Scoreboard, ScoreboardBuilder};
