//! Public scoreboard API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration or infrastructure.

pub mod command;
pub mod errors;

pub use command::Command;
pub use errors::{LedgerError, RepositoryError, Result, ScoreboardError};
