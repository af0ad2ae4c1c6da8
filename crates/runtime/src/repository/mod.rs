//! Repository layer for the persisted ledger record.
//!
//! Repositories only move record text in and out of durable storage. The
//! [`crate::gateway::PersistenceGateway`] decides when to call them and how
//! failures are reported.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result, validate_key};
pub use file::FileLedgerRepository;
pub use memory::InMemoryLedgerRepo;
pub use traits::LedgerRepository;
