//! Asset ledger for the scoreboard.
//!
//! `ledger-core` owns the closed asset set, the counters, the victory-point
//! conversion and the persisted record format. It performs no I/O: storage
//! and change notification live in `scoreboard-runtime`, which drives every
//! mutation through [`AssetLedger`].
pub mod asset;
pub mod config;
pub mod conversion;
pub mod error;
pub mod ledger;
pub mod record;

pub use asset::Asset;
pub use config::LedgerConfig;
pub use conversion::{ConversionFactor, ConversionTable};
pub use error::{LedgerError, Result};
pub use ledger::{AssetLedger, AssetSnapshot, IncrementOutcome};
pub use record::{RecordReport, RestoreSource, Restored};
