//! Validation and decoding failures raised by the ledger.
//!
//! Every mutating operation validates before it writes, so an `Err` always
//! means the ledger is exactly as it was before the call.

use thiserror::Error;

use crate::asset::Asset;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The name does not belong to the fixed asset set.
    #[error("unknown asset `{name}`")]
    UnknownAsset { name: String },

    /// The value cannot be stored as an asset quantity.
    #[error("invalid value for {asset}: {reason}")]
    InvalidValue { asset: Asset, reason: String },

    /// The persisted record is not a JSON object.
    #[error("malformed ledger record: {0}")]
    Deserialization(String),
}

impl LedgerError {
    /// Returns true for errors caused by caller input rather than stored data.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::UnknownAsset { .. } | Self::InvalidValue { .. })
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
