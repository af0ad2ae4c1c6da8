//! Persisted record format.
//!
//! A record is one JSON object mapping asset names to integers:
//!
//! ```text
//! {"blood":1,"charm":1,"gameplay_vp":0,"gold":1,"herb":1,"potion":1}
//! ```
//!
//! Decoding is tolerant at the key level: unknown keys are skipped, missing
//! keys keep their default, and a known key holding anything other than an
//! integer keeps its default too. Only a record that is not a JSON object at
//! all is an error. Every tolerated anomaly is listed in the [`RecordReport`]
//! so the caller can log it.

use serde_json::{Map, Value};

use crate::asset::Asset;
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use crate::ledger::AssetLedger;

/// Anomalies tolerated while decoding a record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordReport {
    /// Keys that name no asset exactly (or the legacy `vp` key shadowed by
    /// `gameplay_vp`).
    pub ignored: Vec<String>,
    /// Assets whose stored value was not an integer and fell back to default.
    pub rejected: Vec<Asset>,
    /// Assets absent from the record.
    pub missing: Vec<Asset>,
}

impl RecordReport {
    pub fn is_clean(&self) -> bool {
        self.ignored.is_empty() && self.rejected.is_empty() && self.missing.is_empty()
    }
}

/// Where a restored ledger came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreSource {
    /// Nothing was stored; defaults were used.
    Defaults,
    /// The stored record was decoded.
    Persisted(RecordReport),
    /// The stored record was malformed; defaults were used instead.
    Recovered(LedgerError),
}

/// Ledger produced by [`AssetLedger::restore`].
#[derive(Clone, Debug)]
pub struct Restored {
    pub ledger: AssetLedger,
    pub source: RestoreSource,
}

impl AssetLedger {
    /// Encodes every counter as a JSON object.
    pub fn to_record(&self) -> String {
        self.to_value().to_string()
    }

    pub fn to_value(&self) -> Value {
        let object: Map<String, Value> = Asset::all()
            .map(|asset| (asset.name().to_owned(), Value::from(self.get(asset))))
            .collect();
        Value::Object(object)
    }

    /// Decodes a record with the standard configuration.
    pub fn from_record(text: &str) -> Result<Self> {
        Self::decode_record(text, LedgerConfig::STANDARD).map(|(ledger, _)| ledger)
    }

    /// Decodes an already-parsed record; `null` yields the defaults.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::decode_value(value, LedgerConfig::STANDARD).map(|(ledger, _)| ledger)
    }

    pub fn decode_record(text: &str, config: LedgerConfig) -> Result<(Self, RecordReport)> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| LedgerError::Deserialization(e.to_string()))?;
        Self::decode_value(&value, config)
    }

    pub fn decode_value(value: &Value, config: LedgerConfig) -> Result<(Self, RecordReport)> {
        let mut ledger = Self::with_config(config);
        let object = match value {
            Value::Object(object) => object,
            Value::Null => {
                let report = RecordReport {
                    missing: Asset::all().collect(),
                    ..RecordReport::default()
                };
                return Ok((ledger, report));
            }
            other => {
                return Err(LedgerError::Deserialization(format!(
                    "expected a JSON object, found {}",
                    kind_of(other)
                )));
            }
        };

        let mut report = RecordReport::default();
        let mut seen = [false; Asset::COUNT];

        for (key, stored) in object {
            let Some(asset) = record_key(key) else {
                report.ignored.push(key.clone());
                continue;
            };
            if key != asset.name() && object.contains_key(asset.name()) {
                report.ignored.push(key.clone());
                continue;
            }
            seen[asset.index()] = true;
            match stored.as_i64() {
                Some(quantity) => ledger.set(asset, quantity),
                None => report.rejected.push(asset),
            }
        }

        report.missing = Asset::all().filter(|asset| !seen[asset.index()]).collect();
        Ok((ledger, report))
    }

    /// Restores a ledger from an optional stored record without failing.
    pub fn restore(stored: Option<&str>, config: LedgerConfig) -> Restored {
        let Some(text) = stored else {
            return Restored {
                ledger: Self::with_config(config),
                source: RestoreSource::Defaults,
            };
        };

        match Self::decode_record(text, config) {
            Ok((ledger, report)) => Restored {
                ledger,
                source: RestoreSource::Persisted(report),
            },
            Err(err) => Restored {
                ledger: Self::with_config(config),
                source: RestoreSource::Recovered(err),
            },
        }
    }
}

/// Name of the legacy key older records used for `gameplay_vp`.
const LEGACY_VP_KEY: &str = "vp";

/// Resolves a record key: an exact asset name, or the legacy VP key.
fn record_key(key: &str) -> Option<Asset> {
    if key == LEGACY_VP_KEY {
        return Some(Asset::GameplayVp);
    }
    Asset::parse(key).ok()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
