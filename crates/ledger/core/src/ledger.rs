//! Authoritative asset counters.

use std::collections::BTreeMap;

use crate::asset::Asset;
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};

/// In-memory store of every asset quantity.
///
/// Storage is dense over [`Asset`], so every counter of the fixed set exists
/// for the whole life of the ledger. Quantities are plain integers; the
/// conversion table is only consulted by [`AssetLedger::derived_score`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetLedger {
    quantities: [i64; Asset::COUNT],
    config: LedgerConfig,
}

impl AssetLedger {
    /// Creates a ledger holding the standard default quantities.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::STANDARD)
    }

    /// Creates a ledger at the defaults of `config`.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            quantities: config.default_quantities(),
            config,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn get(&self, asset: Asset) -> i64 {
        self.quantities[asset.index()]
    }

    /// Looks up a counter by name.
    pub fn get_named(&self, name: &str) -> Result<i64> {
        Asset::parse(name).map(|asset| self.get(asset))
    }

    /// Returns an owned copy of every counter.
    pub fn get_all(&self) -> AssetSnapshot {
        AssetSnapshot(Asset::all().map(|asset| (asset, self.get(asset))).collect())
    }

    /// Overwrites a counter unconditionally.
    pub fn set(&mut self, asset: Asset, value: i64) {
        self.quantities[asset.index()] = value;
    }

    pub fn set_named(&mut self, name: &str, value: i64) -> Result<Asset> {
        let asset = Asset::parse(name)?;
        self.set(asset, value);
        Ok(asset)
    }

    /// Adds `delta` to a counter.
    ///
    /// The change is applied when the result is non-negative or when it moves
    /// the counter upward. A decrement that would take the counter below zero
    /// is rejected and leaves it untouched; an increment never is, even if
    /// the counter stays negative.
    pub fn increment(&mut self, asset: Asset, delta: i64) -> Result<IncrementOutcome> {
        let current = self.get(asset);
        let next = current
            .checked_add(delta)
            .ok_or_else(|| LedgerError::InvalidValue {
                asset,
                reason: format!("{current} + {delta} overflows"),
            })?;

        if next >= 0 || next > current {
            self.set(asset, next);
            Ok(IncrementOutcome::Applied {
                previous: current,
                current: next,
            })
        } else {
            Ok(IncrementOutcome::Rejected { current })
        }
    }

    pub fn increment_named(&mut self, name: &str, delta: i64) -> Result<(Asset, IncrementOutcome)> {
        let asset = Asset::parse(name)?;
        let outcome = self.increment(asset, delta)?;
        Ok((asset, outcome))
    }

    /// Restores every counter to its configured default.
    pub fn reset(&mut self) {
        self.quantities = self.config.default_quantities();
    }

    /// Victory points derived from the current counters.
    pub fn derived_score(&self) -> i64 {
        self.config
            .conversion()
            .score(Asset::all().map(|asset| (asset, self.get(asset))))
    }
}

impl Default for AssetLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of [`AssetLedger::increment`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementOutcome {
    Applied { previous: i64, current: i64 },
    /// The decrement would have pushed the counter below zero.
    Rejected { current: i64 },
}

impl IncrementOutcome {
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Counter value after the call.
    pub const fn value(&self) -> i64 {
        match *self {
            Self::Applied { current, .. } | Self::Rejected { current } => current,
        }
    }
}

/// Detached copy of every counter, ordered by asset.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct AssetSnapshot(BTreeMap<Asset, i64>);

impl AssetSnapshot {
    pub fn get(&self, asset: Asset) -> Option<i64> {
        self.0.get(&asset).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Asset, i64)> + '_ {
        self.0.iter().map(|(asset, value)| (*asset, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<Asset, i64> {
        self.0
    }
}

impl From<AssetSnapshot> for BTreeMap<Asset, i64> {
    fn from(snapshot: AssetSnapshot) -> Self {
        snapshot.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::{ConversionFactor, ConversionTable};

    #[test]
    fn fresh_ledger_holds_defaults() {
        let ledger = AssetLedger::new();
        for asset in Asset::all() {
            assert_eq!(ledger.get(asset), LedgerConfig::STANDARD.default_quantity(asset));
        }
        assert_eq!(ledger.get(Asset::Charm), 1);
        assert_eq!(ledger.get(Asset::GameplayVp), 0);
        assert_eq!(ledger.derived_score(), 0);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut ledger = AssetLedger::new();
        let mut raw = ledger.get_all().into_inner();
        raw.insert(Asset::Gold, 99);
        assert_eq!(ledger.get(Asset::Gold), 1);

        let before = ledger.get_all();
        ledger.set(Asset::Gold, 7);
        assert_eq!(before.get(Asset::Gold), Some(1));
        assert_eq!(before.len(), Asset::COUNT);
    }

    #[test]
    fn set_then_get() {
        let mut ledger = AssetLedger::new();
        assert_eq!(ledger.set_named("charm", 4).unwrap(), Asset::Charm);
        assert_eq!(ledger.get_named("charm").unwrap(), 4);
        ledger.set(Asset::Blood, -3);
        assert_eq!(ledger.get(Asset::Blood), -3);
    }

    #[test]
    fn decrement_below_zero_is_rejected() {
        let mut ledger = AssetLedger::new();
        ledger.set(Asset::Herb, 3);

        let outcome = ledger.increment(Asset::Herb, -5).unwrap();
        assert_eq!(outcome, IncrementOutcome::Rejected { current: 3 });
        assert_eq!(ledger.get(Asset::Herb), 3);

        let outcome = ledger.increment(Asset::Herb, -3).unwrap();
        assert_eq!(
            outcome,
            IncrementOutcome::Applied {
                previous: 3,
                current: 0
            }
        );
    }

    #[test]
    fn increments_always_apply() {
        let mut ledger = AssetLedger::new();
        ledger.set(Asset::Herb, 3);
        assert!(ledger.increment(Asset::Herb, 5).unwrap().is_applied());
        assert_eq!(ledger.get(Asset::Herb), 8);

        // A negative counter may still climb while staying negative.
        ledger.set(Asset::Potion, -10);
        let outcome = ledger.increment(Asset::Potion, 5).unwrap();
        assert_eq!(outcome.value(), -5);
        assert!(outcome.is_applied());

        // ...but cannot sink further.
        let outcome = ledger.increment(Asset::Potion, -1).unwrap();
        assert!(!outcome.is_applied());
        assert_eq!(ledger.get(Asset::Potion), -5);
    }

    #[test]
    fn zero_delta_on_negative_counter_is_rejected() {
        let mut ledger = AssetLedger::new();
        ledger.set(Asset::Gold, -2);
        assert!(!ledger.increment(Asset::Gold, 0).unwrap().is_applied());
        assert!(ledger.increment(Asset::Charm, 0).unwrap().is_applied());
    }

    #[test]
    fn overflow_is_an_invalid_value() {
        let mut ledger = AssetLedger::new();
        ledger.set(Asset::Gold, i64::MAX);
        let err = ledger.increment(Asset::Gold, 1).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidValue { asset: Asset::Gold, .. }));
        assert_eq!(ledger.get(Asset::Gold), i64::MAX);
    }

    #[test]
    fn unknown_names_leave_state_unchanged() {
        let mut ledger = AssetLedger::new();
        let before = ledger.get_all();

        assert!(matches!(
            ledger.get_named("mana"),
            Err(LedgerError::UnknownAsset { .. })
        ));
        assert!(ledger.set_named("mana", 3).is_err());
        assert!(ledger.increment_named("mana", 3).is_err());
        assert_eq!(ledger.get_all(), before);
    }

    #[test]
    fn names_resolve_exactly() {
        let mut ledger = AssetLedger::new();
        let before = ledger.get_all();

        for name in ["CHARM", "vp", "VP"] {
            assert!(
                matches!(ledger.get_named(name), Err(LedgerError::UnknownAsset { .. })),
                "{name:?} should not resolve"
            );
        }
        assert!(matches!(
            ledger.set_named("Gold", 9),
            Err(LedgerError::UnknownAsset { .. })
        ));
        assert_eq!(ledger.get_all(), before);
    }

    #[test]
    fn derived_score_tracks_every_mutation() {
        let mut ledger = AssetLedger::new();
        let recompute = |ledger: &AssetLedger| -> i64 {
            let table = ConversionTable::STANDARD;
            ledger
                .get_all()
                .iter()
                .map(|(asset, value)| table.factor(asset).points_for(value) as i64)
                .sum()
        };

        ledger.set(Asset::Charm, 7);
        assert_eq!(ledger.derived_score(), recompute(&ledger));
        let _ = ledger.increment(Asset::Blood, 4).unwrap();
        assert_eq!(ledger.derived_score(), recompute(&ledger));
        ledger.set(Asset::GameplayVp, 12);
        let _ = ledger.increment(Asset::Potion, 5).unwrap();
        assert_eq!(ledger.derived_score(), recompute(&ledger));

        // charm 7 → 2, herb 1 → 0, blood 5 → -5, potion 6 → 2, gold 1 → 1, vp 12
        assert_eq!(ledger.derived_score(), 12);
    }

    #[test]
    fn reset_restores_configured_defaults() {
        let config = LedgerConfig::new(ConversionTable::uniform(ConversionFactor::whole(2)))
            .with_default(Asset::Gold, 5);
        let mut ledger = AssetLedger::with_config(config);
        assert_eq!(ledger.derived_score(), 10);

        ledger.set(Asset::Gold, 0);
        ledger.set(Asset::Herb, 9);
        ledger.reset();
        assert_eq!(ledger.get(Asset::Gold), 5);
        assert_eq!(ledger.get(Asset::Herb), 0);
        assert_eq!(ledger.derived_score(), 10);
    }
}
