//! The closed set of tracked assets.
//!
//! Asset names are resolved once at the API boundary; everything past that
//! point works with the typed [`Asset`] and cannot refer to an unknown counter.

use std::str::FromStr;

use strum::{EnumCount, IntoEnumIterator};

use crate::error::{LedgerError, Result};

/// A named counter tracked by the ledger.
///
/// Declaration order is the canonical order; snapshots and reset
/// notifications walk the assets in this order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Asset {
    Charm,
    Herb,
    /// Costs victory points rather than earning them.
    Blood,
    Potion,
    Gold,
    /// Victory points scored directly during play, outside any conversion.
    GameplayVp,
}

impl Asset {
    /// Number of assets in the set.
    pub const COUNT: usize = <Self as EnumCount>::COUNT;

    /// Resolves an exact canonical name, failing with
    /// [`LedgerError::UnknownAsset`]. Matching is case-sensitive.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| LedgerError::UnknownAsset {
            name: name.to_owned(),
        })
    }

    /// Iterates every asset in declaration order.
    pub fn all() -> impl Iterator<Item = Asset> {
        Self::iter()
    }

    /// Canonical snake_case name used in records and notifications.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Charm => "charm",
            Self::Herb => "herb",
            Self::Blood => "blood",
            Self::Potion => "potion",
            Self::Gold => "gold",
            Self::GameplayVp => "gameplay_vp",
        }
    }

    /// Human-facing label for display widgets.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Charm => "Charm",
            Self::Herb => "Herb",
            Self::Blood => "Blood",
            Self::Potion => "Potion",
            Self::Gold => "Gold",
            Self::GameplayVp => "VP",
        }
    }

    /// Dense index used by [`crate::AssetLedger`] storage.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}
