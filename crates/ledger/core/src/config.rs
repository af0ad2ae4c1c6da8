use crate::asset::Asset;
use crate::conversion::ConversionTable;

/// Starting quantities and conversion rates, fixed for the life of a ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    defaults: [i64; Asset::COUNT],
    conversion: ConversionTable,
}

impl LedgerConfig {
    /// One of every ingredient and gold, no gameplay VP.
    pub const STANDARD: Self = Self::new(ConversionTable::STANDARD)
        .with_default(Asset::Charm, 1)
        .with_default(Asset::Herb, 1)
        .with_default(Asset::Blood, 1)
        .with_default(Asset::Potion, 1)
        .with_default(Asset::Gold, 1)
        .with_default(Asset::GameplayVp, 0);

    /// All defaults zero.
    pub const fn new(conversion: ConversionTable) -> Self {
        Self {
            defaults: [0; Asset::COUNT],
            conversion,
        }
    }

    #[must_use]
    pub const fn with_default(mut self, asset: Asset, quantity: i64) -> Self {
        self.defaults[asset.index()] = quantity;
        self
    }

    pub const fn default_quantity(&self, asset: Asset) -> i64 {
        self.defaults[asset.index()]
    }

    pub(crate) const fn default_quantities(&self) -> [i64; Asset::COUNT] {
        self.defaults
    }

    pub const fn conversion(&self) -> &ConversionTable {
        &self.conversion
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}
