//! Asset-to-victory-point conversion.
//!
//! Factors are exact rationals so that `floor(quantity × factor)` never picks
//! up floating-point error (a third of 3 charms is exactly one point).

use std::fmt;

use crate::asset::Asset;

/// Victory points earned per unit of an asset, as a reduced fraction.
///
/// The denominator is always positive; the sign lives on the numerator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConversionFactor {
    numer: i64,
    denom: i64,
}

impl ConversionFactor {
    /// Creates `numer / denom`.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero. Factors are compile-time table entries.
    pub const fn new(numer: i64, denom: i64) -> Self {
        assert!(denom != 0, "conversion factor denominator must be non-zero");
        let (mut numer, mut denom) = if denom < 0 {
            (-numer, -denom)
        } else {
            (numer, denom)
        };
        let divisor = gcd(numer.unsigned_abs(), denom.unsigned_abs()) as i64;
        if divisor > 1 {
            numer /= divisor;
            denom /= divisor;
        }
        Self { numer, denom }
    }

    /// A whole number of points per unit.
    pub const fn whole(points: i64) -> Self {
        Self::new(points, 1)
    }

    /// One point for every `items` units (negative `items` costs a point).
    pub const fn per(items: i64) -> Self {
        Self::new(1, items)
    }

    pub const fn numer(&self) -> i64 {
        self.numer
    }

    pub const fn denom(&self) -> i64 {
        self.denom
    }

    /// Units needed per victory point, or `None` for a zero factor.
    pub fn items_per_point(&self) -> Option<ConversionFactor> {
        (self.numer != 0).then(|| Self::new(self.denom, self.numer))
    }

    /// `floor(quantity × factor)`, rounded toward negative infinity.
    pub fn points_for(&self, quantity: i64) -> i128 {
        let product = i128::from(quantity) * i128::from(self.numer);
        // denom > 0, so euclidean division is floor division
        product.div_euclid(i128::from(self.denom))
    }
}

impl fmt::Display for ConversionFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Static asset → factor mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConversionTable {
    factors: [ConversionFactor; Asset::COUNT],
}

impl ConversionTable {
    /// The scoreboard's conversion rates.
    ///
    /// Three charms, herbs or potions make a point; each gold is a point;
    /// each blood costs one; gameplay VP count as-is.
    pub const STANDARD: Self = Self::uniform(ConversionFactor::whole(0))
        .with(Asset::Charm, ConversionFactor::per(3))
        .with(Asset::Herb, ConversionFactor::per(3))
        .with(Asset::Blood, ConversionFactor::whole(-1))
        .with(Asset::Potion, ConversionFactor::per(3))
        .with(Asset::Gold, ConversionFactor::whole(1))
        .with(Asset::GameplayVp, ConversionFactor::whole(1));

    /// Every asset converts at the same factor.
    pub const fn uniform(factor: ConversionFactor) -> Self {
        Self {
            factors: [factor; Asset::COUNT],
        }
    }

    /// Replaces the factor for one asset (builder pattern).
    #[must_use]
    pub const fn with(mut self, asset: Asset, factor: ConversionFactor) -> Self {
        self.factors[asset.index()] = factor;
        self
    }

    pub const fn factor(&self, asset: Asset) -> ConversionFactor {
        self.factors[asset.index()]
    }

    /// Sums the floored per-asset contributions.
    ///
    /// Saturates at the `i64` bounds instead of wrapping.
    pub fn score<I>(&self, quantities: I) -> i64
    where
        I: IntoIterator<Item = (Asset, i64)>,
    {
        let total: i128 = quantities
            .into_iter()
            .map(|(asset, quantity)| self.factor(asset).points_for(quantity))
            .sum();
        i64::try_from(total).unwrap_or(if total < 0 { i64::MIN } else { i64::MAX })
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
