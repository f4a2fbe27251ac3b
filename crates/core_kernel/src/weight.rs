//! Cost-sharing weights
//!
//! A weight expresses a member's relative share of an expense. Weights are
//! stored as decimals so fractional shares (1.5, 0.5) work without float
//! drift. Two flooring policies apply at different times:
//!
//! - at share creation, a non-positive weight falls back to [`Weight::DEFAULT`]
//!   so a misconfigured member still carries a share,
//! - during settlement, a negative weight counts as zero so it cannot invert
//!   the direction of a debit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A member's relative share of a cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(Decimal);

impl Weight {
    /// The fallback weight used when a configured value is unusable
    pub const DEFAULT: Weight = Weight(Decimal::ONE);

    /// Creates a weight from a raw decimal, as stored
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a weight, falling back to [`Weight::DEFAULT`] when `value`
    /// is zero or negative
    ///
    /// This is the share-creation policy: a participant always ends up with
    /// a usable weight.
    pub fn or_default(value: Decimal) -> Self {
        if value > Decimal::ZERO {
            Self(value)
        } else {
            Self::DEFAULT
        }
    }

    /// Returns the raw stored value
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the value used in settlement arithmetic: negative weights
    /// count as zero
    pub fn effective(&self) -> Decimal {
        self.0.max(Decimal::ZERO)
    }

    /// Returns true if the stored value is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Weight {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Weight> for Decimal {
    fn from(weight: Weight) -> Decimal {
        weight.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_or_default_keeps_positive() {
        assert_eq!(Weight::or_default(dec!(2.5)).value(), dec!(2.5));
    }

    #[test]
    fn test_or_default_floors_non_positive() {
        assert_eq!(Weight::or_default(dec!(0)), Weight::DEFAULT);
        assert_eq!(Weight::or_default(dec!(-1)), Weight::DEFAULT);
    }

    #[test]
    fn test_effective_floors_negative_only() {
        assert_eq!(Weight::new(dec!(-3)).effective(), Decimal::ZERO);
        assert_eq!(Weight::new(dec!(0)).effective(), Decimal::ZERO);
        assert_eq!(Weight::new(dec!(1.5)).effective(), dec!(1.5));
    }
}
