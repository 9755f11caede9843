//! Type-safe money representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A US-dollar amount.
///
/// Deal values and revenue figures are whole-dollar amounts in the sample
/// data, but pipeline math (probability weighting, stage totals) must stay
/// exact, so the backing type is [`Decimal`] rather than a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a money value from a raw decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a money value from a whole number of dollars.
    #[must_use]
    pub fn from_dollars(dollars: i64) -> Self {
        Self(Decimal::from(dollars))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Scale the amount by a whole-number percentage.
    ///
    /// Used for probability-weighted pipeline value: a $10,000 deal at 60%
    /// contributes $6,000.
    #[must_use]
    pub fn percent_of(&self, percent: u8) -> Self {
        Self(self.0 * Decimal::from(percent) / Decimal::ONE_HUNDRED)
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dollars() {
        let value = Money::from_dollars(85_000);
        assert_eq!(value.amount(), Decimal::from(85_000));
        assert_eq!(value.to_string(), "$85000");
    }

    #[test]
    fn test_percent_of() {
        let deal = Money::from_dollars(85_000);
        assert_eq!(deal.percent_of(60), Money::from_dollars(51_000));
        assert_eq!(deal.percent_of(100), deal);
        assert_eq!(deal.percent_of(0), Money::ZERO);
    }

    #[test]
    fn test_percent_of_is_exact() {
        // 45000 * 40% has an exact decimal result; floats would drift
        let deal = Money::from_dollars(45_000);
        assert_eq!(deal.percent_of(40), Money::from_dollars(18_000));
    }

    #[test]
    fn test_sum() {
        let values = [
            Money::from_dollars(120_000),
            Money::from_dollars(45_000),
            Money::from_dollars(95_000),
        ];
        let total: Money = values.iter().sum();
        assert_eq!(total, Money::from_dollars(260_000));
    }

    #[test]
    fn test_serde_roundtrip() {
        let value = Money::from_dollars(1_385_000);
        let json = serde_json::to_string(&value).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
