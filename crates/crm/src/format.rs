//! Display formatting helpers for dashboard cards and table cells.

use rust_decimal::{Decimal, RoundingStrategy};

use clementine_core::Money;

/// Compact US-dollar rendering: `$850`, `$85K`, `$1.4M`.
///
/// The amount is scaled to the largest fitting unit, rounded half-away-from-
/// zero to `max_fraction_digits`, and trailing zeros are trimmed (`$2M`,
/// never `$2.0M`). Rounding can carry into the next unit: `$999,950` at one
/// fraction digit is `$1M`, not `$1000K`.
#[must_use]
pub fn compact_usd(value: Money, max_fraction_digits: u32) -> String {
    let amount = value.amount();
    let sign = if amount.is_sign_negative() { "-" } else { "" };

    let mut scaled = amount.abs();
    let mut suffix = "";
    while scaled >= Decimal::ONE_THOUSAND {
        let Some(next) = next_unit(suffix) else { break };
        scaled /= Decimal::ONE_THOUSAND;
        suffix = next;
    }

    let mut rounded =
        scaled.round_dp_with_strategy(max_fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    match next_unit(suffix) {
        Some(next) if rounded >= Decimal::ONE_THOUSAND => {
            rounded /= Decimal::ONE_THOUSAND;
            suffix = next;
        }
        _ => {}
    }

    format!("{sign}${}{suffix}", rounded.normalize())
}

fn next_unit(current: &str) -> Option<&'static str> {
    match current {
        "" => Some("K"),
        "K" => Some("M"),
        "M" => Some("B"),
        "B" => Some("T"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_thousand_amounts_unscaled() {
        assert_eq!(compact_usd(Money::from_dollars(850), 0), "$850");
        assert_eq!(compact_usd(Money::ZERO, 1), "$0");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(compact_usd(Money::from_dollars(85_000), 0), "$85K");
        assert_eq!(compact_usd(Money::from_dollars(4_500), 1), "$4.5K");
        assert_eq!(compact_usd(Money::from_dollars(350_000), 0), "$350K");
    }

    #[test]
    fn test_millions() {
        assert_eq!(compact_usd(Money::from_dollars(1_385_000), 1), "$1.4M");
        assert_eq!(compact_usd(Money::from_dollars(2_000_000), 1), "$2M");
        assert_eq!(compact_usd(Money::from_dollars(1_385_000), 0), "$1M");
    }

    #[test]
    fn test_rounding_carries_into_next_unit() {
        assert_eq!(compact_usd(Money::from_dollars(999_950), 1), "$1M");
        assert_eq!(compact_usd(Money::from_dollars(999_999_999), 0), "$1B");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(compact_usd(Money::from_dollars(500_000), 2), "$500K");
        assert_eq!(compact_usd(Money::from_dollars(1_500_000), 2), "$1.5M");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(compact_usd(Money::new(Decimal::from(-4_500)), 1), "-$4.5K");
    }
}
