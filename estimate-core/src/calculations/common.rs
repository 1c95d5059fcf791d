//! Common utility functions for pricing calculations.
//!
//! Shared rounding and clamping helpers used by the estimate store, the
//! pricing configuration and the export summary.

use rust_decimal::{Decimal, RoundingStrategy};

/// Upper bound of a percentage value.
pub const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a percentage into the inclusive range `[0, 100]`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::common::clamp_percent;
///
/// assert_eq!(clamp_percent(dec!(8.25)), dec!(8.25));
/// assert_eq!(clamp_percent(dec!(-5)), dec!(0));
/// assert_eq!(clamp_percent(dec!(250)), dec!(100));
/// ```
pub fn clamp_percent(percent: Decimal) -> Decimal {
    percent.clamp(Decimal::ZERO, ONE_HUNDRED)
}

/// Applies a percentage to an amount: `amount * percent / 100`.
///
/// The product saturates at `Decimal::MAX` / `Decimal::MIN`.
pub fn percent_of(
    amount: Decimal,
    percent: Decimal,
) -> Decimal {
    amount.saturating_mul(percent) / ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(19.994)), dec!(19.99));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(19.995)), dec!(20.00));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13));
    }

    #[test]
    fn round_half_up_handles_zero() {
        assert_eq!(round_half_up(Decimal::ZERO), dec!(0.00));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(-15.00), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn max_handles_equal_values() {
        assert_eq!(max(dec!(42.50), dec!(42.50)), dec!(42.50));
    }

    // =========================================================================
    // clamp_percent / percent_of tests
    // =========================================================================

    #[test]
    fn clamp_percent_keeps_bounds_inclusive() {
        assert_eq!(clamp_percent(dec!(0)), dec!(0));
        assert_eq!(clamp_percent(dec!(100)), dec!(100));
    }

    #[test]
    fn clamp_percent_limits_out_of_range_values() {
        assert_eq!(clamp_percent(dec!(-0.01)), dec!(0));
        assert_eq!(clamp_percent(dec!(100.01)), dec!(100));
    }

    #[test]
    fn percent_of_scales_amount() {
        assert_eq!(percent_of(dec!(100), dec!(10)), dec!(10));
        assert_eq!(percent_of(dec!(250.00), dec!(8.25)), dec!(20.625));
    }

    #[test]
    fn percent_of_saturates_on_huge_percent() {
        let result = percent_of(dec!(1000000), Decimal::MAX);

        assert_eq!(result, Decimal::MAX / ONE_HUNDRED);
    }

    #[test]
    fn percent_of_zero_rate_is_zero() {
        assert_eq!(percent_of(dec!(999.99), Decimal::ZERO), Decimal::ZERO);
    }
}
