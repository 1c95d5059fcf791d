//! Pricing configuration supplied by the export form.
//!
//! The estimate store takes the tax rate and discount as plain values and
//! does not range-check them. [`PricingConfig`] is where those values are
//! held, validated when they come from a file, and clamped when they come
//! from free-form input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{ONE_HUNDRED, clamp_percent};

/// Errors reported by [`PricingConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingConfigError {
    /// Tax rate is a percentage and must be within `[0, 100]`.
    #[error("tax rate must be between 0 and 100 percent, got {0}")]
    InvalidTaxRate(Decimal),

    /// The discount is a flat amount and may not be negative.
    #[error("discount must be non-negative, got {0}")]
    NegativeDiscount(Decimal),
}

/// Tax and discount applied on top of an estimate's subtotal.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::PricingConfig;
///
/// let config = PricingConfig {
///     tax_rate_percent: dec!(8.25),
///     discount: dec!(50.00),
/// };
///
/// assert_eq!(config.validate(), Ok(()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Sales tax as a percentage of the subtotal (e.g. `8.25` for 8.25%).
    pub tax_rate_percent: Decimal,

    /// Flat amount deducted once from the subtotal.
    pub discount: Decimal,
}

impl PricingConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`PricingConfigError`] if:
    /// - `tax_rate_percent` is not in `[0, 100]`
    /// - `discount` is negative
    pub fn validate(&self) -> Result<(), PricingConfigError> {
        if self.tax_rate_percent < Decimal::ZERO || self.tax_rate_percent > ONE_HUNDRED {
            return Err(PricingConfigError::InvalidTaxRate(self.tax_rate_percent));
        }
        if self.discount < Decimal::ZERO {
            return Err(PricingConfigError::NegativeDiscount(self.discount));
        }
        Ok(())
    }

    /// Returns a copy with the tax rate clamped to `[0, 100]` and the
    /// discount floored at zero.
    pub fn clamped(&self) -> Self {
        let tax_rate_percent = clamp_percent(self.tax_rate_percent);
        if tax_rate_percent != self.tax_rate_percent {
            warn!(
                requested = %self.tax_rate_percent,
                applied = %tax_rate_percent,
                "tax rate out of range, clamping"
            );
        }

        let discount = self.discount.max(Decimal::ZERO);
        if discount != self.discount {
            warn!(requested = %self.discount, "negative discount ignored");
        }

        Self {
            tax_rate_percent,
            discount,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    fn test_config() -> PricingConfig {
        PricingConfig {
            tax_rate_percent: dec!(10),
            discount: dec!(15),
        }
    }

    /// Initializes tracing subscriber for tests that exercise warning paths.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // PricingConfig::validate tests
    // =========================================================================

    #[test]
    fn validate_accepts_valid_config() {
        assert_eq!(test_config().validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_default_config() {
        assert_eq!(PricingConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_full_tax_rate() {
        let config = PricingConfig {
            tax_rate_percent: dec!(100),
            ..test_config()
        };

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_tax_rate() {
        let config = PricingConfig {
            tax_rate_percent: dec!(-1),
            ..test_config()
        };

        assert_eq!(
            config.validate(),
            Err(PricingConfigError::InvalidTaxRate(dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_tax_rate_above_one_hundred() {
        let config = PricingConfig {
            tax_rate_percent: dec!(100.5),
            ..test_config()
        };

        assert_eq!(
            config.validate(),
            Err(PricingConfigError::InvalidTaxRate(dec!(100.5)))
        );
    }

    #[test]
    fn validate_rejects_negative_discount() {
        let config = PricingConfig {
            discount: dec!(-20),
            ..test_config()
        };

        assert_eq!(
            config.validate(),
            Err(PricingConfigError::NegativeDiscount(dec!(-20)))
        );
    }

    // =========================================================================
    // PricingConfig::clamped tests
    // =========================================================================

    #[test]
    fn clamped_leaves_valid_config_unchanged() {
        assert_eq!(test_config().clamped(), test_config());
    }

    #[test]
    fn clamped_limits_tax_rate_and_discount() {
        let _guard = init_test_tracing();
        let config = PricingConfig {
            tax_rate_percent: dec!(150),
            discount: dec!(-5),
        };

        let clamped = config.clamped();

        assert_eq!(clamped.tax_rate_percent, dec!(100));
        assert_eq!(clamped.discount, dec!(0));
        assert_eq!(clamped.validate(), Ok(()));
    }

    #[test]
    fn clamped_raises_negative_tax_rate_to_zero() {
        let _guard = init_test_tracing();
        let config = PricingConfig {
            tax_rate_percent: dec!(-7.5),
            ..test_config()
        };

        assert_eq!(config.clamped().tax_rate_percent, dec!(0));
    }
}
