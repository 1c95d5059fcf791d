//! Value parsers for the pricing flags (`--tax`, `--discount`).
//!
//! Both accept plain decimals with optional thousands separators
//! (`1,250.00`). Range errors surface at argument parsing, before the
//! catalog is read.

use rust_decimal::Decimal;
use thiserror::Error;

use estimate_core::calculations::common::ONE_HUNDRED;

#[derive(Debug, Error, PartialEq)]
pub enum AmountArgError {
    #[error("expected an amount, got an empty value")]
    Empty,

    #[error("'{input}' is not an amount: {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("tax rate must be between 0 and 100 percent, got {0}")]
    TaxRateOutOfRange(Decimal),

    #[error("discount must not be negative, got {0}")]
    NegativeDiscount(Decimal),
}

fn parse_amount(input: &str) -> Result<Decimal, AmountArgError> {
    let cleaned = input.trim().replace(',', "");
    if cleaned.is_empty() {
        return Err(AmountArgError::Empty);
    }
    cleaned.parse().map_err(|source| AmountArgError::Invalid {
        input: input.to_string(),
        source,
    })
}

/// Parses `--tax`: a percentage in `[0, 100]`, e.g. `8.25`.
pub fn parse_tax_rate(input: &str) -> Result<Decimal, AmountArgError> {
    let rate = parse_amount(input)?;
    if rate < Decimal::ZERO || rate > ONE_HUNDRED {
        return Err(AmountArgError::TaxRateOutOfRange(rate));
    }
    Ok(rate)
}

/// Parses `--discount`: a non-negative flat amount, e.g. `1,500`.
pub fn parse_discount(input: &str) -> Result<Decimal, AmountArgError> {
    let discount = parse_amount(input)?;
    if discount < Decimal::ZERO {
        return Err(AmountArgError::NegativeDiscount(discount));
    }
    Ok(discount)
}
