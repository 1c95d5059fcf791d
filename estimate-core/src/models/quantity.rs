use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when coercing raw input into a [`Quantity`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuantityError {
    #[error("quantity must not be negative, got {0}")]
    Negative(i64),

    #[error("quantity must be a whole number, got {0}")]
    Fractional(Decimal),

    #[error("quantity must be at most {max}, got {value}")]
    TooLarge { value: String, max: u32 },

    #[error("quantity '{0}' is not a number")]
    NotANumber(String),
}

/// A count of units on a line item.
///
/// Always a whole number in `0..=Quantity::MAX`. Zero is a valid state: the
/// item stays in the estimate but contributes nothing to the totals.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Six-digit cap matching the width of the quantity input.
    pub const MAX: u32 = 999_999;

    pub const ZERO: Quantity = Quantity(0);
    pub const ONE: Quantity = Quantity(1);

    pub fn new(value: u32) -> Result<Self, QuantityError> {
        if value > Self::MAX {
            return Err(QuantityError::TooLarge {
                value: value.to_string(),
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }

    /// Adds a signed delta, saturating at `floor` and at [`Quantity::MAX`].
    pub fn offset_clamped(
        self,
        delta: i64,
        floor: Quantity,
    ) -> Quantity {
        let raw = i64::from(self.0).saturating_add(delta);
        let clamped = raw.clamp(i64::from(floor.0), i64::from(Self::MAX));
        // Range checked by the clamp above.
        Quantity(clamped as u32)
    }
}

impl fmt::Display for Quantity {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Quantity::new(value)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(QuantityError::Negative(value));
        }
        let value = u32::try_from(value).map_err(|_| QuantityError::TooLarge {
            value: value.to_string(),
            max: Quantity::MAX,
        })?;
        Quantity::new(value)
    }
}

impl TryFrom<i32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Quantity::try_from(i64::from(value))
    }
}

impl TryFrom<Decimal> for Quantity {
    type Error = QuantityError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if !value.fract().is_zero() {
            return Err(QuantityError::Fractional(value));
        }
        let whole = value.to_i64().ok_or_else(|| QuantityError::TooLarge {
            value: value.to_string(),
            max: Quantity::MAX,
        })?;
        Quantity::try_from(whole)
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    /// Parses text input. Surrounding whitespace is ignored; anything that is
    /// not a whole, non-negative number is rejected rather than stripped.
    ///
    /// Only digits, one leading sign and a decimal point are accepted, so
    /// separators such as `1_000` or `1,000` are not a number here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        let well_formed = unsigned.chars().any(|c| c.is_ascii_digit())
            && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.');
        if !well_formed {
            return Err(QuantityError::NotANumber(s.to_string()));
        }
        let value: Decimal = trimmed
            .parse()
            .map_err(|_| QuantityError::NotANumber(s.to_string()))?;
        Quantity::try_from(value)
    }
}

impl TryFrom<&str> for Quantity {
    type Error = QuantityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
