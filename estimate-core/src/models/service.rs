use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a service descriptor cannot be priced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("service description is required")]
    BlankDescription,

    #[error("unit is required for service '{0}'")]
    BlankUnit(String),

    #[error("rate must be non-negative for service '{description}', got {rate}")]
    NegativeRate { description: String, rate: Decimal },

    #[error("rate for service '{description}' exceeds {max}, got {rate}")]
    RateTooLarge {
        description: String,
        rate: Decimal,
        max: Decimal,
    },
}

/// A catalog service that can be added to an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub description: String,
    /// Unit of measure label (e.g. `hour`, `square foot`). Display only.
    pub unit: String,
    /// Price per unit.
    pub rate: Decimal,
    /// Grouping used by the catalog.
    #[serde(default)]
    pub category: String,
}

impl Service {
    /// Largest accepted rate. Keeps `rate * Quantity::MAX` and the totals
    /// built from it far inside `Decimal`'s range.
    pub const MAX_RATE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

    pub fn new(
        description: impl Into<String>,
        unit: impl Into<String>,
        rate: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            unit: unit.into(),
            rate,
            category: category.into(),
        }
    }

    /// Checks that the service can become a line item.
    ///
    /// Category may be empty; description and unit may not be blank and the
    /// rate must be within `[0, MAX_RATE]`.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.description.trim().is_empty() {
            return Err(ServiceError::BlankDescription);
        }
        if self.unit.trim().is_empty() {
            return Err(ServiceError::BlankUnit(self.description.clone()));
        }
        if self.rate < Decimal::ZERO {
            return Err(ServiceError::NegativeRate {
                description: self.description.clone(),
                rate: self.rate,
            });
        }
        if self.rate > Self::MAX_RATE {
            return Err(ServiceError::RateTooLarge {
                description: self.description.clone(),
                rate: self.rate,
                max: Self::MAX_RATE,
            });
        }
        Ok(())
    }
}
