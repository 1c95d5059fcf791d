use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Quantity, Service};

/// One service entry within an estimate.
///
/// The rate is copied from the service when the item is created, so later
/// catalog edits never reprice an estimate that already contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub unit: String,
    pub rate: Decimal,
    pub quantity: Quantity,
    pub category: String,
}

impl LineItem {
    pub fn from_service(
        service: &Service,
        quantity: Quantity,
    ) -> Self {
        Self {
            description: service.description.clone(),
            unit: service.unit.clone(),
            rate: service.rate,
            quantity,
            category: service.category.clone(),
        }
    }

    /// `rate * quantity`, unrounded. Saturates instead of overflowing.
    pub fn line_total(&self) -> Decimal {
        self.rate.saturating_mul(self.quantity.as_decimal())
    }
}
