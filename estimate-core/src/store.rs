//! The estimate store: an ordered, description-keyed set of line items and
//! the totals derived from it.
//!
//! # Quantity floor
//!
//! Quantities never go below [`QUANTITY_FLOOR`] (zero). The same floor is
//! used by [`EstimateStore::set_quantity`] and
//! [`EstimateStore::increment_quantity`]; decrementing past zero leaves the
//! item present at zero, and only [`EstimateStore::remove_item`] takes an
//! item out of the estimate.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use estimate_core::{EstimateStore, Service};
//!
//! let mut store = EstimateStore::new();
//! store.add_item(&Service::new("Interior Painting", "square foot", dec!(10), "Interior"));
//! store.add_item(&Service::new("Trim Carpentry", "linear foot", dec!(5), "Interior"));
//! store.set_quantity("Interior Painting", 2);
//! store.set_quantity("Trim Carpentry", 3);
//!
//! assert_eq!(store.subtotal(), dec!(35));
//! assert_eq!(store.grand_total(dec!(10), dec!(5)), dec!(33.5));
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::PricingConfig;
use crate::calculations::common::{max, percent_of};
use crate::models::{LineItem, Quantity, Service};
use crate::summary::EstimateSummary;

/// Lowest quantity a line item can be set or decremented to.
pub const QUANTITY_FLOOR: Quantity = Quantity::ZERO;

/// Owns the line items of a single estimate.
///
/// Items keep the order in which they were first added. Totals are derived
/// from the items on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EstimateStore {
    items: Vec<LineItem>,
}

impl EstimateStore {
    /// Create an empty estimate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(
        &self,
        description: &str,
    ) -> Option<&LineItem> {
        self.items.iter().find(|item| item.description == description)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a line item with this description is present (at any quantity).
    pub fn is_in_estimate(
        &self,
        description: &str,
    ) -> bool {
        self.position(description).is_some()
    }

    /// Add a service with a quantity of one.
    ///
    /// See [`EstimateStore::add_item_with_quantity`].
    pub fn add_item(
        &mut self,
        service: &Service,
    ) -> bool {
        self.add_item_with_quantity(service, Quantity::ONE)
    }

    /// Append a line item for `service` unless one with the same description
    /// already exists.
    ///
    /// Returns `true` when an item was appended. A duplicate description, a
    /// zero starting quantity or an invalid service leave the estimate
    /// unchanged.
    pub fn add_item_with_quantity(
        &mut self,
        service: &Service,
        initial: Quantity,
    ) -> bool {
        if let Err(e) = service.validate() {
            warn!(error = %e, "rejecting service");
            return false;
        }
        if initial.is_zero() {
            warn!(description = %service.description, "initial quantity must be positive");
            return false;
        }
        if self.is_in_estimate(&service.description) {
            debug!(description = %service.description, "already in estimate");
            return false;
        }

        debug!(description = %service.description, quantity = %initial, "adding line item");
        self.items.push(LineItem::from_service(service, initial));
        true
    }

    /// Remove the line item with this description, returning it if present.
    pub fn remove_item(
        &mut self,
        description: &str,
    ) -> Option<LineItem> {
        let Some(idx) = self.position(description) else {
            debug!(description, "remove of unknown line item ignored");
            return None;
        };
        debug!(description, "removing line item");
        Some(self.items.remove(idx))
    }

    /// Store a new quantity for an existing line item.
    ///
    /// The value is coerced into a [`Quantity`]; negative, fractional or
    /// out-of-range input is rejected and the stored quantity is unchanged.
    /// Zero keeps the item in the estimate. Returns `true` when a quantity
    /// was stored.
    pub fn set_quantity<Q>(
        &mut self,
        description: &str,
        quantity: Q,
    ) -> bool
    where
        Q: TryInto<Quantity>,
        Q::Error: std::fmt::Display,
    {
        let quantity = match quantity.try_into() {
            Ok(q) => q,
            Err(e) => {
                warn!(description, error = %e, "rejecting quantity");
                return false;
            }
        };

        match self.item_mut(description) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => {
                debug!(description, "quantity update for unknown line item ignored");
                false
            }
        }
    }

    /// Add `delta` (which may be negative) to a line item's quantity.
    ///
    /// The result is clamped to [`QUANTITY_FLOOR`] and [`Quantity::MAX`].
    /// Returns the new quantity, or `None` if no item has this description.
    pub fn increment_quantity(
        &mut self,
        description: &str,
        delta: i64,
    ) -> Option<Quantity> {
        let Some(item) = self.item_mut(description) else {
            debug!(description, "increment for unknown line item ignored");
            return None;
        };
        item.quantity = item.quantity.offset_clamped(delta, QUANTITY_FLOOR);
        Some(item.quantity)
    }

    /// Remove every line item.
    pub fn clear(&mut self) {
        debug!(count = self.items.len(), "clearing estimate");
        self.items.clear();
    }

    /// Sum of `quantity * rate` over all line items.
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// `subtotal * tax_rate_percent / 100`.
    ///
    /// The rate is expected to be clamped to `[0, 100]` by the caller.
    pub fn tax_amount(
        &self,
        tax_rate_percent: Decimal,
    ) -> Decimal {
        percent_of(self.subtotal(), tax_rate_percent)
    }

    /// The flat discount actually deducted: negative input counts as zero.
    pub fn discount_amount(
        &self,
        discount: Decimal,
    ) -> Decimal {
        max(discount, Decimal::ZERO)
    }

    /// `subtotal + tax - discount`.
    ///
    /// Tax and discount are both computed from the subtotal and combined
    /// additively. The result is not clamped and may be negative when the
    /// discount exceeds the taxed subtotal.
    pub fn grand_total(
        &self,
        tax_rate_percent: Decimal,
        discount: Decimal,
    ) -> Decimal {
        self.subtotal()
            .saturating_add(self.tax_amount(tax_rate_percent))
            .saturating_sub(self.discount_amount(discount))
    }

    /// Build the export view of this estimate.
    pub fn summary(
        &self,
        config: &PricingConfig,
        prepared_on: Option<NaiveDate>,
    ) -> EstimateSummary {
        EstimateSummary::build(self, config, prepared_on)
    }

    fn position(
        &self,
        description: &str,
    ) -> Option<usize> {
        self.items.iter().position(|item| item.description == description)
    }

    fn item_mut(
        &mut self,
        description: &str,
    ) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.description == description)
    }
}
