//! Pricing calculations shared by the estimate store and its export view.
//!
//! The store derives subtotal, tax, discount and grand total itself; this
//! module holds the rounding helpers and the tax/discount configuration that
//! callers pass in.

pub mod common;
pub mod pricing;

pub use pricing::{PricingConfig, PricingConfigError};
