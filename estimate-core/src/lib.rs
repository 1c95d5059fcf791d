pub mod calculations;
pub mod catalog;
pub mod models;
pub mod store;
pub mod summary;

pub use calculations::{PricingConfig, PricingConfigError};
pub use catalog::{Catalog, CatalogError};
pub use models::*;
pub use store::{EstimateStore, QUANTITY_FLOOR};
pub use summary::{EstimateSummary, SummaryLine};
