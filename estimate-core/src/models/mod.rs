mod header;
mod line_item;
mod quantity;
mod service;

pub use header::{Address, DEFAULT_ESTIMATE_TITLE, EstimateHeader, Party, format_phone};
pub use line_item::LineItem;
pub use quantity::{Quantity, QuantityError};
pub use service::{Service, ServiceError};
