pub mod catalog_loader;

pub use catalog_loader::{CatalogLoadError, CatalogLoader, ServiceRecord};
