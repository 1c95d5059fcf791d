//! CSV loader for the service catalog.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Values are
//! trimmed; the column count must be the same on every row.
//!
//! | Column        | Required | Type    | Notes                                  |
//! |---------------|----------|---------|----------------------------------------|
//! | `description` | yes      | string  | Unique within the file                 |
//! | `unit`        | yes      | string  | e.g. `hour`, `square foot`             |
//! | `rate`        | yes      | decimal | `0` to `1000000000`, e.g. `2.50`       |
//! | `category`    | no       | string  | Leave empty for an ungrouped service   |
//!
//! ### Example
//!
//! ```csv
//! description,unit,rate,category
//! Interior Painting,square foot,2.50,Interior
//! Roof Repair,square,350.00,Exterior
//! ```

use std::io::Read;
use std::path::Path;

use estimate_core::{Catalog, CatalogError, Service, ServiceError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The CSV structure is invalid or a cell could not be deserialised.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// A row describes a service that cannot be priced. `row` is 1-based
    /// (header = row 0).
    #[error("invalid service on row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: ServiceError,
    },

    /// The description on `row` was already used on `first_row`.
    #[error("duplicate service '{description}' on row {row} (first seen on row {first_row})")]
    DuplicateRow {
        description: String,
        row: usize,
        first_row: usize,
    },
}

impl From<CatalogError> for CatalogLoadError {
    /// Data rows start at 1 (the header is row 0), so a catalog position
    /// maps to `position + 1`.
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidService { index, source, .. } => CatalogLoadError::InvalidRow {
                row: index + 1,
                source,
            },
            CatalogError::DuplicateService {
                description,
                index,
                first_index,
            } => CatalogLoadError::DuplicateRow {
                description,
                row: index + 1,
                first_row: first_index + 1,
            },
        }
    }
}

/// A single record from the catalog CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServiceRecord {
    pub description: String,
    pub unit: String,
    pub rate: Decimal,
    #[serde(default)]
    pub category: Option<String>,
}

impl From<ServiceRecord> for Service {
    fn from(record: ServiceRecord) -> Self {
        Service::new(
            record.description,
            record.unit,
            record.rate,
            record.category.unwrap_or_default(),
        )
    }
}

/// Loader for the static service catalog.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse catalog records from any reader (file, byte slice, ...).
    ///
    /// Records are returned in file order without validation.
    pub fn parse_records<R: Read>(reader: R) -> Result<Vec<ServiceRecord>, CatalogLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: ServiceRecord = result?;
            records.push(record);
        }
        Ok(records)
    }

    /// Parse and validate a catalog.
    ///
    /// # Errors
    ///
    /// * [`CatalogLoadError::Parse`] if the CSV is malformed.
    /// * [`CatalogLoadError::InvalidRow`] if a row has a blank description or
    ///   unit, or a rate outside `[0, Service::MAX_RATE]`.
    /// * [`CatalogLoadError::DuplicateRow`] if a description repeats.
    pub fn parse<R: Read>(reader: R) -> Result<Catalog, CatalogLoadError> {
        let services: Vec<Service> = Self::parse_records(reader)?
            .into_iter()
            .map(Service::from)
            .collect();
        debug!(rows = services.len(), "parsed catalog rows");

        Ok(Catalog::new(services)?)
    }

    /// Convenience wrapper: open a file and delegate to [`CatalogLoader::parse`].
    pub fn load_from_file(path: &Path) -> Result<Catalog, CatalogLoadError> {
        let file = std::fs::File::open(path)?;
        let catalog = Self::parse(file)?;
        info!(path = %path.display(), services = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}
