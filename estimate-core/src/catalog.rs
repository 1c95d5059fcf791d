//! Read-only service catalog.
//!
//! The catalog is reference data: services are validated once when the
//! catalog is built and never change afterwards. Descriptions are unique so
//! they can be used as the line-item key in an [`EstimateStore`].
//!
//! [`EstimateStore`]: crate::EstimateStore

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::models::{Service, ServiceError};

/// Why a list of services cannot become a catalog. Positions are 0-based
/// indices into the list passed to [`Catalog::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("invalid service '{description}' at position {index}: {source}")]
    InvalidService {
        index: usize,
        description: String,
        #[source]
        source: ServiceError,
    },

    #[error("duplicate service description '{description}' at position {index} (first at {first_index})")]
    DuplicateService {
        description: String,
        index: usize,
        first_index: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    /// Build a catalog, rejecting invalid services and repeated descriptions.
    pub fn new(services: Vec<Service>) -> Result<Self, CatalogError> {
        let mut first_seen: HashMap<&str, usize> = HashMap::with_capacity(services.len());
        for (index, service) in services.iter().enumerate() {
            service
                .validate()
                .map_err(|source| CatalogError::InvalidService {
                    index,
                    description: service.description.clone(),
                    source,
                })?;
            if let Some(&first_index) = first_seen.get(service.description.as_str()) {
                return Err(CatalogError::DuplicateService {
                    description: service.description.clone(),
                    index,
                    first_index,
                });
            }
            first_seen.insert(service.description.as_str(), index);
        }
        Ok(Self { services })
    }

    /// Services in load order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn find(
        &self,
        description: &str,
    ) -> Option<&Service> {
        self.services.iter().find(|s| s.description == description)
    }

    /// Case-insensitive substring search on the description.
    ///
    /// A blank query matches everything. Results are ordered by category,
    /// then description.
    pub fn search(
        &self,
        query: &str,
    ) -> Vec<&Service> {
        let needle = query.trim().to_lowercase();
        let mut matches: Vec<&Service> = self
            .services
            .iter()
            .filter(|s| needle.is_empty() || s.description.to_lowercase().contains(&needle))
            .collect();
        matches.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.description.cmp(&b.description))
        });
        matches
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.grouped().into_iter().map(|(category, _)| category).collect()
    }

    /// Services grouped by category. Categories and the services inside each
    /// are sorted.
    pub fn grouped(&self) -> Vec<(&str, Vec<&Service>)> {
        let mut groups: BTreeMap<&str, Vec<&Service>> = BTreeMap::new();
        for service in &self.services {
            groups
                .entry(service.category.as_str())
                .or_default()
                .push(service);
        }
        groups
            .into_iter()
            .map(|(category, mut services)| {
                services.sort_by(|a, b| a.description.cmp(&b.description));
                (category, services)
            })
            .collect()
    }
}
