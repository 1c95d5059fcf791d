//! Glue between the command line and the estimate core.

use std::fmt;
use std::str::FromStr;

use estimate_core::{Catalog, EstimateStore, Service};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection must name a service")]
    MissingDescription,
}

/// One `--add` argument: `"<description>"` or `"<description>=<quantity>"`.
///
/// The quantity is kept as raw text so a bad value can be rejected by the
/// store the same way a bad form input would be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub description: String,
    pub quantity: Option<String>,
}

impl FromStr for Selection {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (description, quantity) = match s.rsplit_once('=') {
            Some((description, quantity)) => (description, Some(quantity.trim().to_string())),
            None => (s, None),
        };
        let description = description.trim();
        if description.is_empty() {
            return Err(SelectionError::MissingDescription);
        }
        Ok(Self {
            description: description.to_string(),
            quantity,
        })
    }
}

/// Build an estimate from catalog selections, in the order given.
///
/// Unknown services are skipped. A selection repeated later only updates the
/// quantity of the existing line item. A quantity that does not parse leaves
/// the line item at its current quantity.
pub fn build_estimate(
    catalog: &Catalog,
    selections: &[Selection],
) -> EstimateStore {
    let mut store = EstimateStore::new();

    for selection in selections {
        let Some(service) = catalog.find(&selection.description) else {
            warn!(description = %selection.description, "service not in catalog, skipping");
            continue;
        };
        store.add_item(service);

        if let Some(raw) = &selection.quantity {
            store.set_quantity(&service.description, raw.as_str());
        }
    }

    info!(line_items = store.len(), subtotal = %store.subtotal(), "estimate built");
    store
}

/// Catalog services matching a query, printed grouped by category.
#[derive(Debug)]
pub struct SearchResults<'a> {
    query: &'a str,
    matches: Vec<&'a Service>,
}

impl<'a> SearchResults<'a> {
    pub fn new(
        catalog: &'a Catalog,
        query: &'a str,
    ) -> Self {
        Self {
            query: query.trim(),
            matches: catalog.search(query),
        }
    }

    pub fn matches(&self) -> &[&'a Service] {
        &self.matches
    }
}

impl fmt::Display for SearchResults<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.matches.is_empty() {
            return writeln!(f, "No services match '{}'.", self.query);
        }

        let mut current_category: Option<&str> = None;
        for service in &self.matches {
            if current_category != Some(service.category.as_str()) {
                let heading = if service.category.is_empty() {
                    "Uncategorized"
                } else {
                    service.category.as_str()
                };
                writeln!(f, "{heading}")?;
                current_category = Some(service.category.as_str());
            }
            writeln!(
                f,
                "  {:<40} {:>10.2} / {}",
                service.description, service.rate, service.unit
            )?;
        }
        write!(f, "{} service(s) found", self.matches.len())
    }
}

/// Render catalog services matching `query`, grouped by category.
pub fn render_search(
    catalog: &Catalog,
    query: &str,
) -> String {
    SearchResults::new(catalog, query).to_string()
}
