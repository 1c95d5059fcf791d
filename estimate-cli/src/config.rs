//! TOML configuration for the estimator.
//!
//! ```toml
//! [pricing]
//! tax_rate_percent = "8.25"
//! discount = "150.00"
//!
//! [header]
//! title = "Construction Estimate"
//! project_title = "Kitchen Remodel"
//!
//! [header.company]
//! name = "Oak & Iron Builders"
//! phone = "555-010-4477"
//!
//! [header.company.address]
//! street = "4 Mill Rd"
//! city = "Eastbrook"
//!
//! [header.client]
//! name = "Dana Reyes"
//! ```
//!
//! Every key is optional; a missing `[pricing]` table means no tax and no
//! discount, and a missing `[header]` prints only the default title.
//! Decimal values may be written as strings or numbers.

use std::path::{Path, PathBuf};

use estimate_core::{EstimateHeader, PricingConfig, PricingConfigError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid pricing config: {0}")]
    Invalid(#[from] PricingConfigError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pricing: PricingConfig,
    pub header: EstimateHeader,
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(input)?;
        config.pricing.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        tax_rate_percent: Option<Decimal>,
        discount: Option<Decimal>,
    ) -> Self {
        if let Some(tax) = tax_rate_percent {
            self.pricing.tax_rate_percent = tax;
        }
        if let Some(discount) = discount {
            self.pricing.discount = discount;
        }
        self
    }

    pub fn with_project_title(
        mut self,
        project_title: Option<String>,
    ) -> Self {
        if let Some(project_title) = project_title {
            self.header.project_title = project_title;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn parses_string_decimals() {
        let config = AppConfig::from_toml_str(
            r#"
            [pricing]
            tax_rate_percent = "8.25"
            discount = "150.00"
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.tax_rate_percent, dec!(8.25));
        assert_eq!(config.pricing.discount, dec!(150.00));
    }

    #[test]
    fn missing_keys_default_to_zero() {
        let config = AppConfig::from_toml_str("[pricing]\ntax_rate_percent = \"6\"\n").unwrap();

        assert_eq!(config.pricing.tax_rate_percent, dec!(6));
        assert_eq!(config.pricing.discount, Decimal::ZERO);
    }

    #[test]
    fn rejects_out_of_range_tax_rate() {
        let result = AppConfig::from_toml_str("[pricing]\ntax_rate_percent = \"120\"\n");

        assert!(matches!(
            result,
            Err(ConfigError::Invalid(PricingConfigError::InvalidTaxRate(_)))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = AppConfig::from_toml_str("[pricing\n");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn parses_header_tables() {
        let config = AppConfig::from_toml_str(
            r#"
            [header]
            title = "Remodel Quote"

            [header.client]
            name = "Dana Reyes"
            phone = "5550104477"

            [header.client.address]
            town = "Eastbrook"
            "#,
        )
        .unwrap();

        assert_eq!(config.header.title, "Remodel Quote");
        assert_eq!(config.header.project_title, "");
        assert_eq!(config.header.client.name, "Dana Reyes");
        assert_eq!(config.header.client.address.town, "Eastbrook");
        assert!(config.header.company.is_empty());
    }

    #[test]
    fn missing_header_keeps_default_title() {
        let config = AppConfig::from_toml_str("[header]\nproject_title = \"Deck\"\n").unwrap();

        assert_eq!(config.header.title, "Construction Estimate");
        assert_eq!(config.header.project_title, "Deck");
    }

    #[test]
    fn project_title_override_replaces_file_value() {
        let config = AppConfig::from_toml_str("[header]\nproject_title = \"Deck\"\n")
            .unwrap()
            .with_project_title(Some("Porch".to_string()));

        assert_eq!(config.header.project_title, "Porch");
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = AppConfig::default().with_overrides(Some(dec!(5)), None);

        assert_eq!(config.pricing.tax_rate_percent, dec!(5));
        assert_eq!(config.pricing.discount, Decimal::ZERO);
    }
}
