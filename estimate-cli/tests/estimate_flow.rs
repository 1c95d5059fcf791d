//! End-to-end tests for the command-line flow: catalog and config from disk,
//! selections applied, summary rendered.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use estimate_cli::app::{self, Selection};
use estimate_cli::config::{AppConfig, ConfigError};
use estimate_data::CatalogLoader;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn selections(args: &[&str]) -> Vec<Selection> {
    args.iter()
        .map(|a| a.parse().expect("valid selection"))
        .collect()
}

#[test]
fn test_config_fixture_loads() {
    let config = AppConfig::load(&fixture("pricing.toml")).expect("fixture config loads");

    assert_eq!(config.pricing.tax_rate_percent, dec!(8.25));
    assert_eq!(config.pricing.discount, dec!(150.00));
    assert_eq!(config.header.title, "Construction Estimate");
    assert_eq!(config.header.project_title, "Kitchen Remodel");
    assert_eq!(config.header.company.address.zip, "05001");
    assert_eq!(config.header.client.name, "Dana Reyes");
}

#[test]
fn test_missing_config_is_read_error() {
    let result = AppConfig::load(&fixture("missing.toml"));

    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_kitchen_estimate_summary() {
    let catalog = CatalogLoader::load_from_file(&fixture("catalog.csv")).unwrap();
    let config = AppConfig::load(&fixture("pricing.toml")).unwrap();

    let store = app::build_estimate(
        &catalog,
        &selections(&[
            "Tile Installation=180",
            "Drywall Repair=6",
            "Debris Hauling",
            "Deck Staining=0",
        ]),
    );
    let summary = store
        .summary(&config.pricing, NaiveDate::from_ymd_opt(2025, 6, 2))
        .with_header(config.header.clone());

    // 180 * 12.00 + 6 * 55.00 + 275.00
    assert_eq!(summary.subtotal, dec!(2765.00));
    assert_eq!(summary.tax, dec!(228.11));
    assert_eq!(summary.discount, dec!(150.00));
    assert_eq!(summary.grand_total, dec!(2843.11));
    assert_eq!(summary.lines.len(), 3);
    assert!(store.is_in_estimate("Deck Staining"));

    let rendered = summary.to_string();
    assert!(rendered.starts_with("Construction Estimate\nFrom: Oak & Iron Builders\n"));
    assert!(rendered.contains("      Eastbrook, VT 05001\n      (555) 010-4477\n"));
    assert!(rendered.contains("For: Dana Reyes\nProject: Kitchen Remodel\n"));
    assert!(rendered.contains("Estimate Date: June 2, 2025\n"));
    assert!(!rendered.contains("Deck Staining"));
    assert!(rendered.trim_end().ends_with("2843.11"));
}

#[test]
fn test_overrides_take_precedence_over_file() {
    let catalog = CatalogLoader::load_from_file(&fixture("catalog.csv")).unwrap();
    let config = AppConfig::load(&fixture("pricing.toml"))
        .unwrap()
        .with_overrides(Some(dec!(0)), Some(dec!(0)));

    let store = app::build_estimate(&catalog, &selections(&["Roof Repair=2"]));
    let summary = store.summary(&config.pricing, None);

    assert_eq!(summary.grand_total, dec!(700.00));
}

#[test]
fn test_search_fixture() {
    let catalog = CatalogLoader::load_from_file(&fixture("catalog.csv")).unwrap();

    let rendered = app::render_search(&catalog, "drywall");

    assert!(rendered.starts_with("Interior\n"));
    assert!(rendered.ends_with("2 service(s) found"));
}
