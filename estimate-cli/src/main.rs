use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use estimate_cli::app::{self, Selection};
use estimate_cli::config::AppConfig;
use estimate_cli::args::{parse_discount, parse_tax_rate};
use estimate_data::CatalogLoader;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Contractor estimate builder.
///
/// Loads a service catalog, adds the selected services to an estimate and
/// prints the priced summary.
#[derive(Debug, Parser)]
#[command(name = "estimator", version, about)]
struct Cli {
    /// CSV file with `description,unit,rate,category` columns.
    #[arg(long)]
    catalog: PathBuf,

    /// Optional TOML file with `[pricing]` and `[header]` tables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tax rate in percent (0 to 100); overrides the config file.
    #[arg(long, value_parser = parse_tax_rate)]
    tax: Option<Decimal>,

    /// Flat discount (not negative); overrides the config file.
    #[arg(long, value_parser = parse_discount)]
    discount: Option<Decimal>,

    /// Service to add, optionally with a quantity: "Roof Repair=3".
    #[arg(long = "add", value_name = "SERVICE[=QTY]")]
    selections: Vec<Selection>,

    /// List catalog services matching this text instead of building an estimate.
    #[arg(long, conflicts_with = "selections")]
    search: Option<String>,

    /// Project title printed on the estimate; overrides the config file.
    #[arg(long)]
    project: Option<String>,

    /// Date printed on the estimate (defaults to today).
    #[arg(long)]
    date: Option<NaiveDate>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let catalog = CatalogLoader::load_from_file(&cli.catalog)
        .with_context(|| format!("Failed to load catalog: {}", cli.catalog.display()))?;

    if let Some(query) = &cli.search {
        println!("{}", app::render_search(&catalog, query));
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => AppConfig::default(),
    }
    .with_overrides(cli.tax, cli.discount)
    .with_project_title(cli.project);
    debug!(?config, "estimate configuration");

    let store = app::build_estimate(&catalog, &cli.selections);
    let prepared_on = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let summary = store
        .summary(&config.pricing, Some(prepared_on))
        .with_header(config.header);

    info!(amount_due = %summary.amount_due(), "estimate ready");
    println!("{summary}");

    Ok(())
}
