//! Inventory Enricher
//!
//! Reads a YAML inventory of vendor sources and targets, enriches every
//! target through the matching southbound client and writes a JSON report
//! of enterprise records, edge records and failures to stdout.
//!
//! Configuration:
//! - `ENRICHER_CONFIG`: path of the YAML file (default `enricher.yaml`)
//! - `ENRICHER_CONCURRENCY`: in-flight calls per source (default 4)
//! - `RUST_LOG`: log filter (default `info`); logs go to stderr

mod config;
mod error;
mod report;
mod sources;

use anyhow::{Context, Result};
use config::{DEFAULT_CONCURRENCY, DEFAULT_CONFIG_PATH, EnricherConfig};
use enrichment::enrich_inventory;
use report::Report;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Inventory Enricher");

    // Load configuration from environment variables
    let config_path = PathBuf::from(
        env::var("ENRICHER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string()),
    );
    let concurrency = match env::var("ENRICHER_CONCURRENCY") {
        Ok(value) => value
            .parse::<usize>()
            .with_context(|| format!("ENRICHER_CONCURRENCY must be a number, got {value:?}"))?,
        Err(_) => DEFAULT_CONCURRENCY,
    };

    info!("Configuration:");
    info!("  Config file: {}", config_path.display());
    info!("  Concurrency: {}", concurrency);

    let config = EnricherConfig::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    // Build every client before making any call
    let lookup = |var: &str| env::var(var).ok();
    let mut built = Vec::with_capacity(config.sources.len());
    for source in &config.sources {
        built.push((source, sources::build_source(source, &lookup)?));
    }

    let mut report = Report::default();
    for (source, enricher) in &built {
        if source.targets.is_empty() {
            warn!("Source {} has no targets", source.name());
            continue;
        }
        let outcomes = enrich_inventory(enricher.as_enricher(), &source.targets, concurrency).await;
        report.record(source.name(), source.vendor, outcomes);
        enricher.close().await;
    }

    info!(
        "Enriched {} enterprises and {} edges, {} failures",
        report.enterprises.len(),
        report.edges.len(),
        report.failures.len()
    );

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report).context("Failed to write report")?;
    writeln!(stdout)?;
    Ok(())
}
