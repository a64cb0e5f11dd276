//! # OCF Ledger
//!
//! Deprecation report over a corpus of interchange objects.
//!
//! ```text
//! ocf-ledger <corpus.json>
//! ```
//!
//! The corpus is a JSON array of `{"entityType", "data", "id"?}` items. The
//! report is printed to stdout as JSON.

use anyhow::{Context, bail};
use ocf_ledger::application::normalization::{
    BatchItem, DeprecationRegistry, NormalizationEngine, TracingSink,
};
use ocf_ledger::config::{AppConfig, LogConfig, LogFormat};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;
    init_tracing(&config.log);

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: ocf-ledger <corpus.json>");
    };

    info!(service = %config.service_name, corpus = %path, "Checking corpus for deprecated fields");

    let content = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let items: Vec<BatchItem> =
        serde_json::from_str(&content).with_context(|| format!("parsing {path}"))?;

    let engine = NormalizationEngine::new(
        Arc::new(DeprecationRegistry::with_defaults()),
        config.normalization_options(),
        Arc::new(TracingSink),
    );
    let report = engine.check_batch(&items, config.batch_options());

    info!(
        total = report.summary.total_items,
        affected = report.summary.items_with_deprecated_fields,
        "Corpus checked"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
