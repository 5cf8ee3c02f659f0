//! Trend aggregation batch job — binary entrypoint.
//! Loads config, runs one fetch/cluster/rank pass and prints the result as JSON.
//!
//! Usage: `trend-aggregator [CONFIG_PATH]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use trend_aggregator::ingest::providers::http_client;
use trend_aggregator::{fetch_and_cluster_trends, metrics::Metrics, TrendsConfig, TrendsResponse};

const ENV_LOG_JSON: &str = "TRENDS_LOG_JSON";
const ENV_METRICS_FILE: &str = "TRENDS_METRICS_FILE";

/// Logs go to stderr so stdout stays pure JSON.
/// TRENDS_LOG_JSON=1 switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("trend_aggregator=info,warn"));

    let json = std::env::var(ENV_LOG_JSON)
        .ok()
        .is_some_and(|v| v == "1");

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let metrics_file = std::env::var(ENV_METRICS_FILE).ok().map(PathBuf::from);
    let metrics = match &metrics_file {
        Some(_) => Some(Metrics::init()?),
        None => None,
    };

    let cfg = match std::env::args().nth(1) {
        Some(p) => TrendsConfig::load_from(&PathBuf::from(p))?,
        None => TrendsConfig::load_default()?,
    };
    tracing::info!(
        twitter = cfg.twitter_credential().is_some(),
        instagram = cfg.include_instagram,
        top_n = cfg.top_n,
        threshold = cfg.similarity_threshold,
        "trends config loaded"
    );

    let client = http_client(&cfg)?;
    let topics = fetch_and_cluster_trends(&cfg, client).await;
    if topics.is_empty() {
        tracing::warn!("no source returned data");
    }

    let out = serde_json::to_string_pretty(&TrendsResponse::today(topics))
        .context("serializing trends response")?;
    println!("{out}");

    if let (Some(m), Some(path)) = (metrics, metrics_file) {
        m.write_to(&path)?;
    }
    Ok(())
}
