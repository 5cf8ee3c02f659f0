//! # Trend Pipeline
//! Fetchers → fan-in barrier → normalize → dedup → cluster → rank.
//!
//! The one operation callers need is [`fetch_and_cluster_trends`]. It never fails:
//! an empty list means "no data", and what to show instead is the caller's call.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cluster::{ClusterParams, ClusteredTopic, TrendClusterer};
use crate::config::TrendsConfig;
use crate::ingest::{self, providers, types::RawTrend};

/// Serialization envelope for downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendsResponse {
    /// UTC day of the run, `YYYY-MM-DD`.
    pub date: String,
    pub topics: Vec<ClusteredTopic>,
}

impl TrendsResponse {
    pub fn today(topics: Vec<ClusteredTopic>) -> Self {
        Self {
            date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            topics,
        }
    }
}

impl From<&TrendsConfig> for ClusterParams {
    fn from(cfg: &TrendsConfig) -> Self {
        Self {
            similarity_threshold: cfg.similarity_threshold,
            top_n: cfg.top_n,
        }
    }
}

/// Post-barrier stages over an already materialized pool.
pub fn cluster_pool(pool: Vec<RawTrend>, params: &ClusterParams) -> Vec<ClusteredTopic> {
    TrendClusterer::new(*params).cluster(pool)
}

/// Fetch from every enabled source, then cluster and rank. Returns at most `top_n` topics.
///
/// `client` is shared by the network sources; build it with
/// [`providers::http_client`] so the configured timeout and User-Agent apply.
pub async fn fetch_and_cluster_trends(
    cfg: &TrendsConfig,
    client: reqwest::Client,
) -> Vec<ClusteredTopic> {
    let sources = providers::build_sources(cfg, client);
    let pool = ingest::fetch_all(&sources).await;
    info!(raw = pool.len(), "raw trend pool ready");

    let topics = cluster_pool(pool, &ClusterParams::from(cfg));
    info!(topics = topics.len(), "clustered into topics");
    topics
}
