// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod cluster;
pub mod config;
pub mod ingest;
pub mod metrics;
pub mod pipeline;

// ---- Re-exports for stable public API ----
pub use crate::cluster::{ClusterParams, ClusteredTopic, TrendClusterer};
pub use crate::config::TrendsConfig;
pub use crate::ingest::types::{RawTrend, SourceKind, TrendSource};
pub use crate::pipeline::{fetch_and_cluster_trends, TrendsResponse};
