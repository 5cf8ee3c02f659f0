// src/cluster/mod.rs
//! Post-fetch stages: normalize → dedup → cluster → rank.
//! Pure and synchronous; everything here runs after the fetch barrier.

pub mod dedup;
pub mod normalize;
pub mod rank;
pub mod similarity;

use metrics::{counter, gauge};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ingest::types::RawTrend;

pub use dedup::dedup_by_hash;
pub use normalize::normalize_titles;
pub use rank::score_and_rank;
pub use similarity::{jaccard_sets, jaccard_similarity, token_set, tokenize};

/// Titles must score strictly above this to join a cluster.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;
/// Maximum number of topics a run returns.
pub const DEFAULT_TOP_N: usize = 20;

/// A set of raw trends judged to be the same topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusteredTopic {
    /// Unique within one run only.
    pub topic_id: String,
    /// Title of the seed member.
    pub label: String,
    /// Member count, set during ranking.
    pub score: usize,
    /// Member titles in discovery order; first is the label.
    pub samples: Vec<String>,
    /// Distinct contributing sources in discovery order.
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterParams {
    pub similarity_threshold: f64,
    pub top_n: usize,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            top_n: DEFAULT_TOP_N,
        }
    }
}

pub struct TrendClusterer {
    params: ClusterParams,
    run_stamp: i64,
}

impl TrendClusterer {
    /// Clusterer stamped with the current time (unix millis) for topic ids.
    pub fn new(params: ClusterParams) -> Self {
        Self::with_run_stamp(params, chrono::Utc::now().timestamp_millis())
    }

    pub fn with_run_stamp(params: ClusterParams, run_stamp: i64) -> Self {
        Self { params, run_stamp }
    }

    pub fn params(&self) -> &ClusterParams {
        &self.params
    }

    /// Full post-fetch pipeline. Empty input yields an empty list.
    pub fn cluster(&self, trends: Vec<RawTrend>) -> Vec<ClusteredTopic> {
        crate::ingest::ensure_metrics_described();
        let raw = trends.len();

        let normalized = normalize_titles(trends);
        let (unique, dropped) = dedup_by_hash(normalized);
        counter!("trends_dedup_dropped_total").increment(dropped as u64);

        let clusters = self.cluster_by_similarity(&unique);
        let formed = clusters.len();
        let ranked = score_and_rank(clusters, self.params.top_n);
        gauge!("trends_clusters_last_run").set(ranked.len() as f64);

        debug!(
            raw,
            unique = unique.len(),
            dropped,
            clusters = formed,
            returned = ranked.len(),
            "clustered trends"
        );
        ranked
    }

    /// Greedy single pass: each unused item seeds a cluster and absorbs every later
    /// unused item similar enough to the seed. Members are never reassigned.
    pub fn cluster_by_similarity(&self, trends: &[RawTrend]) -> Vec<ClusteredTopic> {
        let sets: Vec<_> = trends.iter().map(|t| token_set(&t.title)).collect();
        let mut used = vec![false; trends.len()];
        let mut clusters = Vec::new();

        for i in 0..trends.len() {
            if used[i] {
                continue;
            }
            let seed = &trends[i];
            let mut topic = ClusteredTopic {
                topic_id: format!("topic_{}_{}", i, self.run_stamp),
                label: seed.title.clone(),
                score: 0,
                samples: vec![seed.title.clone()],
                sources: vec![seed.source.clone()],
            };

            for j in (i + 1)..trends.len() {
                if used[j] {
                    continue;
                }
                let sim = jaccard_sets(&sets[i], &sets[j]);
                if sim > self.params.similarity_threshold {
                    topic.samples.push(trends[j].title.clone());
                    if !topic.sources.contains(&trends[j].source) {
                        topic.sources.push(trends[j].source.clone());
                    }
                    used[j] = true;
                }
            }

            used[i] = true;
            if topic.samples.len() > 1 {
                debug!(
                    label_id = %anon_id(&topic.label),
                    members = topic.samples.len(),
                    "merged near-duplicates"
                );
            }
            clusters.push(topic);
        }

        clusters
    }
}

/// Short stable digest for log correlation without logging full titles.
pub(crate) fn anon_id(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
