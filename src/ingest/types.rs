// src/ingest/types.rs
use anyhow::Result;
use metrics::counter;

/// One source's report of one trending item, before dedup/clustering.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct RawTrend {
    pub source: String, // e.g., "reddit", "twitter"
    pub rank: u32,      // 1-based, only meaningful within `source`
    pub title: String,
    pub url: Option<String>,
    pub hash: String, // exact-dedup key, see `ingest::title_hash`
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Reddit,
    Twitter,
    Instagram,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Reddit => "reddit",
            SourceKind::Twitter => "twitter",
            SourceKind::Instagram => "instagram",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait::async_trait]
pub trait TrendSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// One retrieval attempt. Network, status and payload errors surface here.
    async fn fetch_raw(&self) -> Result<Vec<RawTrend>>;

    /// Retrieval with the source failure policy applied: an error is logged and
    /// degrades to an empty contribution, it never reaches the caller.
    async fn fetch(&self) -> Vec<RawTrend> {
        match self.fetch_raw().await {
            Ok(v) => {
                tracing::info!(source = self.name(), count = v.len(), "fetched trends");
                v
            }
            Err(e) => {
                tracing::warn!(error = ?e, source = self.name(), "source fetch failed");
                counter!("trends_source_errors_total", "source" => self.name()).increment(1);
                Vec::new()
            }
        }
    }
}
