// src/ingest/mod.rs
pub mod providers;
pub mod types;

use crate::ingest::types::{RawTrend, TrendSource};
use futures::future::join_all;
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, histogram};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// One-time metrics registration (so series show up in the exposition).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("trends_fetched_total", "Raw trends returned per source.");
        describe_counter!(
            "trends_source_errors_total",
            "Source fetch/parse errors degraded to an empty result."
        );
        describe_counter!(
            "trends_dedup_dropped_total",
            "Raw trends dropped as exact duplicates."
        );
        describe_histogram!("trends_fetch_ms", "Fan-out fetch wall time in milliseconds.");
        describe_gauge!(
            "trends_clusters_last_run",
            "Number of topics returned by the last run."
        );
    });
}

/// How a source derives its exact-dedup key from a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashStyle {
    /// Lower-case, whitespace removed.
    Whitespace,
    /// Lower-case, whitespace and `#` removed.
    WhitespaceAndHashtags,
}

/// Exact-dedup key for a title. Deliberately separate from the cluster tokenizer.
pub fn title_hash(title: &str, style: HashStyle) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| match style {
            HashStyle::Whitespace => !c.is_whitespace(),
            HashStyle::WhitespaceAndHashtags => !c.is_whitespace() && *c != '#',
        })
        .collect()
}

/// Decode HTML entities and collapse whitespace in a title delivered by a JSON API.
pub fn decode_title(s: &str) -> String {
    let out = html_escape::decode_html_entities(s).to_string();

    static RE_WS: OnceCell<regex::Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    re_ws.replace_all(&out, " ").trim().to_string()
}

/// Run every source concurrently and wait for all of them to settle.
///
/// Output is the concatenation in source order, each source in its own rank order.
/// A source that panics is logged and contributes nothing.
pub async fn fetch_all(sources: &[Arc<dyn TrendSource>]) -> Vec<RawTrend> {
    ensure_metrics_described();
    let t0 = std::time::Instant::now();

    let handles = sources.iter().map(|s| {
        let s = Arc::clone(s);
        tokio::spawn(async move { s.fetch().await })
    });
    let settled = join_all(handles).await;

    let mut pool = Vec::new();
    for (source, res) in sources.iter().zip(settled) {
        match res {
            Ok(mut v) => {
                counter!("trends_fetched_total", "source" => source.name())
                    .increment(v.len() as u64);
                pool.append(&mut v);
            }
            Err(e) => {
                tracing::warn!(error = ?e, source = source.name(), "source task aborted");
                counter!("trends_source_errors_total", "source" => source.name()).increment(1);
            }
        }
    }

    let ms = t0.elapsed().as_secs_f64() * 1_000.0;
    histogram!("trends_fetch_ms").record(ms);
    tracing::info!(
        sources = sources.len(),
        raw = pool.len(),
        elapsed_ms = ms,
        "fetched raw trends"
    );

    pool
}
