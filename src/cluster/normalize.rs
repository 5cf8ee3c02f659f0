// src/cluster/normalize.rs
use crate::ingest::types::RawTrend;

/// Markup/bracket noise removed from titles before dedup and clustering.
pub const NOISE_CHARS: &[char] = &['#', '[', ']', '【', '】'];

/// Strip noise characters and surrounding whitespace from one title.
pub fn clean_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !NOISE_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Order-preserving, total. Only `title` changes; `hash` is left as the source computed it.
pub fn normalize_titles(trends: Vec<RawTrend>) -> Vec<RawTrend> {
    trends
        .into_iter()
        .map(|mut t| {
            t.title = clean_title(&t.title);
            t
        })
        .collect()
}
