// src/cluster/dedup.rs
use std::collections::HashSet;

use crate::ingest::types::RawTrend;

/// Keep the first occurrence of each `hash`, drop later ones.
/// Returns (kept, dropped_count).
pub fn dedup_by_hash(trends: Vec<RawTrend>) -> (Vec<RawTrend>, usize) {
    let mut seen: HashSet<String> = HashSet::with_capacity(trends.len());
    let mut keep = Vec::with_capacity(trends.len());
    let mut dropped = 0usize;

    for t in trends {
        if !seen.insert(t.hash.clone()) {
            dropped += 1;
            continue;
        }
        keep.push(t);
    }

    (keep, dropped)
}
