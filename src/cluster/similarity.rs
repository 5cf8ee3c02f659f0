// src/cluster/similarity.rs
//! Bag-of-tokens title similarity.

use std::collections::HashSet;

/// Sentence punctuation treated as a token boundary, Latin and CJK variants.
const SPLIT_PUNCT: &[char] = &[',', '，', '、', '。', '！', '？', '.', '!', '?'];

/// Lower-case, split on whitespace and sentence punctuation, drop empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || SPLIT_PUNCT.contains(&c))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Deduplicated tokens of `text`; compute once per title and reuse with [`jaccard_sets`].
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

/// |A ∩ B| / |A ∪ B| over precomputed token sets. Empty union scores 0.0.
pub fn jaccard_sets(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let inter = a.intersection(b).count();
    inter as f64 / union as f64
}

/// |A ∩ B| / |A ∪ B| over token sets. Two token-less titles score 0.0.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    jaccard_sets(&token_set(a), &token_set(b))
}
