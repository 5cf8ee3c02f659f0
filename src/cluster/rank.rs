// src/cluster/rank.rs
use super::ClusteredTopic;

/// Score = member count; sort descending (stable, ties keep discovery order); keep `top_n`.
pub fn score_and_rank(mut topics: Vec<ClusteredTopic>, top_n: usize) -> Vec<ClusteredTopic> {
    for t in topics.iter_mut() {
        t.score = t.samples.len();
    }
    // `sort_by` is stable.
    topics.sort_by(|a, b| b.score.cmp(&a.score));
    topics.truncate(top_n);
    topics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: &str, n: usize) -> ClusteredTopic {
        ClusteredTopic {
            topic_id: id.into(),
            label: id.into(),
            score: 0,
            samples: vec![id.to_string(); n],
            sources: vec!["reddit".into()],
        }
    }

    #[test]
    fn sorts_desc_and_keeps_tie_order() {
        let out = score_and_rank(vec![topic("a", 1), topic("b", 3), topic("c", 1), topic("d", 2)], 20);
        let ids: Vec<_> = out.iter().map(|t| t.topic_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
        assert!(out.iter().all(|t| t.score == t.samples.len()));
    }

    #[test]
    fn truncates_to_cap() {
        let many: Vec<_> = (0..25).map(|i| topic(&i.to_string(), 1)).collect();
        assert_eq!(score_and_rank(many, 20).len(), 20);
    }
}
