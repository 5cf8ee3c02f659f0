// src/ingest/providers/mod.rs
pub mod instagram;
pub mod reddit;
pub mod twitter;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::TrendsConfig;
use crate::ingest::types::TrendSource;

pub use instagram::InstagramProvider;
pub use reddit::RedditProvider;
pub use twitter::TwitterProvider;

/// Shared client for all network sources of one run.
pub fn http_client(cfg: &TrendsConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.http_timeout_secs))
        .user_agent(cfg.user_agent.clone())
        .build()
        .context("building http client")
}

/// Enabled source set for a run, in invocation order.
///
/// The hot-list source is always present; the trends API needs a credential and
/// the hashtag list needs `include_instagram`.
pub fn build_sources(cfg: &TrendsConfig, client: reqwest::Client) -> Vec<Arc<dyn TrendSource>> {
    let mut sources: Vec<Arc<dyn TrendSource>> = vec![Arc::new(RedditProvider::from_url(
        cfg.reddit_url.clone(),
        client.clone(),
    ))];

    match cfg.twitter_credential() {
        Some(key) => sources.push(Arc::new(TwitterProvider::from_url(
            cfg.twitter_url.clone(),
            key,
            client,
        ))),
        None => tracing::debug!("twitter credential absent, source skipped"),
    }

    if cfg.include_instagram {
        sources.push(Arc::new(InstagramProvider::new()));
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(sources: &[Arc<dyn TrendSource>]) -> Vec<&'static str> {
        sources.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn primary_only_by_default() {
        let cfg = TrendsConfig::default();
        let client = http_client(&cfg).unwrap();
        assert_eq!(names(&build_sources(&cfg, client)), vec!["reddit"]);
    }

    #[test]
    fn optional_sources_follow_config() {
        let cfg = TrendsConfig {
            twitter_api_key: Some("token".into()),
            include_instagram: true,
            ..TrendsConfig::default()
        };
        let client = http_client(&cfg).unwrap();
        assert_eq!(
            names(&build_sources(&cfg, client)),
            vec!["reddit", "twitter", "instagram"]
        );
    }
}
