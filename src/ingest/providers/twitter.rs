// src/ingest/providers/twitter.rs
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::ingest::types::{RawTrend, SourceKind, TrendSource};
use crate::ingest::{title_hash, HashStyle};

/// Upstream caps a location's list; we take at most this many.
const MAX_TRENDS: usize = 50;

#[derive(Debug, Deserialize)]
struct Place {
    trends: Option<Vec<Trend>>,
}
#[derive(Debug, Deserialize)]
struct Trend {
    name: Option<String>,
    url: Option<String>,
}

/// Authenticated trends API. Only constructed when a credential is configured.
pub struct TwitterProvider {
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http {
        url: String,
        api_key: String,
        client: reqwest::Client,
    },
}

impl TwitterProvider {
    pub fn from_fixture_str(s: &str) -> Self {
        Self {
            mode: Mode::Fixture(s.to_string()),
        }
    }

    pub fn from_url(
        url: impl Into<String>,
        api_key: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            mode: Mode::Http {
                url: url.into(),
                api_key: api_key.into(),
                client,
            },
        }
    }

    fn parse_items_from_str(s: &str) -> Result<Vec<RawTrend>> {
        let places: Vec<Place> = serde_json::from_str(s).context("parsing twitter trends json")?;
        let trends = places
            .into_iter()
            .next()
            .and_then(|p| p.trends)
            .ok_or_else(|| anyhow!("invalid twitter payload: missing [0].trends"))?;

        let out = trends
            .into_iter()
            .take(MAX_TRENDS)
            .filter_map(|t| {
                let name = t.name.filter(|n| !n.is_empty())?;
                Some((name, t.url))
            })
            .enumerate()
            .map(|(i, (name, url))| RawTrend {
                source: SourceKind::Twitter.to_string(),
                rank: i as u32 + 1,
                hash: title_hash(&name, HashStyle::WhitespaceAndHashtags),
                title: name,
                url,
            })
            .collect();
        Ok(out)
    }
}

#[async_trait]
impl TrendSource for TwitterProvider {
    fn name(&self) -> &'static str {
        SourceKind::Twitter.as_str()
    }

    async fn fetch_raw(&self) -> Result<Vec<RawTrend>> {
        match &self.mode {
            Mode::Fixture(s) => Self::parse_items_from_str(s),
            Mode::Http {
                url,
                api_key,
                client,
            } => {
                let body = client
                    .get(url.as_str())
                    .bearer_auth(api_key)
                    .send()
                    .await
                    .context("twitter http get()")?
                    .error_for_status()
                    .context("twitter http status")?
                    .text()
                    .await
                    .context("twitter http .text()")?;
                Self::parse_items_from_str(&body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_before_filtering_nameless() {
        let mut trends: Vec<String> = (0..60).map(|i| format!(r##"{{"name":"#T{i}"}}"##)).collect();
        trends[0] = r#"{"url":"https://x.test/none"}"#.to_string();
        let json = format!(r#"[{{"trends":[{}]}}]"#, trends.join(","));

        let out = TwitterProvider::parse_items_from_str(&json).unwrap();
        assert_eq!(out.len(), 49);
        assert_eq!(out[0].title, "#T1");
        assert_eq!(out[0].rank, 1);
        assert_eq!(out[0].hash, "t1");
    }

    #[test]
    fn whitespace_names_are_kept_empty_names_dropped() {
        let json = r##"[{"trends":[{"name":""},{"name":" "},{"name":"#Rust"}]}]"##;
        let out = TwitterProvider::parse_items_from_str(json).unwrap();
        let titles: Vec<&str> = out.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec![" ", "#Rust"]);
        assert_eq!(out[1].rank, 2);
    }

    #[test]
    fn empty_array_is_an_error() {
        assert!(TwitterProvider::parse_items_from_str("[]").is_err());
        assert!(TwitterProvider::parse_items_from_str(r#"[{"as_of":"now"}]"#).is_err());
    }
}
