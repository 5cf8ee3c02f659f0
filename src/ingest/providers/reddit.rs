// src/ingest/providers/reddit.rs
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::ingest::types::{RawTrend, SourceKind, TrendSource};
use crate::ingest::{decode_title, title_hash, HashStyle};

#[derive(Debug, Deserialize)]
struct Listing {
    data: Option<ListingData>,
}
#[derive(Debug, Deserialize)]
struct ListingData {
    children: Option<Vec<Child>>,
}
#[derive(Debug, Deserialize)]
struct Child {
    data: Option<Post>,
}
#[derive(Debug, Deserialize)]
struct Post {
    title: Option<String>,
    permalink: Option<String>,
}

/// Public hot-list source. No credential; always part of a run.
pub struct RedditProvider {
    mode: Mode,
}

enum Mode {
    // Owned copy so tests can pass any &str.
    Fixture(String),
    // User-Agent comes from the shared client.
    Http { url: String, client: reqwest::Client },
}

impl RedditProvider {
    pub fn from_fixture_str(s: &str) -> Self {
        Self {
            mode: Mode::Fixture(s.to_string()),
        }
    }

    pub fn from_url(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            mode: Mode::Http {
                url: url.into(),
                client,
            },
        }
    }

    fn parse_items_from_str(s: &str) -> Result<Vec<RawTrend>> {
        let listing: Listing = serde_json::from_str(s).context("parsing reddit listing json")?;
        let children = listing
            .data
            .and_then(|d| d.children)
            .ok_or_else(|| anyhow!("invalid reddit payload: missing data.children"))?;

        // Rank is the child's position in the listing, so skipped posts leave gaps.
        let mut out = Vec::with_capacity(children.len());
        for (i, child) in children.into_iter().enumerate() {
            let Some(post) = child.data else {
                continue;
            };
            let Some(raw_title) = post.title.as_deref().filter(|t| !t.is_empty()) else {
                continue;
            };
            let title = decode_title(raw_title);
            out.push(RawTrend {
                source: SourceKind::Reddit.to_string(),
                rank: i as u32 + 1,
                hash: title_hash(&title, HashStyle::Whitespace),
                url: post
                    .permalink
                    .map(|p| format!("https://reddit.com{p}")),
                title,
            });
        }
        Ok(out)
    }
}

#[async_trait]
impl TrendSource for RedditProvider {
    fn name(&self) -> &'static str {
        SourceKind::Reddit.as_str()
    }

    async fn fetch_raw(&self) -> Result<Vec<RawTrend>> {
        match &self.mode {
            Mode::Fixture(s) => Self::parse_items_from_str(s),
            Mode::Http { url, client } => {
                let body = client
                    .get(url.as_str())
                    .send()
                    .await
                    .context("reddit http get()")?
                    .error_for_status()
                    .context("reddit http status")?
                    .text()
                    .await
                    .context("reddit http .text()")?;
                Self::parse_items_from_str(&body)
            }
        }
    }
}
