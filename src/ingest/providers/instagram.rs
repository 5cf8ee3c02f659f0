// src/ingest/providers/instagram.rs
use anyhow::Result;
use async_trait::async_trait;

use crate::ingest::types::{RawTrend, SourceKind, TrendSource};
use crate::ingest::{title_hash, HashStyle};

/// The official API exposes no trending data; this list stands in for it.
pub const POPULAR_HASHTAGS: &[&str] = &[
    "#instagood",
    "#photooftheday",
    "#fashion",
    "#beautiful",
    "#art",
    "#photography",
    "#travel",
    "#nature",
    "#food",
    "#fitness",
    "#motivation",
    "#lifestyle",
    "#design",
    "#cat",
    "#dog",
];

/// Static fallback source of popular hashtags. Never fails.
#[derive(Debug, Default)]
pub struct InstagramProvider;

impl InstagramProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TrendSource for InstagramProvider {
    fn name(&self) -> &'static str {
        SourceKind::Instagram.as_str()
    }

    async fn fetch_raw(&self) -> Result<Vec<RawTrend>> {
        Ok(POPULAR_HASHTAGS
            .iter()
            .enumerate()
            .map(|(i, tag)| RawTrend {
                source: SourceKind::Instagram.to_string(),
                rank: i as u32 + 1,
                title: (*tag).to_string(),
                url: Some(format!(
                    "https://www.instagram.com/explore/tags/{}/",
                    tag.trim_start_matches('#')
                )),
                hash: title_hash(tag, HashStyle::WhitespaceAndHashtags),
            })
            .collect())
    }
}
