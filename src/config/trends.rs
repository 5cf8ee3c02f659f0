// src/config/trends.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf};

use crate::cluster::{DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_N};

pub const ENV_TRENDS_CONFIG_PATH: &str = "TRENDS_CONFIG_PATH";
pub const ENV_TWITTER_API_KEY: &str = "TWITTER_API_KEY";
pub const ENV_INCLUDE_INSTAGRAM: &str = "TRENDS_INCLUDE_INSTAGRAM";

pub const DEFAULT_REDDIT_URL: &str = "https://www.reddit.com/r/all/hot.json?limit=50";
pub const DEFAULT_TWITTER_URL: &str = "https://api.twitter.com/2/trends/place.json?id=1";
pub const DEFAULT_USER_AGENT: &str = "trend-aggregator/0.1";

fn default_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}
fn default_top_n() -> usize {
    DEFAULT_TOP_N
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_reddit_url() -> String {
    DEFAULT_REDDIT_URL.to_string()
}
fn default_twitter_url() -> String {
    DEFAULT_TWITTER_URL.to_string()
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendsConfig {
    /// Bearer credential for the trends API. "ENV" means: read $TWITTER_API_KEY.
    /// Absent or blank disables the source.
    #[serde(default)]
    pub twitter_api_key: Option<String>,
    #[serde(default)]
    pub include_instagram: bool,
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f64,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Per-request timeout of the shared HTTP client.
    #[serde(default = "default_timeout_secs")]
    pub http_timeout_secs: u64,
    #[serde(default = "default_reddit_url")]
    pub reddit_url: String,
    #[serde(default = "default_twitter_url")]
    pub twitter_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            twitter_api_key: None,
            include_instagram: false,
            similarity_threshold: default_threshold(),
            top_n: default_top_n(),
            http_timeout_secs: default_timeout_secs(),
            reddit_url: default_reddit_url(),
            twitter_url: default_twitter_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl TrendsConfig {
    /// Load from an explicit path. Supports TOML or JSON formats.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading trends config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let cfg = parse_config(&content, ext.as_str())
            .with_context(|| format!("parsing trends config {}", path.display()))?;
        Ok(cfg.finish())
    }

    /// Load using env var + fallbacks:
    /// 1) $TRENDS_CONFIG_PATH
    /// 2) config/trends.toml
    /// 3) config/trends.json
    /// 4) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = env::var(ENV_TRENDS_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            } else {
                return Err(anyhow!("TRENDS_CONFIG_PATH points to non-existent path"));
            }
        }
        let toml_p = PathBuf::from("config/trends.toml");
        if toml_p.exists() {
            return Self::load_from(&toml_p);
        }
        let json_p = PathBuf::from("config/trends.json");
        if json_p.exists() {
            return Self::load_from(&json_p);
        }
        Ok(Self::default().finish())
    }

    /// Credential for the authenticated source, if one is usable.
    pub fn twitter_credential(&self) -> Option<&str> {
        self.twitter_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Resolve env indirections/overrides and sanitize numeric knobs.
    fn finish(mut self) -> Self {
        if let Ok(k) = env::var(ENV_TWITTER_API_KEY) {
            if !k.trim().is_empty() {
                self.twitter_api_key = Some(k);
            }
        }
        // "ENV" left unresolved means the variable is missing: the source stays off.
        if self
            .twitter_api_key
            .as_deref()
            .is_some_and(|k| k.trim().eq_ignore_ascii_case("env"))
        {
            self.twitter_api_key = None;
        }

        if let Ok(v) = env::var(ENV_INCLUDE_INSTAGRAM) {
            if let Some(b) = parse_bool(&v) {
                self.include_instagram = b;
            }
        }

        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            self.similarity_threshold = default_threshold();
        }
        if self.top_n == 0 {
            self.top_n = default_top_n();
        }
        if self.http_timeout_secs == 0 {
            self.http_timeout_secs = default_timeout_secs();
        }
        // Must be a legal header value or the shared client cannot be built.
        if reqwest::header::HeaderValue::from_str(&self.user_agent).is_err() {
            tracing::warn!(
                user_agent = %self.user_agent.escape_debug(),
                "invalid user_agent, using default"
            );
            self.user_agent = default_user_agent();
        }
        self
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_config(s: &str, hint_ext: &str) -> Result<TrendsConfig> {
    if hint_ext == "json" {
        return serde_json::from_str(s).map_err(Into::into);
    }
    // Try TOML first, then JSON.
    match toml::from_str::<TrendsConfig>(s) {
        Ok(v) => Ok(v),
        Err(toml_err) => serde_json::from_str(s)
            .map_err(|_| anyhow!("unsupported trends config format: {toml_err}")),
    }
}
