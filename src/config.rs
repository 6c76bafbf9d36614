//! Configuration for the newsreel crawler
//!
//! Holds the crawl concurrency budgets and HTTP client settings. Defaults
//! carry the standard budgets; individual values can be overridden through
//! `NEWSREEL_*` environment variables.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Concurrency budgets for the crawl
    pub crawl: CrawlConfig,

    /// HTTP client configuration
    pub http: HttpConfig,
}

/// Concurrency budgets enforced by the crawl coordinator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Simultaneous in-flight feed downloads
    pub feed_slots: usize,

    /// Simultaneous in-flight article downloads across all feeds
    pub article_slots: usize,

    /// Simultaneous article downloads against any single host
    pub per_host_slots: usize,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent string
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawl: CrawlConfig {
                feed_slots: 6,
                article_slots: 24,
                per_host_slots: 8,
            },
            http: HttpConfig {
                timeout_secs: 30,
                user_agent: concat!("newsreel/", env!("CARGO_PKG_VERSION")).to_string(),
            },
        }
    }
}

impl Config {
    /// Build a configuration from defaults plus `NEWSREEL_*` env overrides
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(n) = env_usize("NEWSREEL_FEED_SLOTS") {
            config.crawl.feed_slots = n;
        }
        if let Some(n) = env_usize("NEWSREEL_ARTICLE_SLOTS") {
            config.crawl.article_slots = n;
        }
        if let Some(n) = env_usize("NEWSREEL_PER_HOST_SLOTS") {
            config.crawl.per_host_slots = n;
        }
        if let Some(n) = env_usize("NEWSREEL_TIMEOUT_SECS") {
            config.http.timeout_secs = n as u64;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would stall the crawl
    pub fn validate(&self) -> Result<()> {
        ensure!(self.crawl.feed_slots > 0, "feed_slots must be at least 1");
        ensure!(
            self.crawl.article_slots > 0,
            "article_slots must be at least 1"
        );
        ensure!(
            self.crawl.per_host_slots > 0,
            "per_host_slots must be at least 1"
        );
        ensure!(self.http.timeout_secs > 0, "timeout_secs must be at least 1");
        Ok(())
    }

    /// Request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }
}

fn env_usize(name: &str) -> Option<usize> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
