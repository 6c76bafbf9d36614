//! Upstream document sources
//!
//! [`NewsSource`] is the seam between the crawl pipeline and everything that
//! touches the network: the feed-list parser, the feed parser, and the
//! article tokenizer. The pipeline only ever sees entries, articles, and
//! token lists; tests swap in instrumented stand-ins.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::error::{ArticleError, FeedError, FetchError, ListError};
use crate::models::{Article, FeedEntry};
use crate::parser;

/// The three upstream operations a crawl needs.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Download and parse the root feed list. Failure is fatal to the crawl.
    async fn feed_list(&self, url: &str) -> Result<Vec<FeedEntry>, ListError>;

    /// Download and parse one feed into its articles, in feed order.
    async fn feed(&self, url: &str) -> Result<Vec<Article>, FeedError>;

    /// Download one article and tokenize its body. Tokens come back
    /// lower-cased and non-empty, in document order, duplicates kept.
    async fn tokens(&self, url: &str) -> Result<Vec<String>, ArticleError>;
}

/// Live HTTP implementation backed by reqwest, the `rss` parser, and the
/// HTML tokenizer.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Build an HTTP source from the configured timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the HTTP client cannot be created.
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(&config.http.user_agent)
            .timeout(config.request_timeout())
            .gzip(true)
            .build()?;
        Ok(Self { client })
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl NewsSource for HttpSource {
    async fn feed_list(&self, url: &str) -> Result<Vec<FeedEntry>, ListError> {
        let body = self.get_bytes(url).await?;
        Ok(parser::parse_feed_list(&body)?)
    }

    async fn feed(&self, url: &str) -> Result<Vec<Article>, FeedError> {
        let body = self.get_bytes(url).await?;
        Ok(parser::parse_feed(&body, url)?)
    }

    async fn tokens(&self, url: &str) -> Result<Vec<String>, ArticleError> {
        let body = self.get_text(url).await?;
        Ok(parser::tokens::tokenize_html(&body))
    }
}
