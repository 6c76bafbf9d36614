//! Error types for the newsreel crawler
//!
//! Failures come in three grades: a bad feed list is fatal to the whole
//! crawl, while a bad feed or a bad article only costs that one item.

use thiserror::Error;

/// Transport-level failure fetching a single document
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),
}

/// Fatal: the root feed list could not be obtained or parsed
#[derive(Error, Debug)]
pub enum ListError {
    /// Feed list download failed
    #[error("feed list fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Feed list is not a parseable feed document
    #[error("feed list parse failed: {0}")]
    Parse(#[from] rss::Error),
}

/// Recoverable: one feed could not be obtained or parsed
#[derive(Error, Debug)]
pub enum FeedError {
    /// Feed download failed
    #[error("feed fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Feed is not a parseable feed document
    #[error("feed parse failed: {0}")]
    Parse(#[from] rss::Error),
}

/// Recoverable: one article could not be obtained or tokenized
#[derive(Error, Debug)]
pub enum ArticleError {
    /// Article download failed
    #[error("article fetch failed: {0}")]
    Fetch(#[from] FetchError),
}
