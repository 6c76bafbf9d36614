//! newsreel - concurrent RSS news aggregator
//!
//! Downloads a feed list, every feed it names, and every article those feeds
//! reference, then builds a reverse index from word tokens to the articles
//! containing them. A small interactive prompt answers search queries against
//! the finished index.
//!
//! # Architecture
//!
//! - [`config`] - Crawl budgets and HTTP settings
//! - [`crawler`] - The concurrent fetch pipeline: dedup, admission, mirrors
//! - [`parser`] - Feed parsing and the HTML tokenizer
//! - [`source`] - The upstream document source abstraction
//! - [`index`] - The frozen token -> article reverse index
//! - [`query`] - Interactive search prompt
//!
//! # Example
//!
//! ```no_run
//! use newsreel::config::Config;
//! use newsreel::crawler::Crawler;
//! use newsreel::source::HttpSource;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let source = Arc::new(HttpSource::new(&config)?);
//!     let crawler = Crawler::new(source, &config);
//!     let index = crawler.crawl("https://example.com/feeds.xml").await?;
//!     newsreel::query::run(&index)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crawler;
pub mod error;
pub mod index;
pub mod models;
pub mod parser;
pub mod query;
pub mod source;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::crawler::Crawler;
    pub use crate::error::{ArticleError, FeedError, FetchError, ListError};
    pub use crate::index::Index;
    pub use crate::models::{Article, FeedEntry};
    pub use crate::source::{HttpSource, NewsSource};
}
