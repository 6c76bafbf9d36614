//! The concurrent fetch-and-index pipeline
//!
//! One crawl fans out three levels deep: the feed list names feeds, each
//! feed names articles, and every article body is tokenized. Three budgets
//! bound the fan-out:
//!
//! - feed slots cap feeds that currently have work in flight,
//! - article slots cap article downloads across the whole crawl,
//! - per-host gates cap article downloads against any one server.
//!
//! Workers own their budget permit, so every exit path - early dedup skip,
//! download failure, normal completion - releases it. The coordinator joins
//! all workers before folding the mirror resolver into the final index, so
//! queries never see partial state.

pub mod admission;
pub mod dedup;
pub mod host;
pub mod resolver;

use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::config::Config;
use crate::error::ListError;
use crate::index::Index;
use crate::models::{Article, FeedEntry};
use crate::source::NewsSource;

use admission::HostGates;
use dedup::SeenUrls;
use resolver::MirrorResolver;

/// Crawl coordinator. Owns the budgets and the shared crawl state; one
/// instance performs one crawl.
pub struct Crawler {
    feed_slots: Arc<Semaphore>,
    state: Arc<CrawlState>,
}

/// State shared by every worker of a crawl.
struct CrawlState {
    source: Arc<dyn NewsSource>,
    article_slots: Arc<Semaphore>,
    seen_feeds: SeenUrls,
    seen_articles: SeenUrls,
    gates: HostGates,
    resolver: MirrorResolver,
}

impl Crawler {
    pub fn new(source: Arc<dyn NewsSource>, config: &Config) -> Self {
        Self {
            feed_slots: Arc::new(Semaphore::new(config.crawl.feed_slots)),
            state: Arc::new(CrawlState {
                source,
                article_slots: Arc::new(Semaphore::new(config.crawl.article_slots)),
                seen_feeds: SeenUrls::new(),
                seen_articles: SeenUrls::new(),
                gates: HostGates::new(config.crawl.per_host_slots),
                resolver: MirrorResolver::new(),
            }),
        }
    }

    /// Run the whole pipeline: download everything the feed list reaches,
    /// wait for the fan-out to drain, and fold the survivors into a frozen
    /// [`Index`].
    ///
    /// # Errors
    ///
    /// Only a feed list that cannot be obtained or parsed is fatal; feed and
    /// article failures are logged and skipped.
    pub async fn crawl(&self, root_url: &str) -> Result<Index, ListError> {
        let entries = self.state.source.feed_list(root_url).await?;
        tracing::info!(url = %root_url, feeds = entries.len(), "feed list downloaded");

        let mut workers = Vec::with_capacity(entries.len());
        for entry in entries {
            // Blocks here, not in the worker: at most `feed_slots` feeds may
            // have work in flight at once.
            let Ok(slot) = Arc::clone(&self.feed_slots).acquire_owned().await else {
                break; // semaphore closed; no further work is possible
            };
            let state = Arc::clone(&self.state);
            workers.push(tokio::spawn(async move {
                let _slot = slot; // released when this worker's subtree is done
                feed_worker(state, entry).await;
            }));
        }

        for worker in join_all(workers).await {
            if let Err(err) = worker {
                tracing::error!(error = %err, "feed worker panicked");
            }
        }
        tracing::info!("feed list download complete");

        let index = Index::build(self.state.resolver.take_classes());
        tracing::info!(tokens = index.len(), "index built");
        Ok(index)
    }
}

/// Process one feed: claim its URL, download it, and fan out over its
/// articles. Joins its article workers before returning, so the feed slot
/// caps feeds with articles still in flight rather than raw downloads.
async fn feed_worker(state: Arc<CrawlState>, entry: FeedEntry) {
    if !state.seen_feeds.claim(&entry.url) {
        tracing::debug!(feed = %entry.url, "feed skipped");
        return;
    }

    tracing::debug!(feed = %entry.url, title = %entry.title, "feed download beginning");
    let articles = match state.source.feed(&entry.url).await {
        Ok(articles) => articles,
        Err(err) => {
            tracing::warn!(feed = %entry.url, error = %err, "feed download failure");
            return;
        }
    };

    let mut workers = Vec::with_capacity(articles.len());
    for article in articles {
        let Ok(slot) = Arc::clone(&state.article_slots).acquire_owned().await else {
            break;
        };
        let state = Arc::clone(&state);
        workers.push(tokio::spawn(async move {
            let _slot = slot;
            article_worker(state, article).await;
        }));
    }

    for worker in join_all(workers).await {
        if let Err(err) = worker {
            tracing::error!(error = %err, "article worker panicked");
        }
    }
    tracing::debug!(feed = %entry.url, "feed download end");
}

/// Process one article: claim its URL, pass the host gate, tokenize, and
/// fold the result into the mirror resolver.
async fn article_worker(state: Arc<CrawlState>, article: Article) {
    if !state.seen_articles.claim(&article.url) {
        tracing::debug!(article = %article.url, "article skipped");
        return;
    }

    let server = host::host_of(&article.url);
    // The gate comes out from under the map lock before we await on it.
    let gate = state.gates.gate(&server);
    let Ok(admitted) = gate.acquire_owned().await else {
        return;
    };

    tracing::debug!(article = %article.url, title = %article.title, "article download beginning");
    let mut tokens = match state.source.tokens(&article.url).await {
        Ok(tokens) => tokens,
        Err(err) => {
            tracing::warn!(article = %article.url, error = %err, "article download failure");
            return;
        }
    };
    // Tokens are in memory; the host slot is free from here on.
    drop(admitted);

    tokens.sort();
    state.resolver.record(&server, article, tokens);
}
