//! Feed parsing for the newsreel crawler
//!
//! Both the root feed list and the individual feeds are RSS channels. The
//! feed list's items name feeds (link = feed URL, title = feed title); a
//! feed's items name articles. Document order is preserved in both cases.

pub mod tokens;

use rss::Channel;
use url::Url;

use crate::models::{Article, FeedEntry};

/// Parse the root feed list into its entries, in document order.
///
/// Items without a link are dropped; an item without a title falls back to
/// its URL, since feed titles are only ever logged.
pub fn parse_feed_list(xml: &[u8]) -> Result<Vec<FeedEntry>, rss::Error> {
    let channel = Channel::read_from(xml)?;
    let entries = channel
        .items()
        .iter()
        .filter_map(|item| {
            let url = item.link()?.trim();
            if url.is_empty() {
                return None;
            }
            let title = item.title().map(str::trim).filter(|t| !t.is_empty());
            Some(FeedEntry::new(url, title.unwrap_or(url)))
        })
        .collect();
    Ok(entries)
}

/// Parse one feed into its articles, in document order.
///
/// Items missing a title or a link are dropped; relative links are resolved
/// against the feed URL so article URLs are always absolute.
pub fn parse_feed(xml: &[u8], feed_url: &str) -> Result<Vec<Article>, rss::Error> {
    let channel = Channel::read_from(xml)?;
    let articles = channel
        .items()
        .iter()
        .filter_map(|item| {
            let title = item.title().map(str::trim).filter(|t| !t.is_empty())?;
            let link = item.link()?.trim();
            if link.is_empty() {
                return None;
            }
            Some(Article::new(title, to_absolute(link, feed_url)))
        })
        .collect();
    Ok(articles)
}

/// Resolve a possibly-relative link against the URL of the document it came
/// from. Falls back to the link untouched when resolution is impossible.
fn to_absolute(link: &str, base: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        return link.to_string();
    }

    let base_url = match Url::parse(base) {
        Ok(u) => u,
        Err(_) => return link.to_string(),
    };

    match base_url.join(link) {
        Ok(absolute) => absolute.to_string(),
        Err(_) => link.to_string(),
    }
}
