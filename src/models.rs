// Core data structures for the newsreel crawler

use serde::{Deserialize, Serialize};

/// One article reference extracted from a feed.
///
/// Articles order by (title, url); the smaller of two articles is the one
/// kept when mirrored copies of the same story are coalesced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
}

impl Article {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// One entry of the root feed list. The title is carried for logging only
/// and plays no part in indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub url: String,
    pub title: String,
}

impl FeedEntry {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_orders_by_title_first() {
        let a = Article::new("Alpha", "https://z.example.com/1");
        let b = Article::new("Beta", "https://a.example.com/1");
        assert!(a < b);
    }

    #[test]
    fn test_article_url_breaks_title_ties() {
        let a = Article::new("News", "https://example.com/u1");
        let b = Article::new("News", "https://example.com/u2");
        assert!(a < b);
        assert_eq!(a.clone().min(b), a);
    }
}
