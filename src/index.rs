//! The reverse index
//!
//! Built in a single pass once the crawl has drained, then read-only.

use std::collections::HashMap;

use crate::models::Article;

/// Frozen mapping from token to the articles containing it, each with its
/// occurrence count, best matches first.
#[derive(Debug, Default)]
pub struct Index {
    postings: HashMap<String, Vec<(Article, usize)>>,
}

impl Index {
    /// Fold the surviving (article, token list) classes into the index.
    /// A token appearing k times in a class's list contributes k to that
    /// article's count. Posting lists sort by count descending, then by
    /// article ascending.
    pub fn build(classes: Vec<(Article, Vec<String>)>) -> Self {
        let mut counts: HashMap<String, HashMap<Article, usize>> = HashMap::new();
        for (article, tokens) in classes {
            for token in tokens {
                *counts
                    .entry(token)
                    .or_default()
                    .entry(article.clone())
                    .or_insert(0) += 1;
            }
        }

        let postings = counts
            .into_iter()
            .map(|(token, by_article)| {
                let mut list: Vec<(Article, usize)> = by_article.into_iter().collect();
                list.sort_by(|(a, m), (b, n)| n.cmp(m).then_with(|| a.cmp(b)));
                (token, list)
            })
            .collect();

        Self { postings }
    }

    /// Articles containing `term` exactly, best matches first. The term is
    /// trimmed and lower-cased; there is no partial matching.
    pub fn matching_articles(&self, term: &str) -> &[(Article, usize)] {
        let token = term.trim().to_lowercase();
        self.postings.get(&token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct tokens indexed.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
