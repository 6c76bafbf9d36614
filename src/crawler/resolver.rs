//! Mirror coalescing
//!
//! Two articles sharing a host and a title are treated as mirrored copies of
//! one story. Each (host, title) class keeps a single canonical entry: the
//! smallest article under (title, url) order, and the multiset intersection
//! of every token list contributed to the class. Tokens that vary between
//! mirrors (navigation, boilerplate) drop out of the intersection.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::mem;
use std::sync::Mutex;

use crate::models::Article;

/// Classes of suspected mirrors, keyed by host then article title.
#[derive(Debug, Default)]
pub struct MirrorResolver {
    inner: Mutex<HashMap<String, HashMap<String, (Article, Vec<String>)>>>,
}

impl MirrorResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one successfully tokenized article into its class.
    ///
    /// `tokens` must already be sorted ascending; the class invariant relies
    /// on it. The lock is held across the lookup, merge, and store, which
    /// are all CPU work.
    pub fn record(&self, host: &str, article: Article, tokens: Vec<String>) {
        let mut inner = self.inner.lock().unwrap();
        let by_title = inner.entry(host.to_string()).or_default();

        match by_title.entry(article.title.clone()) {
            Entry::Vacant(slot) => {
                slot.insert((article, tokens));
            }
            Entry::Occupied(mut slot) => {
                let (stored_article, stored_tokens) = slot.get_mut();
                *stored_tokens = intersect(stored_tokens, &tokens);
                if article < *stored_article {
                    *stored_article = article;
                }
            }
        }
    }

    /// Drain every class for the index fold. Call after the crawl joins;
    /// the resolver is empty afterwards.
    pub fn take_classes(&self) -> Vec<(Article, Vec<String>)> {
        mem::take(&mut *self.inner.lock().unwrap())
            .into_values()
            .flat_map(HashMap::into_values)
            .collect()
    }
}

/// Multiset intersection of two sorted token lists, by two-pointer merge.
/// A token appearing m times in one list and n times in the other appears
/// min(m, n) times in the result.
pub fn intersect(a: &[String], b: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_intersect_is_multiset() {
        let a = toks(&["a", "a", "b", "c"]);
        let b = toks(&["a", "b", "b", "d"]);
        assert_eq!(intersect(&a, &b), toks(&["a", "b"]));
    }

    #[test]
    fn test_intersect_keeps_shared_duplicates() {
        let a = toks(&["x", "x", "x", "y"]);
        let b = toks(&["x", "x", "z"]);
        assert_eq!(intersect(&a, &b), toks(&["x", "x"]));
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        assert!(intersect(&toks(&["a"]), &toks(&["b"])).is_empty());
    }

    #[test]
    fn test_first_article_is_stored_verbatim() {
        let resolver = MirrorResolver::new();
        let article = Article::new("News", "http://h1/u1");
        resolver.record("h1", article.clone(), toks(&["a", "b"]));

        let classes = resolver.take_classes();
        assert_eq!(classes, vec![(article, toks(&["a", "b"]))]);
    }

    #[test]
    fn test_mirrors_collapse_to_min_article_and_intersection() {
        let resolver = MirrorResolver::new();
        resolver.record("h1", Article::new("News", "http://h1/u2"), toks(&["a", "b", "b", "d"]));
        resolver.record("h1", Article::new("News", "http://h1/u1"), toks(&["a", "a", "b", "c"]));

        let classes = resolver.take_classes();
        assert_eq!(classes.len(), 1);
        let (article, tokens) = &classes[0];
        assert_eq!(article.url, "http://h1/u1");
        assert_eq!(*tokens, toks(&["a", "b"]));
    }

    #[test]
    fn test_same_title_on_distinct_hosts_stays_separate() {
        let resolver = MirrorResolver::new();
        resolver.record("h1", Article::new("News", "http://h1/u1"), toks(&["a"]));
        resolver.record("h2", Article::new("News", "http://h2/u1"), toks(&["b"]));
        assert_eq!(resolver.take_classes().len(), 2);
    }

    #[test]
    fn test_take_classes_drains() {
        let resolver = MirrorResolver::new();
        resolver.record("h1", Article::new("News", "http://h1/u1"), toks(&["a"]));
        assert_eq!(resolver.take_classes().len(), 1);
        assert!(resolver.take_classes().is_empty());
    }
}
