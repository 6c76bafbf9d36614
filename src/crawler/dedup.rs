//! URL-level deduplication
//!
//! A crawl-scoped, first-writer-wins registry. Claiming a URL is permanent:
//! a worker that later fails still consumes the slot, so a bad URL is never
//! retried within the same crawl.

use std::collections::HashSet;
use std::sync::Mutex;

/// Set of URLs some worker has already claimed.
#[derive(Debug, Default)]
pub struct SeenUrls {
    inner: Mutex<HashSet<String>>,
}

impl SeenUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a URL. Returns true for the first caller; every later caller
    /// gets false and must skip the work. The lock is held only for the
    /// membership check plus insert, never across I/O.
    pub fn claim(&self, url: &str) -> bool {
        self.inner.lock().unwrap().insert(url.to_string())
    }
}
