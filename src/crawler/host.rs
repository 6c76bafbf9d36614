//! URL host extraction
//!
//! The host string keys both the per-host admission gates and the mirror
//! resolver, so the same URL must always map to the same bucket.

use url::Url;

/// Case-normalized host portion of a URL.
///
/// URLs that do not parse, or that carry no host, bucket under the raw
/// string so admission control and mirror detection still see them
/// consistently.
pub fn host_of(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_ascii_lowercase(),
            None => raw.to_string(),
        },
        Err(_) => raw.to_string(),
    }
}
