//! HTML body tokenizer
//!
//! Reduces an article page to the sequence of words a reader would see:
//! visible text only, lower-cased, split on anything non-alphanumeric, with
//! empties dropped and duplicates kept.

use scraper::{Html, Node};

/// Element containers whose text is never reader-visible.
const SKIPPED_CONTAINERS: &[&str] = &["script", "style", "noscript", "template"];

/// Tokenize an article page into normalized words, in document order.
pub fn tokenize_html(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut tokens = Vec::new();

    for node in document.tree.nodes() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|p| p.value().as_element())
            .map(|e| SKIPPED_CONTAINERS.contains(&e.name()))
            .unwrap_or(false);
        if hidden {
            continue;
        }
        push_words(text, &mut tokens);
    }

    tokens
}

fn push_words(text: &str, out: &mut Vec<String>) {
    for word in text.split(|c: char| !c.is_alphanumeric()) {
        if !word.is_empty() {
            out.push(word.to_lowercase());
        }
    }
}
