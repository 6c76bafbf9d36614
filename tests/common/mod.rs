//! Shared fixtures for the integration tests.

/// RSS channel whose items name feeds: (feed URL, feed title).
pub fn feed_list_xml(feeds: &[(&str, &str)]) -> String {
    let items: String = feeds
        .iter()
        .map(|(url, title)| format!("<item><title>{title}</title><link>{url}</link></item>"))
        .collect();
    rss_channel("feeds", &items)
}

/// RSS channel whose items name articles: (article title, article URL).
pub fn feed_xml(articles: &[(&str, &str)]) -> String {
    let items: String = articles
        .iter()
        .map(|(title, url)| format!("<item><title>{title}</title><link>{url}</link></item>"))
        .collect();
    rss_channel("feed", &items)
}

/// Minimal article page wrapping the given body text.
pub fn article_html(body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>fixture</title></head>\
         <body><p>{body}</p></body></html>"
    )
}

fn rss_channel(title: &str, items: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <rss version=\"2.0\"><channel>\
         <title>{title}</title><link>http://localhost/</link><description>{title}</description>\
         {items}\
         </channel></rss>"
    )
}
