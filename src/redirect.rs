//! Generic web search pass-through

/// Build the search URL for `term`, or `None` when there is nothing to search
pub fn search_url(base: &str, term: &str) -> Option<String> {
    if term.is_empty() {
        return None;
    }
    Some(format!("{}?q={}", base, urlencoding::encode(term)))
}

/// Open `url` in a new browser context. Failure is logged and otherwise ignored.
pub fn open_in_browser(url: &str) {
    if let Err(e) = webbrowser::open(url) {
        tracing::warn!("failed to open browser for {}: {}", url, e);
    }
}
