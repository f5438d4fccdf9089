//! Browser location handling
//!
//! Maps between `window.location` parts and route paths for both history
//! modes.

use memchr::memchr2;
use serde::Deserialize;

/// Where the route path lives in the URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// `/base/#/trades`
    #[default]
    Hash,
    /// `/base/trades`
    History,
}

impl HistoryMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "hash" => Some(HistoryMode::Hash),
            "history" => Some(HistoryMode::History),
            _ => None,
        }
    }
}

/// Snapshot of `window.location`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserLocation {
    /// e.g. `/app/`
    pub pathname: String,
    /// Including the leading `?`, or empty
    pub search: String,
    /// Including the leading `#`, or empty
    pub hash: String,
}

impl BrowserLocation {
    /// Split a same-origin href such as `/app/trades?x=1#top`
    pub fn from_href(href: &str) -> Self {
        let hash_at = href.find('#').unwrap_or(href.len());
        let (before_hash, hash) = href.split_at(hash_at);
        let (pathname, search) = match before_hash.find('?') {
            Some(q) => before_hash.split_at(q),
            None => (before_hash, ""),
        };
        Self {
            pathname: if pathname.is_empty() {
                "/".to_string()
            } else {
                pathname.to_string()
            },
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    /// Reassemble the href
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

/// Split `"/trades?pair=XLM#x"` into `("/trades", Some("pair=XLM"))`
///
/// Anything after a fragment marker is dropped.
pub fn split_query(path: &str) -> (&str, Option<&str>) {
    let Some(at) = memchr2(b'?', b'#', path.as_bytes()) else {
        return (path, None);
    };
    let (route, rest) = path.split_at(at);
    if !rest.starts_with('?') {
        return (route, None);
    }
    let query = &rest[1..];
    let query = match query.find('#') {
        Some(end) => &query[..end],
        None => query,
    };
    (route, if query.is_empty() { None } else { Some(query) })
}
