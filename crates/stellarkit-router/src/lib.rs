//! stellarkit-router: Zero-dependency client-side route table
//!
//! Shared by stellarkit-core (platform-neutral app logic) and
//! stellarkit-wasm (browser bindings).
//!
//! ## Features
//! - Ordered route table: the first route in table order that matches wins
//! - Static paths: `/trades`, `/buytoken`
//! - Parameters: `/history/:account`
//! - Wildcards: `/files/*path`, `*`
//! - Redirect entries, followed during resolution
//! - Terminal catch-all that redirects to `/`
//! - Zero external dependencies
//!
//! ## Path Syntax
//! - `:name` - Named parameter (captures one segment)
//! - `*` or `*name` - Wildcard (captures the remaining path; a bare root `*`
//!   also matches `/`)
//!
//! Static segments match case-insensitively. Captured values keep the
//! requested spelling.
//!
//! ## Example
//! ```
//! use stellarkit_router::RouteTable;
//!
//! let table = RouteTable::builder()
//!     .route("/", "home", "Home")
//!     .route("/trades", "trades", "Live Stream")
//!     .build();
//!
//! let r = table.resolve("/trades");
//! assert_eq!(r.component(), Some(&"trades"));
//!
//! let r = table.resolve("/unknown/path");
//! assert_eq!(r.component(), Some(&"home"));
//! assert_eq!(r.redirected_from.as_deref(), Some("/unknown/path"));
//! ```

mod base;
mod table;

pub use base::BasePath;
pub use table::{Resolved, Route, RouteTable, RouteTableBuilder, Target, CATCH_ALL, ROOT};

use std::collections::HashMap;

/// Route match result
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Position of the matched route in its table
    pub route_id: u32,
    /// Captured path parameters as (name, value) pairs
    pub params: Vec<(String, String)>,
}

impl Match {
    /// Get params as HashMap for convenient access
    pub fn params_map(&self) -> HashMap<String, String> {
        self.params.iter().cloned().collect()
    }
}

/// Trie node for path segment matching
#[derive(Debug, Default)]
struct Node {
    /// Static children (key = lowercased path segment)
    children: HashMap<String, Node>,
    /// Parameter child (:id)
    param_child: Option<Box<ParamNode>>,
    /// Wildcard child (*path)
    wildcard_child: Option<Box<WildcardNode>>,
    /// Route ID if this is a terminal node
    route_id: Option<u32>,
}

#[derive(Debug)]
struct ParamNode {
    name: String,
    node: Node,
}

#[derive(Debug)]
struct WildcardNode {
    name: String,
    route_id: u32,
}

/// Path trie that reports the lowest route ID among all structural matches.
///
/// Route IDs are table positions, so the lowest ID is the route declared
/// first. A pattern inserted twice keeps its first ID.
#[derive(Debug, Default)]
pub struct Matcher {
    root: Node,
}

impl Matcher {
    /// Create an empty matcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a path pattern
    ///
    /// # Example
    /// ```
    /// use stellarkit_router::Matcher;
    ///
    /// let mut matcher = Matcher::new();
    /// matcher.insert("/history/:account", 0);
    /// matcher.insert("*", 1);
    /// ```
    pub fn insert(&mut self, path: &str, route_id: u32) {
        let segments = split_segments(path);
        Self::insert_node(&mut self.root, &segments, route_id);
    }

    fn insert_node(node: &mut Node, segments: &[&str], route_id: u32) {
        if segments.is_empty() {
            node.route_id.get_or_insert(route_id);
            return;
        }

        let segment = segments[0];
        let rest = &segments[1..];

        if let Some(name) = segment.strip_prefix(':') {
            let param = node.param_child.get_or_insert_with(|| {
                Box::new(ParamNode {
                    name: name.to_string(),
                    node: Node::default(),
                })
            });
            Self::insert_node(&mut param.node, rest, route_id);
        } else if let Some(name) = segment.strip_prefix('*') {
            // Anything after a wildcard is unreachable
            let wildcard_name = if name.is_empty() { "*" } else { name };
            node.wildcard_child.get_or_insert_with(|| {
                Box::new(WildcardNode {
                    name: wildcard_name.to_string(),
                    route_id,
                })
            });
        } else {
            let child = node.children.entry(segment.to_lowercase()).or_default();
            Self::insert_node(child, rest, route_id);
        }
    }

    /// Find the earliest-declared route matching `path`
    ///
    /// # Example
    /// ```
    /// use stellarkit_router::Matcher;
    ///
    /// let mut matcher = Matcher::new();
    /// matcher.insert("/history/:account", 0);
    ///
    /// let m = matcher.find("/history/GABC").unwrap();
    /// assert_eq!(m.route_id, 0);
    /// assert_eq!(m.params[0], ("account".to_string(), "GABC".to_string()));
    /// ```
    pub fn find(&self, path: &str) -> Option<Match> {
        let segments = split_segments(path);
        let mut params = Vec::new();
        let mut best = None;
        Self::find_node(&self.root, &segments, true, &mut params, &mut best);
        best
    }

    fn find_node(
        node: &Node,
        segments: &[&str],
        at_root: bool,
        params: &mut Vec<(String, String)>,
        best: &mut Option<Match>,
    ) {
        // Only the root wildcard matches an empty remainder, so `*` covers `/`
        // while `/files/*path` needs at least one segment after `/files`
        if let Some(ref wildcard) = node.wildcard_child {
            if at_root || !segments.is_empty() {
                params.push((wildcard.name.clone(), segments.join("/")));
                Self::consider(wildcard.route_id, params, best);
                params.pop();
            }
        }

        if segments.is_empty() {
            if let Some(id) = node.route_id {
                Self::consider(id, params, best);
            }
            return;
        }

        let segment = segments[0];
        let rest = &segments[1..];

        if let Some(child) = node.children.get(&segment.to_lowercase()) {
            Self::find_node(child, rest, false, params, best);
        }

        if let Some(ref param) = node.param_child {
            params.push((param.name.clone(), segment.to_string()));
            Self::find_node(&param.node, rest, false, params, best);
            params.pop();
        }
    }

    fn consider(route_id: u32, params: &[(String, String)], best: &mut Option<Match>) {
        let better = match best {
            Some(b) => route_id < b.route_id,
            None => true,
        };
        if better {
            *best = Some(Match {
                route_id,
                params: params.to_vec(),
            });
        }
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        let mut matcher = Matcher::new();
        matcher.insert("/", 0);
        matcher.insert("/buytoken", 1);
        matcher.insert("/trades", 2);

        assert_eq!(matcher.find("/").unwrap().route_id, 0);
        assert_eq!(matcher.find("/buytoken").unwrap().route_id, 1);
        assert_eq!(matcher.find("/trades").unwrap().route_id, 2);
        assert!(matcher.find("/unknown").is_none());
    }

    #[test]
    fn test_param_routes() {
        let mut matcher = Matcher::new();
        matcher.insert("/history/:account", 0);
        matcher.insert("/history/:account/ops/:op", 1);

        let m = matcher.find("/history/GABC").unwrap();
        assert_eq!(m.route_id, 0);
        assert_eq!(m.params, vec![("account".to_string(), "GABC".to_string())]);

        let m = matcher.find("/history/GABC/ops/7").unwrap();
        assert_eq!(m.route_id, 1);
        assert_eq!(
            m.params,
            vec![
                ("account".to_string(), "GABC".to_string()),
                ("op".to_string(), "7".to_string()),
            ]
        );
    }

    #[test]
    fn test_named_wildcard() {
        let mut matcher = Matcher::new();
        matcher.insert("/files/*path", 0);

        let m = matcher.find("/files/docs/readme.md").unwrap();
        assert_eq!(m.route_id, 0);
        assert_eq!(
            m.params,
            vec![("path".to_string(), "docs/readme.md".to_string())]
        );
    }

    #[test]
    fn test_nested_wildcard_needs_a_segment() {
        let mut matcher = Matcher::new();
        matcher.insert("/files/*path", 0);

        assert!(matcher.find("/files").is_none());
        assert!(matcher.find("/files/").is_none());
        assert_eq!(matcher.find("/files/a").unwrap().route_id, 0);
    }

    #[test]
    fn test_static_segments_ignore_case() {
        let mut matcher = Matcher::new();
        matcher.insert("/buytoken", 0);
        matcher.insert("/History/:account", 1);

        assert_eq!(matcher.find("/BuyToken").unwrap().route_id, 0);
        assert_eq!(matcher.find("/BUYTOKEN").unwrap().route_id, 0);

        let m = matcher.find("/history/GaBc").unwrap();
        assert_eq!(m.route_id, 1);
        assert_eq!(m.params, vec![("account".to_string(), "GaBc".to_string())]);
    }

    #[test]
    fn test_bare_wildcard_matches_root() {
        let mut matcher = Matcher::new();
        matcher.insert("*", 0);

        let m = matcher.find("/").unwrap();
        assert_eq!(m.route_id, 0);
        assert_eq!(m.params, vec![("*".to_string(), String::new())]);

        let m = matcher.find("/unknown/path").unwrap();
        assert_eq!(m.params, vec![("*".to_string(), "unknown/path".to_string())]);
    }

    #[test]
    fn test_earlier_route_wins() {
        let mut matcher = Matcher::new();
        matcher.insert("/history/:account", 0);
        matcher.insert("/history/latest", 1);

        // Declared first, so the param route beats the static one
        assert_eq!(matcher.find("/history/latest").unwrap().route_id, 0);
    }

    #[test]
    fn test_wildcard_declared_first_wins() {
        let mut matcher = Matcher::new();
        matcher.insert("*", 0);
        matcher.insert("/trades", 1);

        assert_eq!(matcher.find("/trades").unwrap().route_id, 0);
    }

    #[test]
    fn test_duplicate_path_keeps_first() {
        let mut matcher = Matcher::new();
        matcher.insert("/ico", 3);
        matcher.insert("/ico", 7);

        assert_eq!(matcher.find("/ico").unwrap().route_id, 3);
    }

    #[test]
    fn test_params_map() {
        let mut matcher = Matcher::new();
        matcher.insert("/locked/:balance", 0);

        let m = matcher.find("/locked/42").unwrap();
        let map = m.params_map();
        assert_eq!(map.get("balance"), Some(&"42".to_string()));
    }

    #[test]
    fn test_trailing_slash() {
        let mut matcher = Matcher::new();
        matcher.insert("/trust/", 0);

        assert_eq!(matcher.find("/trust").unwrap().route_id, 0);
        assert_eq!(matcher.find("/trust/").unwrap().route_id, 0);
    }
}
