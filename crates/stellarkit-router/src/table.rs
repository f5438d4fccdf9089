//! Ordered route table with redirect-following resolution

use crate::Matcher;

/// Pattern of the terminal catch-all entry
pub const CATCH_ALL: &str = "*";

/// Root path, the catch-all's redirect target
pub const ROOT: &str = "/";

/// What a route does when it wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<T> {
    /// Render this component
    Component(T),
    /// Resolve this path instead
    Redirect(String),
}

/// A path pattern bound to a target and an optional display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<T> {
    path: String,
    target: Target<T>,
    name: Option<String>,
}

impl<T> Route<T> {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn target(&self) -> &Target<T> {
        &self.target
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The component, unless this is a redirect entry
    pub fn component(&self) -> Option<&T> {
        match &self.target {
            Target::Component(c) => Some(c),
            Target::Redirect(_) => None,
        }
    }
}

/// Builder for [`RouteTable`]
///
/// Entries keep their insertion order. [`build`](Self::build) always
/// appends the catch-all, so construction cannot fail.
#[derive(Debug)]
pub struct RouteTableBuilder<T> {
    routes: Vec<Route<T>>,
}

impl<T> Default for RouteTableBuilder<T> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<T> RouteTableBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named component route
    pub fn route(mut self, path: impl Into<String>, component: T, name: impl Into<String>) -> Self {
        self.routes.push(Route {
            path: path.into(),
            target: Target::Component(component),
            name: Some(name.into()),
        });
        self
    }

    /// Append a redirect entry
    pub fn redirect(mut self, path: impl Into<String>, to: impl Into<String>) -> Self {
        self.routes.push(Route {
            path: path.into(),
            target: Target::Redirect(to.into()),
            name: None,
        });
        self
    }

    /// Terminate with the catch-all and freeze the table
    pub fn build(self) -> RouteTable<T> {
        let mut routes = self.routes;
        routes.push(Route {
            path: CATCH_ALL.to_string(),
            target: Target::Redirect(ROOT.to_string()),
            name: None,
        });

        let mut matcher = Matcher::new();
        for (id, route) in routes.iter().enumerate() {
            matcher.insert(&route.path, id as u32);
        }

        RouteTable { routes, matcher }
    }
}

/// Result of resolving a location against a [`RouteTable`]
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a, T> {
    /// Effective path after redirects
    pub path: String,
    /// Winning component route, `None` only when redirects cycle
    pub route: Option<&'a Route<T>>,
    /// Captured path parameters
    pub params: Vec<(String, String)>,
    /// The requested path, when at least one redirect was followed
    pub redirected_from: Option<String>,
}

impl<'a, T> Resolved<'a, T> {
    pub fn component(&self) -> Option<&'a T> {
        self.route.and_then(Route::component)
    }

    pub fn name(&self) -> Option<&'a str> {
        self.route.and_then(Route::name)
    }

    pub fn is_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

/// Immutable, ordered route table
#[derive(Debug)]
pub struct RouteTable<T> {
    routes: Vec<Route<T>>,
    matcher: Matcher,
}

impl<T> RouteTable<T> {
    pub fn builder() -> RouteTableBuilder<T> {
        RouteTableBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always false for a built table: the catch-all is always present
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Route<T>> {
        self.routes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<T>> {
        self.routes.iter()
    }

    /// Reverse lookup of a named route's path
    pub fn path_for_name(&self, name: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|r| r.name() == Some(name))
            .map(Route::path)
    }

    /// `(name, path)` of every named component route, in table order
    pub fn named_routes(&self) -> Vec<(&str, &str)> {
        self.routes
            .iter()
            .filter(|r| r.component().is_some())
            .filter_map(|r| r.name().map(|n| (n, r.path())))
            .collect()
    }

    /// Resolve a location to exactly one component route
    ///
    /// Query strings and fragments are ignored. Redirect entries restart
    /// resolution at their target. A redirect back to an already visited
    /// path stops with `route: None`.
    pub fn resolve(&self, location: &str) -> Resolved<'_, T> {
        let requested = normalize(location);
        let mut path = requested.clone();
        let mut visited: Vec<String> = Vec::new();

        loop {
            let redirected_from = if visited.is_empty() {
                None
            } else {
                Some(requested.clone())
            };

            let Some(m) = self.matcher.find(&path) else {
                return Resolved {
                    path,
                    route: None,
                    params: Vec::new(),
                    redirected_from,
                };
            };

            let route = &self.routes[m.route_id as usize];
            match &route.target {
                Target::Component(_) => {
                    return Resolved {
                        path,
                        route: Some(route),
                        params: m.params,
                        redirected_from,
                    };
                }
                Target::Redirect(to) => {
                    let next = normalize(to);
                    visited.push(std::mem::replace(&mut path, next));
                    if visited.contains(&path) {
                        return Resolved {
                            path,
                            route: None,
                            params: Vec::new(),
                            redirected_from: Some(requested),
                        };
                    }
                }
            }
        }
    }
}

/// Drop query and fragment, collapse empty segments, force a leading slash
fn normalize(location: &str) -> String {
    let end = location
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(location.len());
    let segments: Vec<&str> = location[..end].split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}
