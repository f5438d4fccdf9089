//! Application router
//!
//! Wraps the ordered route table with the deployment base path, the
//! history mode and the fixed scroll-reset policy.

use crate::host::ScrollPosition;
use crate::location::{BrowserLocation, HistoryMode};
use crate::Page;
use stellarkit_router::{BasePath, Resolved, RouteTable};

/// Base path baked in at build time
pub const BASE_PATH: &str = match option_env!("STELLARKIT_BASE_PATH") {
    Some(path) => path,
    None => "/",
};

/// Router options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterOptions {
    pub base: BasePath,
    pub mode: HistoryMode,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            base: BasePath::new(BASE_PATH),
            mode: option_env!("STELLARKIT_HISTORY_MODE")
                .and_then(HistoryMode::parse)
                .unwrap_or_default(),
        }
    }
}

impl RouterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, base: &str) -> Self {
        self.base = BasePath::new(base);
        self
    }

    pub fn mode(mut self, mode: HistoryMode) -> Self {
        self.mode = mode;
        self
    }
}

/// The page routes, in match priority order, ending with the catch-all
pub fn app_routes() -> RouteTable<Page> {
    Page::ALL
        .into_iter()
        .fold(RouteTable::builder(), |builder, page| {
            builder.route(page.path(), page, page.display_name())
        })
        .build()
}

#[derive(Debug)]
pub struct Router {
    table: RouteTable<Page>,
    options: RouterOptions,
}

impl Router {
    pub fn new(table: RouteTable<Page>, options: RouterOptions) -> Self {
        Self { table, options }
    }

    /// Router over [`app_routes`]
    pub fn app(options: RouterOptions) -> Self {
        Self::new(app_routes(), options)
    }

    pub fn table(&self) -> &RouteTable<Page> {
        &self.table
    }

    pub fn base(&self) -> &BasePath {
        &self.options.base
    }

    pub fn mode(&self) -> HistoryMode {
        self.options.mode
    }

    /// Same table and base under another history mode
    pub fn with_mode(mut self, mode: HistoryMode) -> Self {
        self.options.mode = mode;
        self
    }

    /// First matching route in table order; unmatched paths land on `/`
    pub fn resolve(&self, path: &str) -> Resolved<'_, Page> {
        self.table.resolve(path)
    }

    /// Route path (with query, if any) carried by a browser location
    pub fn route_path(&self, location: &BrowserLocation) -> String {
        match self.options.mode {
            HistoryMode::Hash => {
                let path = location.hash.strip_prefix('#').unwrap_or(&location.hash);
                if path.is_empty() {
                    "/".to_string()
                } else {
                    path.to_string()
                }
            }
            HistoryMode::History => {
                format!("{}{}", self.options.base.strip(&location.pathname), location.search)
            }
        }
    }

    /// Same-origin href for a route path, seen from the `current` location
    ///
    /// Hash mode keeps the document's own pathname and search and only swaps
    /// the fragment, so the base path does not apply there.
    pub fn href(&self, current: &BrowserLocation, path: &str) -> String {
        match self.options.mode {
            HistoryMode::Hash => format!("{}{}#{}", current.pathname, current.search, path),
            HistoryMode::History => self.options.base.join(path),
        }
    }

    /// Applied after every navigation: x unchanged, y to the top
    pub fn scroll_behavior(&self) -> ScrollPosition {
        ScrollPosition::TOP
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouteTable::builder().build(), RouterOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router(mode: HistoryMode, base: &str) -> Router {
        Router::app(RouterOptions::new().base(base).mode(mode))
    }

    #[test]
    fn test_app_routes_order() {
        let table = app_routes();
        assert_eq!(table.len(), Page::ALL.len() + 1);
        assert_eq!(table.get(0).unwrap().component(), Some(&Page::Home));
        assert_eq!(table.get(1).unwrap().name(), Some("Buy Token"));
        assert_eq!(table.get(9).unwrap().path(), "*");
    }

    #[test]
    fn test_every_page_resolves_to_itself() {
        let r = router(HistoryMode::Hash, "/");
        for page in Page::ALL {
            let resolved = r.resolve(page.path());
            assert_eq!(resolved.component(), Some(&page));
            assert!(!resolved.is_redirected());
        }
    }

    #[test]
    fn test_hash_mode_paths() {
        let r = router(HistoryMode::Hash, "/kit/");
        let loc = BrowserLocation::from_href("/kit/#/trades?pair=XLM");
        assert_eq!(r.route_path(&loc), "/trades?pair=XLM");
        assert_eq!(r.route_path(&BrowserLocation::from_href("/kit/")), "/");
        assert_eq!(r.href(&loc, "/ico"), "/kit/#/ico");
    }

    #[test]
    fn test_hash_href_keeps_document_path() {
        let r = router(HistoryMode::Hash, "/");
        let here = BrowserLocation::from_href("/kit/index.html?lang=en#/trades");
        assert_eq!(r.href(&here, "/ico"), "/kit/index.html?lang=en#/ico");
    }

    #[test]
    fn test_history_mode_paths() {
        let r = router(HistoryMode::History, "/kit");
        let loc = BrowserLocation::from_href("/kit/locked?asset=XLM");
        assert_eq!(r.route_path(&loc), "/locked?asset=XLM");
        assert_eq!(r.href(&loc, "/locked"), "/kit/locked");
    }

    #[test]
    fn test_scroll_behavior_is_top() {
        let r = Router::default();
        assert_eq!(r.scroll_behavior(), ScrollPosition { x: None, y: 0.0 });
    }
}
