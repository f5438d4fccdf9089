//! Application instance
//!
//! Owns the merged configuration (and with it the router) plus the page
//! registry. Each navigation resolves a path, activates one page unit and
//! resets the scroll position.

use crate::config::AppConfig;
use crate::host::Host;
use crate::location::split_query;
use crate::page::{Page, PageRegistry, PageUnit};
use crate::{Error, Result};
use log::debug;
use stellarkit_router::Resolved;

/// The route a navigation settled on
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentRoute {
    /// Effective path after redirects
    pub path: String,
    /// `None` only if the table has no root route to fall back to
    pub page: Option<Page>,
    pub name: Option<String>,
    pub params: Vec<(String, String)>,
    /// Raw query string without the `?`
    pub query: Option<String>,
    pub redirected_from: Option<String>,
}

impl CurrentRoute {
    /// Direct, unredirected route for `page`
    pub fn for_page(page: Page) -> Self {
        Self {
            path: page.path().to_string(),
            page: Some(page),
            name: Some(page.display_name().to_string()),
            params: Vec::new(),
            query: None,
            redirected_from: None,
        }
    }

    fn from_resolved(resolved: &Resolved<'_, Page>, query: Option<&str>) -> Self {
        Self {
            path: resolved.path.clone(),
            page: resolved.component().copied(),
            name: resolved.name().map(str::to_string),
            params: resolved.params.clone(),
            query: query.map(str::to_string),
            redirected_from: resolved.redirected_from.clone(),
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

pub struct App {
    config: AppConfig,
    pages: PageRegistry,
    current: Option<CurrentRoute>,
}

impl App {
    pub fn new(config: AppConfig, pages: PageRegistry) -> Self {
        Self {
            config,
            pages,
            current: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn current(&self) -> Option<&CurrentRoute> {
        self.current.as_ref()
    }

    pub fn pages(&self) -> &PageRegistry {
        &self.pages
    }

    /// Register or replace a page unit after mount
    pub fn register_page(&mut self, page: Page, unit: Box<dyn PageUnit>) {
        self.pages.register_boxed(page, unit);
    }

    /// Navigate to wherever the host's location points
    pub fn navigate<H: Host + ?Sized>(&mut self, host: &H) -> Result<&CurrentRoute> {
        let path = self.config.router().route_path(&host.location());
        self.navigate_to(host, &path)
    }

    /// Resolve `path`, activate its page, reset scroll
    ///
    /// The host location is rewritten when a redirect was followed. Page
    /// unit failures propagate unchanged and skip the scroll reset.
    pub fn navigate_to<H: Host + ?Sized>(
        &mut self,
        host: &H,
        path: &str,
    ) -> Result<&CurrentRoute> {
        let router = self.config.router();
        let (route_path, query) = split_query(path);
        let resolved = router.resolve(route_path);

        // Redirect targets carry no query of their own, so the requested one
        // follows the redirect
        if let Some(from) = &resolved.redirected_from {
            debug!("redirect {} -> {}", from, resolved.path);
            let target = match query {
                Some(query) => format!("{}?{}", resolved.path, query),
                None => resolved.path.clone(),
            };
            host.replace_location(&router.href(&host.location(), &target))?;
        }

        let current = CurrentRoute::from_resolved(&resolved, query);
        match current.page {
            Some(page) => match self.pages.get(page) {
                Some(unit) => unit.activate(self.config.anchor_id(), &current)?,
                None => debug!("no page unit registered for {}", page),
            },
            None => debug!("nothing to render at {}", current.path),
        }

        host.scroll_to(router.scroll_behavior())?;
        Ok(self.current.insert(current))
    }

    /// Record a history entry for `path`, then navigate to it
    pub fn push<H: Host + ?Sized>(&mut self, host: &H, path: &str) -> Result<&CurrentRoute> {
        let href = self.config.router().href(&host.location(), path);
        host.push_location(&href)?;
        self.navigate_to(host, path)
    }

    /// [`push`](Self::push) by route name
    pub fn push_named<H: Host + ?Sized>(&mut self, host: &H, name: &str) -> Result<&CurrentRoute> {
        let path = self
            .config
            .router()
            .table()
            .path_for_name(name)
            .ok_or_else(|| Error::UnknownRouteName(name.to_string()))?
            .to_string();
        self.push(host, &path)
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("pages", &self.pages)
            .field("current", &self.current)
            .finish()
    }
}
