//! Page identifiers and the page-unit dispatch interface
//!
//! Every route renders one of a closed set of pages. What a page draws is
//! the page unit's business: the router only calls [`PageUnit::activate`].

use crate::app::CurrentRoute;
use crate::Result;
use std::collections::HashMap;
use std::fmt;

/// One tagged case per routed page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    BuyToken,
    Trades,
    CreateToken,
    IcoManager,
    AllowTrust,
    LockedTokens,
    HistoryViewer,
    Experiments,
}

impl Page {
    /// All pages, in route table order
    pub const ALL: [Page; 9] = [
        Page::Home,
        Page::BuyToken,
        Page::Trades,
        Page::CreateToken,
        Page::IcoManager,
        Page::AllowTrust,
        Page::LockedTokens,
        Page::HistoryViewer,
        Page::Experiments,
    ];

    /// Stable key used by JS page registration
    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::BuyToken => "buytoken",
            Page::Trades => "trades",
            Page::CreateToken => "token",
            Page::IcoManager => "ico",
            Page::AllowTrust => "trust",
            Page::LockedTokens => "locked",
            Page::HistoryViewer => "history",
            Page::Experiments => "experiments",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::BuyToken => "/buytoken",
            Page::Trades => "/trades",
            Page::CreateToken => "/token",
            Page::IcoManager => "/ico",
            Page::AllowTrust => "/trust",
            Page::LockedTokens => "/locked",
            Page::HistoryViewer => "/history",
            Page::Experiments => "/experiments",
        }
    }

    /// Label shown in navigation
    pub fn display_name(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::BuyToken => "Buy Token",
            Page::Trades => "Live Stream",
            Page::CreateToken => "Create Token Tutorial",
            Page::IcoManager => "ICO Manager",
            Page::AllowTrust => "Allow Trust",
            Page::LockedTokens => "Locked Tokens",
            Page::HistoryViewer => "History Viewer",
            Page::Experiments => "Experiments",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A renderable page, activated by the router on navigation
pub trait PageUnit {
    /// Render into the element with id `anchor` for `route`
    fn activate(&self, anchor: &str, route: &CurrentRoute) -> Result<()>;
}

impl<F> PageUnit for F
where
    F: Fn(&str, &CurrentRoute) -> Result<()>,
{
    fn activate(&self, anchor: &str, route: &CurrentRoute) -> Result<()> {
        self(anchor, route)
    }
}

/// Page -> unit lookup
#[derive(Default)]
pub struct PageRegistry {
    units: HashMap<Page, Box<dyn PageUnit>>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit, replacing any previous one for `page`
    pub fn register<U: PageUnit + 'static>(&mut self, page: Page, unit: U) {
        self.units.insert(page, Box::new(unit));
    }

    pub fn register_boxed(&mut self, page: Page, unit: Box<dyn PageUnit>) {
        self.units.insert(page, unit);
    }

    pub fn get(&self, page: Page) -> Option<&dyn PageUnit> {
        self.units.get(&page).map(|u| u.as_ref())
    }

    pub fn contains(&self, page: Page) -> bool {
        self.units.contains_key(&page)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.units.keys()).finish()
    }
}
