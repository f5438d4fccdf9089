//! Host environment seam
//!
//! Everything the bootstrap needs from the document and window, behind one
//! trait so the mount and navigation logic runs without a browser.

use crate::location::BrowserLocation;
use crate::Result;
use std::cell::RefCell;
use std::collections::HashSet;

/// Scroll target. `x: None` keeps the current horizontal offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub x: Option<f64>,
    pub y: f64,
}

impl ScrollPosition {
    pub const TOP: ScrollPosition = ScrollPosition { x: None, y: 0.0 };
}

/// Document and window access
pub trait Host {
    /// Whether an element with this id exists
    fn has_anchor(&self, id: &str) -> bool;

    fn location(&self) -> BrowserLocation;

    /// Record a new history entry without reloading
    fn push_location(&self, href: &str) -> Result<()>;

    /// Overwrite the current history entry without reloading
    fn replace_location(&self, href: &str) -> Result<()>;

    fn scroll_to(&self, position: ScrollPosition) -> Result<()>;
}

/// In-memory host: a fixed set of element ids and a history stack
#[derive(Debug, Default)]
pub struct MemoryHost {
    anchors: RefCell<HashSet<String>>,
    history: RefCell<Vec<BrowserLocation>>,
    scrolls: RefCell<Vec<ScrollPosition>>,
}

impl MemoryHost {
    /// Document with no elements, at `/`
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element id to the document
    pub fn with_anchor(self, id: impl Into<String>) -> Self {
        self.add_anchor(id);
        self
    }

    /// Simulate an element being inserted after load
    pub fn add_anchor(&self, id: impl Into<String>) {
        self.anchors.borrow_mut().insert(id.into());
    }

    /// Start at `href`
    pub fn at(self, href: &str) -> Self {
        self.history.borrow_mut().push(BrowserLocation::from_href(href));
        self
    }

    /// Simulate the user following a link or pressing back
    pub fn visit(&self, href: &str) {
        self.history.borrow_mut().push(BrowserLocation::from_href(href));
    }

    pub fn history_len(&self) -> usize {
        self.history.borrow().len()
    }

    /// Every scroll request so far, oldest first
    pub fn scrolls(&self) -> Vec<ScrollPosition> {
        self.scrolls.borrow().clone()
    }
}

impl Host for MemoryHost {
    fn has_anchor(&self, id: &str) -> bool {
        self.anchors.borrow().contains(id)
    }

    fn location(&self) -> BrowserLocation {
        self.history
            .borrow()
            .last()
            .cloned()
            .unwrap_or_else(|| BrowserLocation::from_href("/"))
    }

    fn push_location(&self, href: &str) -> Result<()> {
        self.history.borrow_mut().push(BrowserLocation::from_href(href));
        Ok(())
    }

    fn replace_location(&self, href: &str) -> Result<()> {
        let mut history = self.history.borrow_mut();
        history.pop();
        history.push(BrowserLocation::from_href(href));
        Ok(())
    }

    fn scroll_to(&self, position: ScrollPosition) -> Result<()> {
        self.scrolls.borrow_mut().push(position);
        Ok(())
    }
}
