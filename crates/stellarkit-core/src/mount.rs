//! One-shot mount guard
//!
//! `Uninitialized -> Mounted`, and never back. The anchor check runs on
//! every `start` call until a mount happens; after that `start` is a no-op.

use crate::app::{App, CurrentRoute};
use crate::config::{AppConfig, BaseConfig, RootConfig};
use crate::host::Host;
use crate::page::{Page, PageRegistry, PageUnit};
use crate::router::Router;
use crate::{Result, ANCHOR_ID};
use log::{debug, info, warn};

/// What a call to [`Bootstrap::start`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// An application instance was created
    Mounted,
    /// No anchor element; nothing happened
    NoAnchor,
    /// A previous call already mounted; nothing happened
    AlreadyMounted,
}

/// Everything needed to build the application, held until mount
#[derive(Debug, Default)]
pub struct Pending {
    router: Router,
    pages: PageRegistry,
}

#[derive(Debug)]
pub enum MountState {
    Uninitialized(Pending),
    Mounted(App),
}

/// Owns the host and the mount state machine
#[derive(Debug)]
pub struct Bootstrap<H> {
    host: H,
    root: RootConfig,
    state: MountState,
}

impl<H: Host> Bootstrap<H> {
    pub fn new(host: H, router: Router, root: RootConfig, pages: PageRegistry) -> Self {
        Self {
            host,
            root,
            state: MountState::Uninitialized(Pending { router, pages }),
        }
    }

    /// Mount into the anchor element, if the document has one
    ///
    /// Errors only come from the first navigation after a mount; the
    /// instance stays mounted either way.
    pub fn start(&mut self) -> Result<StartOutcome> {
        let pending = match &mut self.state {
            MountState::Mounted(_) => {
                warn!("start called again after mount; ignoring");
                return Ok(StartOutcome::AlreadyMounted);
            }
            MountState::Uninitialized(pending) => pending,
        };

        if !self.host.has_anchor(ANCHOR_ID) {
            debug!("no #{} element; skipping mount", ANCHOR_ID);
            return Ok(StartOutcome::NoAnchor);
        }

        let Pending { router, pages } = std::mem::take(pending);
        let config = AppConfig::merge(BaseConfig::new(router), &self.root);
        info!("mounting into {}", config.el());

        self.state = MountState::Mounted(App::new(config, pages));
        if let MountState::Mounted(app) = &mut self.state {
            app.navigate(&self.host)?;
        }
        Ok(StartOutcome::Mounted)
    }

    pub fn state(&self) -> &MountState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.state, MountState::Mounted(_))
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn app(&self) -> Option<&App> {
        match &self.state {
            MountState::Mounted(app) => Some(app),
            MountState::Uninitialized(_) => None,
        }
    }

    /// The router, before or after mount
    pub fn router(&self) -> &Router {
        match &self.state {
            MountState::Mounted(app) => app.config().router(),
            MountState::Uninitialized(pending) => &pending.router,
        }
    }

    /// Register a page unit in whichever registry is live
    pub fn register_page(&mut self, page: Page, unit: Box<dyn PageUnit>) {
        match &mut self.state {
            MountState::Mounted(app) => app.register_page(page, unit),
            MountState::Uninitialized(pending) => pending.pages.register_boxed(page, unit),
        }
    }

    /// Follow the host's current location; `None` before mount
    pub fn sync(&mut self) -> Result<Option<&CurrentRoute>> {
        match &mut self.state {
            MountState::Mounted(app) => app.navigate(&self.host).map(Some),
            MountState::Uninitialized(_) => Ok(None),
        }
    }

    /// Programmatic navigation; `None` before mount
    pub fn push(&mut self, path: &str) -> Result<Option<&CurrentRoute>> {
        match &mut self.state {
            MountState::Mounted(app) => app.push(&self.host, path).map(Some),
            MountState::Uninitialized(_) => Ok(None),
        }
    }
}
