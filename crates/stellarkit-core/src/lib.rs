//! stellarkit-core: Routing and mount bootstrap for the stellarkit front-end
//!
//! Platform-neutral: the browser is reached only through the [`Host`]
//! trait, so everything here runs and tests natively. The wasm crate
//! supplies the DOM host and the JS-facing exports.
//!
//! ## Pages
//! Home, Buy Token, Live Stream, Create Token Tutorial, ICO Manager,
//! Allow Trust, Locked Tokens, History Viewer and Experiments, each behind
//! one route. Unknown paths redirect to `/`.
//!
//! ## Example
//! ```
//! use stellarkit_core::{
//!     Bootstrap, MemoryHost, Page, PageRegistry, RootConfig, Router, RouterOptions,
//!     StartOutcome, ANCHOR_ID,
//! };
//!
//! let host = MemoryHost::new().with_anchor(ANCHOR_ID).at("/#/buytoken");
//! let router = Router::app(RouterOptions::new().base("/"));
//! let mut boot = Bootstrap::new(host, router, RootConfig::app(), PageRegistry::new());
//!
//! assert_eq!(boot.start().unwrap(), StartOutcome::Mounted);
//! let current = boot.app().unwrap().current().unwrap();
//! assert_eq!(current.page, Some(Page::BuyToken));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod host;
pub mod location;
pub mod mount;
pub mod page;
pub mod router;

/// Id of the element the application mounts into
pub const ANCHOR_ID: &str = "app";

// Re-exports
pub use app::{App, CurrentRoute};
pub use config::{AppConfig, BaseConfig, RootConfig};
pub use error::{Error, Result};
pub use host::{Host, MemoryHost, ScrollPosition};
pub use location::{BrowserLocation, HistoryMode};
pub use mount::{Bootstrap, MountState, StartOutcome};
pub use page::{Page, PageRegistry, PageUnit};
pub use router::{app_routes, Router, RouterOptions, BASE_PATH};

pub use stellarkit_router::{BasePath, Resolved, Route, RouteTable, Target};
