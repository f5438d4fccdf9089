//! stellarkit-wasm: Browser bootstrap for the stellarkit front-end
//!
//! Binds stellarkit-core to the DOM and exposes the JS surface:
//! `start`, `navigate`, `registerPage`, `routes`, `currentPath`, plus the
//! pass-through `ledgerApiTransport` and `helperImplementation`.
//!
//! Build with `wasm-pack build --target bundler`.

pub mod dom;
pub mod pages;

mod wasm;

#[cfg(feature = "js-utils")]
mod exports;

pub use wasm::*;

#[cfg(feature = "js-utils")]
pub use exports::*;

pub use dom::DomHost;
pub use pages::{default_pages, JsPage, Placeholder};
