//! Error types for stellarkit-core

use crate::Page;
use thiserror::Error;

/// Result type alias for stellarkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the stellarkit front-end
///
/// A missing anchor element is not an error: `start` reports it as an
/// outcome and mounts nothing.
#[derive(Debug, Error)]
pub enum Error {
    /// A page unit failed to activate
    #[error("Page {page} failed: {message}")]
    Page { page: Page, message: String },

    /// Host document or browser API failure
    #[error("Host error: {0}")]
    Host(String),

    /// Invalid root configuration document
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Navigation by a route name nobody declared
    #[error("Unknown route name: {0}")]
    UnknownRouteName(String),
}

impl Error {
    pub fn page(page: Page, message: impl Into<String>) -> Self {
        Error::Page {
            page,
            message: message.into(),
        }
    }
}
