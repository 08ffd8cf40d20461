//! Error types for notekeep-core

use thiserror::Error;

/// Result type alias using notekeep-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notekeep-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or an undecodable response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The note store answered with a non-success status
    #[error("Note store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Clipboard access failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
