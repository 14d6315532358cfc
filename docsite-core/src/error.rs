//! Error types for site operations.

use thiserror::Error;

/// Result type for site operations.
pub type SiteResult<T> = Result<T, SiteError>;

/// Errors that can occur while decorating the page.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A required DOM element was not present.
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// The key/value store rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Writing to the system clipboard failed.
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    /// Site configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// A persisted theme value was not recognised.
    #[error("Unknown theme: {0}")]
    InvalidTheme(String),

    /// A toast kind name was not recognised.
    #[error("Unknown toast kind: {0}")]
    InvalidToastKind(String),
}
