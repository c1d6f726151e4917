//! Error types for the list model

use thiserror::Error;

/// Errors from loading list fixtures.
///
/// Rendering and the imperative handle never fail; only I/O around them does.
#[derive(Error, Debug)]
pub enum ListError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture JSON could not be parsed
    #[error("Fixture parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Fixture parsed but is not usable
    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),
}

/// Result type alias for list operations
pub type Result<T> = std::result::Result<T, ListError>;
