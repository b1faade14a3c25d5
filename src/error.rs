//! Error types for pour_over_menu

use thiserror::Error;

/// Unified error type for fetching and persisting menu data
#[derive(Debug, Error)]
pub enum MenuError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to parse or write JSON (preferences, cache metadata)
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Offline cache has nothing to serve
    #[error("Cache error: {0}")]
    Cache(String),
}

/// Result alias for pour_over_menu operations
pub type Result<T> = std::result::Result<T, MenuError>;
