//! Error types for ryze-core

use thiserror::Error;

/// Main error type for the ryze-core library
///
/// The analytics functions themselves are total and return plain values;
/// errors only arise at the store boundary, in thought lifecycle misuse,
/// and in configuration/logging setup.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Store backend error
    #[error("store error: {0}")]
    Store(String),

    /// Thought not found
    #[error("thought not found: {0}")]
    ThoughtNotFound(String),

    /// Lifecycle violation: thought was already resolved
    #[error("thought already resolved: {0}")]
    AlreadyResolved(String),
}

/// Result type alias for ryze-core
pub type Result<T> = std::result::Result<T, Error>;
