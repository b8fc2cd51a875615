//! Unified error types for `Stockdeck`.
//!
//! The inventory domain itself has no failure modes (an unknown product id is
//! handled as absence, not as an error), so this enum only covers process-level
//! concerns: configuration loading, catalog validation, and terminal I/O.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// The catalog contents failed validation.
    #[error("Catalog error: {message}")]
    Catalog {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Terminal or filesystem I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
