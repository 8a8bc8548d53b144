//! Error types for bookcat.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions up to [`AppError`] in `main`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the binary entry point
//!   - [`CatalogError`] - Remote API failures (transport, HTTP status, body decoding)
//!   - [`ExportError`] - Encoding or writing an export file
//!   - `ConfigError` / `LoggingError` - Startup failures (see `config`, `logging`)
//!   - `std::io::Error` - Terminal failures
//!
//! # Recovery Strategy
//!
//! Inside the running TUI nothing but terminal IO is fatal. A failed fetch
//! keeps whatever records were loaded before and shows a message; a failed add
//! returns the dialog to editing with the error shown; a failed export is
//! reported in the status bar. None of these are retried automatically.
//!
//! Form validation failures are not errors in this sense; they live with the
//! form state (`state::add_form::ValidationErrors`).

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level application error.
///
/// Returned from the startup path in `main` and from the headless export mode.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The catalog API could not be reached or answered badly.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// An export could not be produced.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Terminal or TUI rendering error.
    ///
    /// Fatal: without a working terminal the TUI cannot continue.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failures talking to the remote catalog API.
///
/// Reasons are captured as strings so the error can cross the worker thread
/// boundary and be compared in tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {reason}")]
    Client {
        /// Underlying builder error.
        reason: String,
    },

    /// The request never produced a response (DNS, connect, reset, ...).
    #[error("Request to {url} failed: {reason}")]
    Transport {
        /// Request URL.
        url: String,
        /// Underlying transport error.
        reason: String,
    },

    /// The server answered with a non-success status.
    #[error("Server returned {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Request URL.
        url: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("Unexpected response from {url}: {reason}")]
    Decode {
        /// Request URL.
        url: String,
        /// Decoder error.
        reason: String,
    },
}

/// Failures producing an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The encoder rejected the data.
    #[error("Failed to encode {format} export: {reason}")]
    Encode {
        /// Export format label (e.g. "PDF").
        format: &'static str,
        /// Encoder error message.
        reason: String,
    },

    /// The encoded payload could not be written to disk.
    #[error("Failed to write export to {path:?}: {source}")]
    Write {
        /// Destination file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code_and_url() {
        let err = CatalogError::Status {
            status: 503,
            url: "http://localhost/api/data".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("/api/data"));
    }

    #[test]
    fn catalog_error_converts_to_app_error() {
        let err = CatalogError::Transport {
            url: "http://x/data".to_string(),
            reason: "connection refused".to_string(),
        };
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Catalog(_)));
    }

    #[test]
    fn export_write_error_keeps_path() {
        let err = ExportError::Write {
            path: PathBuf::from("/nope/books.csv"),
            source: std::io::Error::other("denied"),
        };
        assert!(err.to_string().contains("books.csv"));
    }

    #[test]
    fn io_error_converts_to_terminal_error() {
        let app: AppError = std::io::Error::other("tty gone").into();
        assert!(matches!(app, AppError::Terminal(_)));
    }
}
