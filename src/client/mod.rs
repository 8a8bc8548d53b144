//! Remote catalog API.
//!
//! [`CatalogApi`] is the seam between the TUI and the network. The running
//! application uses [`HttpCatalogClient`]; tests drive the same code with an
//! in-memory fake.
//!
//! The client keeps no local state. Every call is a fresh request against the
//! authoritative store.

use std::time::Duration;

use crate::model::{BookRecord, CatalogError};

mod http;

pub use http::HttpCatalogClient;

/// Operations the remote catalog supports.
///
/// Implementations are shared with worker threads, so they must be
/// `Send + Sync`.
pub trait CatalogApi: Send + Sync {
    /// Fetch every record in the catalog.
    fn fetch_all(&self) -> Result<Vec<BookRecord>, CatalogError>;

    /// Create a record. Returns the record as stored by the server.
    fn add(&self, record: &BookRecord) -> Result<BookRecord, CatalogError>;
}

/// Settings for building an [`HttpCatalogClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, e.g. `http://localhost:8080/api`. A trailing `/` is ignored.
    pub base_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Config with the default user agent and no timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: default_user_agent(),
            timeout: None,
        }
    }

    /// URL for an endpoint below the base, e.g. `data` or `add`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// `bookcat/<version>`.
pub fn default_user_agent() -> String {
    format!("bookcat/{}", env!("CARGO_PKG_VERSION"))
}
