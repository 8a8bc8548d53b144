//! Blocking HTTP implementation of [`CatalogApi`].

use std::fmt::Debug;

use reqwest::blocking::{Client, Response};
use tracing::{debug, instrument, warn};

use super::{CatalogApi, ClientConfig};
use crate::model::{BookRecord, CatalogError};

/// Talks to the catalog over HTTP.
///
/// - `GET {base}/data` returns the JSON array of all records.
/// - `POST {base}/add` takes one JSON record and echoes it back.
pub struct HttpCatalogClient {
    client: Client,
    config: ClientConfig,
}

impl Debug for HttpCatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatalogClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpCatalogClient {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, CatalogError> {
        debug!(
            base_url = %config.base_url,
            timeout = ?config.timeout,
            "building catalog HTTP client"
        );

        // reqwest's blocking client defaults to 30s; pass the Option through
        // so `None` really means no timeout.
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Client {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

fn transport(url: &str, e: reqwest::Error) -> CatalogError {
    CatalogError::Transport {
        url: url.to_string(),
        reason: e.to_string(),
    }
}

fn check_status(url: &str, response: Response) -> Result<Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(CatalogError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

fn decode<T: serde::de::DeserializeOwned>(url: &str, response: Response) -> Result<T, CatalogError> {
    response.json::<T>().map_err(|e| CatalogError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

impl CatalogApi for HttpCatalogClient {
    #[instrument(skip_all)]
    fn fetch_all(&self) -> Result<Vec<BookRecord>, CatalogError> {
        let url = self.config.endpoint("data");
        debug!(method = "GET", %url, "catalog request");

        let result = self
            .client
            .get(&url)
            .send()
            .map_err(|e| transport(&url, e))
            .and_then(|response| check_status(&url, response))
            .and_then(|response| decode::<Vec<BookRecord>>(&url, response));

        match &result {
            Ok(records) => debug!(count = records.len(), "catalog fetched"),
            Err(e) => warn!(error = %e, "catalog fetch failed"),
        }
        result
    }

    #[instrument(skip_all, fields(entry_id = record.entry_id))]
    fn add(&self, record: &BookRecord) -> Result<BookRecord, CatalogError> {
        let url = self.config.endpoint("add");
        debug!(method = "POST", %url, "catalog request");

        let result = self
            .client
            .post(&url)
            .json(record)
            .send()
            .map_err(|e| transport(&url, e))
            .and_then(|response| check_status(&url, response))
            .and_then(|response| decode::<BookRecord>(&url, response));

        if let Err(e) = &result {
            warn!(error = %e, "catalog add failed");
        }
        result
    }
}
