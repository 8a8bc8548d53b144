//! Background catalog requests.
//!
//! The TUI loop must never block on the network, so each request runs on a
//! short-lived worker thread and reports back over a channel. The loop calls
//! [`CatalogSource::poll`] once per tick to pick up finished work.
//!
//! At most one request is in flight at a time. Asking for another while one
//! is pending is refused, which also keeps a double-pressed submit from
//! posting the same record twice.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::client::CatalogApi;
use crate::model::{BookRecord, CatalogError};

/// A finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// Result of `fetch_all`.
    Fetched(Result<Vec<BookRecord>, CatalogError>),
    /// Result of `add`.
    Added(Result<BookRecord, CatalogError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    Fetch,
    Add,
}

impl RequestKind {
    fn thread_name(self) -> &'static str {
        match self {
            RequestKind::Fetch => "catalog-fetch",
            RequestKind::Add => "catalog-add",
        }
    }

    /// Event reported when the worker went away without answering.
    fn lost(self) -> CatalogEvent {
        let err = CatalogError::Transport {
            url: String::new(),
            reason: "request worker exited without a response".to_string(),
        };
        match self {
            RequestKind::Fetch => CatalogEvent::Fetched(Err(err)),
            RequestKind::Add => CatalogEvent::Added(Err(err)),
        }
    }
}

/// Runs catalog requests off the UI thread.
pub struct CatalogSource {
    api: Arc<dyn CatalogApi>,
    pending: Option<(RequestKind, Receiver<CatalogEvent>)>,
}

impl std::fmt::Debug for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogSource")
            .field("pending", &self.pending.as_ref().map(|(kind, _)| *kind))
            .finish_non_exhaustive()
    }
}

impl CatalogSource {
    /// Wrap an API implementation.
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api, pending: None }
    }

    /// True while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Start loading the whole catalog. Returns `false` if busy.
    pub fn request_fetch(&mut self) -> bool {
        self.spawn(RequestKind::Fetch, |api| CatalogEvent::Fetched(api.fetch_all()))
    }

    /// Start posting a record. Returns `false` if busy.
    pub fn request_add(&mut self, record: BookRecord) -> bool {
        self.spawn(RequestKind::Add, move |api| {
            CatalogEvent::Added(api.add(&record))
        })
    }

    fn spawn<F>(&mut self, kind: RequestKind, work: F) -> bool
    where
        F: FnOnce(&dyn CatalogApi) -> CatalogEvent + Send + 'static,
    {
        if self.is_busy() {
            debug!(?kind, "request refused, another is in flight");
            return false;
        }

        let (tx, rx) = mpsc::channel();
        let api = Arc::clone(&self.api);
        let spawned = thread::Builder::new()
            .name(kind.thread_name().to_string())
            .spawn(move || {
                // Receiver may be gone if the app quit mid-request.
                let _ = tx.send(work(api.as_ref()));
            });

        match spawned {
            Ok(_) => {
                debug!(?kind, "request started");
                self.pending = Some((kind, rx));
                true
            }
            Err(e) => {
                warn!(?kind, error = %e, "failed to spawn request worker");
                false
            }
        }
    }

    /// Collect a finished request without blocking.
    pub fn poll(&mut self) -> Option<CatalogEvent> {
        let (kind, rx) = self.pending.as_ref()?;
        let event = match rx.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => kind.lost(),
        };
        self.pending = None;
        Some(event)
    }

    /// Block up to `timeout` for the pending request to finish.
    ///
    /// Returns `None` when nothing is pending or the timeout elapses. Used by
    /// headless mode and tests.
    pub fn wait(&mut self, timeout: Duration) -> Option<CatalogEvent> {
        let (kind, rx) = self.pending.as_ref()?;
        let event = match rx.recv_timeout(timeout) {
            Ok(event) => event,
            Err(RecvTimeoutError::Timeout) => return None,
            Err(RecvTimeoutError::Disconnected) => kind.lost(),
        };
        self.pending = None;
        Some(event)
    }
}
