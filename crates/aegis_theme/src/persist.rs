//! Debounced persistence of the active theme
//!
//! Theme switches can arrive in bursts (hovering a swatch grid, keyboard
//! cycling). The [`Persister`] coalesces them: a single background task waits
//! out the debounce window, keeps only the newest request and writes it.
//! Writes therefore land in request order and an older identifier can never
//! overwrite a newer one.
//!
//! Completion is observable: every scheduled write gets a [`PersistTicket`]
//! and [`Persister::wait`] resolves once that ticket (or a newer one that
//! superseded it) has been handled.

use crate::storage::ThemeStorage;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Monotonic id of a scheduled write
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersistTicket(u64);

impl PersistTicket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Result of the most recently handled write
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Nothing has been written yet
    Idle,
    Written { value: String },
    /// The key was removed
    Cleared,
    Failed { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistStatus {
    /// Newest ticket handled; older tickets were superseded by it
    pub ticket: u64,
    pub outcome: PersistOutcome,
}

impl PersistStatus {
    fn idle() -> Self {
        Self {
            ticket: 0,
            outcome: PersistOutcome::Idle,
        }
    }
}

struct PersistRequest {
    ticket: u64,
    /// `None` removes the key
    value: Option<String>,
}

enum Mode {
    /// Debounced writes on a tokio task
    Background {
        tx: mpsc::UnboundedSender<PersistRequest>,
        _worker: JoinHandle<()>,
    },
    /// No runtime available: write on the calling thread
    Inline,
}

/// Writes one storage key in the background
pub struct Persister {
    storage: Arc<dyn ThemeStorage>,
    key: String,
    mode: Mode,
    status_tx: Arc<watch::Sender<PersistStatus>>,
    status_rx: watch::Receiver<PersistStatus>,
    last_ticket: u64,
}

impl Persister {
    /// Create a persister for `key`.
    ///
    /// Spawns the debounce task on the current tokio runtime; without one,
    /// writes happen inline.
    pub fn new(storage: Arc<dyn ThemeStorage>, key: impl Into<String>, debounce: Duration) -> Self {
        let key = key.into();
        let (status_tx, status_rx) = watch::channel(PersistStatus::idle());
        let status_tx = Arc::new(status_tx);

        let mode = match Handle::try_current() {
            Ok(handle) => {
                let (tx, rx) = mpsc::unbounded_channel();
                let worker = handle.spawn(run_worker(
                    rx,
                    storage.clone(),
                    key.clone(),
                    debounce,
                    status_tx.clone(),
                ));
                Mode::Background {
                    tx,
                    _worker: worker,
                }
            }
            Err(_) => {
                debug!("no tokio runtime; persisting `{key}` inline");
                Mode::Inline
            }
        };

        Self {
            storage,
            key,
            mode,
            status_tx,
            status_rx,
            last_ticket: 0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Schedule a write of `value`; returns immediately
    pub fn schedule(&mut self, value: impl Into<String>) -> PersistTicket {
        self.enqueue(Some(value.into()))
    }

    /// Schedule removal of the key, ordered after earlier writes
    pub fn schedule_clear(&mut self) -> PersistTicket {
        self.enqueue(None)
    }

    fn enqueue(&mut self, value: Option<String>) -> PersistTicket {
        self.last_ticket += 1;
        let request = PersistRequest {
            ticket: self.last_ticket,
            value,
        };

        match &self.mode {
            Mode::Background { tx, .. } => {
                if let Err(mpsc::error::SendError(request)) = tx.send(request) {
                    warn!("persist worker for `{}` stopped; writing inline", self.key);
                    write_and_publish(&*self.storage, &self.key, request, &self.status_tx);
                }
            }
            Mode::Inline => write_and_publish(&*self.storage, &self.key, request, &self.status_tx),
        }

        PersistTicket(self.last_ticket)
    }

    /// Latest published status
    pub fn status(&self) -> PersistStatus {
        self.status_rx.borrow().clone()
    }

    /// Wait until `ticket` has been written, failed, or been superseded
    pub async fn wait(&self, ticket: PersistTicket) -> PersistStatus {
        let mut rx = self.status_rx.clone();
        let result = rx
            .wait_for(|status| status.ticket >= ticket.0)
            .await
            .map(|status| status.clone());
        match result {
            Ok(status) => status,
            // Sender lives in `self`, so this only happens during teardown.
            Err(_) => self.status(),
        }
    }

    /// Wait for every write scheduled so far
    pub async fn flush(&self) -> PersistStatus {
        if self.last_ticket == 0 {
            return self.status();
        }
        self.wait(PersistTicket(self.last_ticket)).await
    }
}

async fn run_worker(
    mut rx: mpsc::UnboundedReceiver<PersistRequest>,
    storage: Arc<dyn ThemeStorage>,
    key: String,
    debounce: Duration,
    status_tx: Arc<watch::Sender<PersistStatus>>,
) {
    while let Some(mut request) = rx.recv().await {
        if !debounce.is_zero() {
            tokio::time::sleep(debounce).await;
        }
        while let Ok(newer) = rx.try_recv() {
            request = newer;
        }
        write_and_publish(&*storage, &key, request, &status_tx);
    }
    debug!("persist worker for `{key}` stopped");
}

fn write_and_publish(
    storage: &dyn ThemeStorage,
    key: &str,
    request: PersistRequest,
    status_tx: &watch::Sender<PersistStatus>,
) {
    let result = match &request.value {
        Some(value) => storage.store(key, value),
        None => storage.remove(key),
    };
    let outcome = match (result, request.value) {
        (Ok(()), Some(value)) => {
            debug!("persisted {key} = {value}");
            PersistOutcome::Written { value }
        }
        (Ok(()), None) => {
            debug!("cleared {key}");
            PersistOutcome::Cleared
        }
        (Err(err), _) => {
            warn!("failed to persist {key}: {err}");
            PersistOutcome::Failed {
                reason: err.to_string(),
            }
        }
    };
    status_tx.send_replace(PersistStatus {
        ticket: request.ticket,
        outcome,
    });
}
