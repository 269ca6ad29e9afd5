//! Search worker thread
//!
//! Runs metadata searches in a background thread so the UI never blocks on
//! the network. Requests arrive over a channel, each call runs on a
//! current-thread tokio runtime, and responses go back tagged with their
//! `request_id`. Requests are handled one at a time in arrival order.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tokio_util::sync::CancellationToken;

use super::controller::{SearchRequest, SearchResponse};
use super::source::{MetadataSource, SearchError};

/// UI-side handle to the worker thread
///
/// Dropping the handle cancels any in-flight search and stops the thread.
pub struct SearchWorker {
    request_tx: Sender<SearchRequest>,
    response_rx: Receiver<SearchResponse>,
    cancel_token: CancellationToken,
}

impl SearchWorker {
    /// Send a request to the worker
    ///
    /// Returns false if the worker thread is gone.
    pub fn dispatch(&self, request: SearchRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Non-blocking check for a finished search
    pub fn poll(&self) -> Option<SearchResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::debug!("Search worker disconnected");
                None
            }
        }
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Spawn the search worker thread
///
/// When `source` is an error (for instance an unusable endpoint), the worker
/// still runs and answers every request with that error.
pub fn spawn_worker<S: MetadataSource>(source: Result<S, SearchError>) -> SearchWorker {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let worker_token = cancel_token.clone();

    std::thread::spawn(move || {
        worker_loop(source, request_rx, response_tx, worker_token);
    });

    SearchWorker {
        request_tx,
        response_rx,
        cancel_token,
    }
}

/// Main worker loop - processes requests until the channel closes or the
/// token is cancelled
fn worker_loop<S: MetadataSource>(
    source: Result<S, SearchError>,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
    cancel_token: CancellationToken,
) {
    if let Err(e) = &source {
        log::debug!("Metadata source not available: {}", e);
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::warn!("Could not start search runtime: {}", e);
            answer_all_with(
                SearchError::Network(format!("runtime unavailable: {}", e)),
                &request_rx,
                &response_tx,
                &cancel_token,
            );
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        if cancel_token.is_cancelled() {
            break;
        }

        let outcome = match &source {
            Ok(source) => {
                let search = source.search(&request.query);
                let finished = runtime.block_on(async {
                    tokio::select! {
                        biased;
                        _ = cancel_token.cancelled() => None,
                        outcome = search => Some(outcome),
                    }
                });
                match finished {
                    Some(outcome) => outcome,
                    None => {
                        log::debug!("Search request {} cancelled", request.request_id);
                        break;
                    }
                }
            }
            Err(e) => Err(e.clone()),
        };

        let response = SearchResponse {
            request_id: request.request_id,
            outcome,
        };
        if response_tx.send(response).is_err() {
            // UI side is gone
            break;
        }
    }

    log::debug!("Search worker thread shutting down");
}

fn answer_all_with(
    error: SearchError,
    request_rx: &Receiver<SearchRequest>,
    response_tx: &Sender<SearchResponse>,
    cancel_token: &CancellationToken,
) {
    while let Ok(request) = request_rx.recv() {
        if cancel_token.is_cancelled() {
            return;
        }
        let response = SearchResponse {
            request_id: request.request_id,
            outcome: Err(error.clone()),
        };
        if response_tx.send(response).is_err() {
            return;
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
