//! Request lifecycle state machine
//!
//! One discriminated value covers the whole lifecycle, so impossible
//! combinations (loading with a stale error, a result alongside an error)
//! are unrepresentable.

use std::sync::mpsc::{Receiver, Sender};

use super::protocol::{ApiError, Classification};
use super::worker::{ApiRequest, ApiResponse};

/// Where the current (or most recent) classification request stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    /// Nothing submitted yet, or the view was explicitly reset.
    Idle,
    /// Exactly one request is in flight.
    Loading,
    /// The last request completed; the result replaces any prior state.
    Succeeded(Classification),
    /// The last request failed; the message is user-facing.
    Failed(String),
}

/// UI-side handle for the classification request lifecycle.
pub struct ClassifierState {
    pub state: RequestState,
    /// Channel to send requests to the worker thread.
    pub request_tx: Option<Sender<ApiRequest>>,
    /// Channel to receive responses from the worker thread.
    pub response_rx: Option<Receiver<ApiResponse>>,
    /// Monotonic id of the most recent submission; completions carrying any
    /// other id are stale and dropped.
    pub request_id: u64,
}

impl ClassifierState {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            request_tx: None,
            response_rx: None,
            request_id: 0,
        }
    }

    /// Attach the worker channels.
    pub fn set_channels(&mut self, request_tx: Sender<ApiRequest>, response_rx: Receiver<ApiResponse>) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// True while a request is in flight (submission is gated on this).
    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    /// The current result, if the last request succeeded.
    pub fn result(&self) -> Option<&Classification> {
        match &self.state {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// Submit the draft for classification.
    ///
    /// A draft that trims to empty is rejected with no state transition and
    /// no network call; so is a submission while one is already in flight.
    /// Otherwise the prior terminal state is replaced wholesale by
    /// `Loading` (which is what clears any previous result or error) and
    /// exactly one request goes out carrying the untrimmed draft.
    ///
    /// Returns true if a request was issued.
    pub fn submit(&mut self, draft: &str) -> bool {
        if draft.trim().is_empty() {
            return false;
        }
        if self.is_loading() {
            return false;
        }
        let Some(tx) = &self.request_tx else {
            return false;
        };

        self.request_id = self.request_id.wrapping_add(1);
        let sent = tx
            .send(ApiRequest::Classify {
                text: draft.to_string(),
                request_id: self.request_id,
            })
            .is_ok();
        if !sent {
            log::error!("classification worker is gone; submission dropped");
            return false;
        }

        self.state = RequestState::Loading;
        true
    }

    /// Apply a completed classification from the worker.
    ///
    /// Stale completions (wrong id, or arriving after a reset) are dropped
    /// so a superseded request can never overwrite newer state.
    pub fn apply_outcome(&mut self, request_id: u64, outcome: Result<Classification, ApiError>) {
        if request_id != self.request_id {
            log::debug!(
                "dropping stale classification response {} (current {})",
                request_id,
                self.request_id
            );
            return;
        }
        if !self.is_loading() {
            log::debug!("dropping classification response {request_id}: not loading");
            return;
        }
        self.state = match outcome {
            Ok(result) => RequestState::Succeeded(result),
            Err(err) => RequestState::Failed(err.to_string()),
        };
    }

    /// Ask the worker for the routing label catalog, tagged with the
    /// current request id so late label responses for superseded results
    /// are identifiable.
    pub fn request_labels(&self) {
        if let Some(tx) = &self.request_tx {
            let sent = tx
                .send(ApiRequest::FetchLabels {
                    request_id: self.request_id,
                })
                .is_ok();
            if !sent {
                log::debug!("classification worker is gone; label request dropped");
            }
        }
    }

    /// Discard the current result or error and return to `Idle`.
    ///
    /// Bumps the request id so anything still in flight lands stale.
    pub fn reset(&mut self) {
        self.state = RequestState::Idle;
        self.request_id = self.request_id.wrapping_add(1);
    }

    /// Drain all responses the worker has produced so far.
    pub fn poll_responses(&mut self) -> Vec<ApiResponse> {
        match &self.response_rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        }
    }
}

impl Default for ClassifierState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
