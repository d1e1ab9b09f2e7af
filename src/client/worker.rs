//! HTTP worker thread
//!
//! Owns the `reqwest` client and a current-thread tokio runtime, and
//! processes requests from the UI serially until the channel closes. The UI
//! thread never blocks on the network; it drains the response channel
//! between redraws.

use std::sync::mpsc::{Receiver, Sender};

use super::protocol::{
    ApiError, Classification, ClassifyRequest, ClassifyResponse, ErrorBody, LabelsResponse,
    GENERIC_SERVER_ERROR,
};

/// Requests sent from the UI thread to the worker.
#[derive(Debug)]
pub enum ApiRequest {
    /// Classify the given ticket text.
    Classify {
        text: String,
        /// Id of this submission, echoed back so stale completions can be
        /// filtered on the UI side.
        request_id: u64,
    },
    /// Fetch the routing label catalog for the result with this id.
    FetchLabels { request_id: u64 },
}

/// Responses sent from the worker back to the UI thread.
#[derive(Debug)]
pub enum ApiResponse {
    /// Outcome of a classify request.
    Classified {
        outcome: Result<Classification, ApiError>,
        request_id: u64,
    },
    /// Outcome of a label fetch. Failure here is soft; the UI degrades to
    /// an empty catalog instead of surfacing an error.
    Labels {
        outcome: Result<Vec<String>, ApiError>,
        request_id: u64,
    },
}

/// Spawn the HTTP worker thread.
///
/// The thread exits when the request channel is closed (the UI dropping its
/// sender on teardown). In-flight calls are not aborted; their completions
/// simply go undrained.
pub fn spawn_worker(
    base_url: String,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(&base_url, request_rx, response_tx);
    });
}

/// Main worker loop: one request at a time, in arrival order.
fn worker_loop(base_url: &str, request_rx: Receiver<ApiRequest>, response_tx: Sender<ApiResponse>) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("failed to build worker runtime: {e}");
            return;
        }
    };
    let client = reqwest::Client::new();

    while let Ok(request) = request_rx.recv() {
        let response = match request {
            ApiRequest::Classify { text, request_id } => {
                let outcome = runtime
                    .block_on(classify(&client, base_url, &text))
                    .map(|body| Classification::from_response(body, &text));
                ApiResponse::Classified {
                    outcome,
                    request_id,
                }
            }
            ApiRequest::FetchLabels { request_id } => {
                let outcome = runtime.block_on(fetch_labels(&client, base_url));
                ApiResponse::Labels {
                    outcome,
                    request_id,
                }
            }
        };
        if response_tx.send(response).is_err() {
            // UI thread is gone; nothing left to report to.
            break;
        }
    }

    log::debug!("classification worker shutting down");
}

/// `POST /classify` with the ticket text.
///
/// Non-2xx statuses become [`ApiError::Status`] with the server's `error`
/// field when the body parses, else the generic fallback message.
async fn classify(
    client: &reqwest::Client,
    base_url: &str,
    text: &str,
) -> Result<ClassifyResponse, ApiError> {
    let url = format!("{base_url}/classify");
    let response = client
        .post(&url)
        .json(&ClassifyRequest { text })
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
        log::warn!("classify returned {status}: {message}");
        return Err(ApiError::Status {
            code: status.as_u16(),
            message,
        });
    }

    response
        .json::<ClassifyResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET /labels`. Any failure is reported as an error here; the caller's
/// policy (not ours) is to swallow it.
async fn fetch_labels(client: &reqwest::Client, base_url: &str) -> Result<Vec<String>, ApiError> {
    let url = format!("{base_url}/labels");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            code: status.as_u16(),
            message: GENERIC_SERVER_ERROR.to_string(),
        });
    }

    response
        .json::<LabelsResponse>()
        .await
        .map(|body| body.routing_labels)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
