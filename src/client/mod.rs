//! Classification service client
//!
//! Drives one classification request at a time through a four-state
//! lifecycle (Idle, Loading, Succeeded, Failed) and carries the secondary
//! routing-label fetch. HTTP happens on a background worker thread; the UI
//! thread talks to it over mpsc channels.

mod protocol;
mod state;
mod worker;

pub use protocol::{
    ApiError, Classification, ClassifyRequest, ClassifyResponse, ErrorBody, LabelsResponse,
    GENERIC_SERVER_ERROR,
};
pub use state::{ClassifierState, RequestState};
pub use worker::{spawn_worker, ApiRequest, ApiResponse};
