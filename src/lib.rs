//! Terminal client for a support-ticket classification service.
//!
//! The user types a free-text ticket description, submits it to the remote
//! `/classify` endpoint, and sees the predicted category, priority, and
//! routing assignment. A rotating pool of example tickets seeds the input,
//! and a secondary `/labels` fetch cross-references the predicted routing
//! against the service's full label set.

pub mod app;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod labels;
pub mod suggestions;
