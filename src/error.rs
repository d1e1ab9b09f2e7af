use thiserror::Error;

/// Custom error types for triage
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
