//! Wire types for the classification service
//!
//! `POST /classify` and `GET /labels`, plus the mapping from the service's
//! field names onto the domain result shown in the results pane.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback message when a failure response carries no usable error body.
pub const GENERIC_SERVER_ERROR: &str = "Server error";

/// Errors from the classification service or the transport underneath it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx status. The message is the server-supplied `error` field when
    /// present, else [`GENERIC_SERVER_ERROR`]; it is shown to the user
    /// verbatim, so Display carries no decoration.
    #[error("{message}")]
    Status { code: u16, message: String },

    /// Network-level failure (unreachable host, connection reset, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Request body for `POST /classify`.
#[derive(Debug, Serialize)]
pub struct ClassifyRequest<'a> {
    pub text: &'a str,
}

/// Success body for `POST /classify`.
///
/// The `_id` fields are part of the service contract but unused here.
#[derive(Debug, Deserialize)]
pub struct ClassifyResponse {
    pub topic: String,
    #[serde(default)]
    pub topic_id: i64,
    pub priority: String,
    #[serde(default)]
    pub priority_id: i64,
    pub routing: String,
    #[serde(default)]
    pub routing_id: i64,
}

/// Optional error body on failure responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// Success body for `GET /labels`. A missing `routing_labels` field is an
/// empty list, not an error.
#[derive(Debug, Deserialize)]
pub struct LabelsResponse {
    #[serde(default)]
    pub routing_labels: Vec<String>,
}

/// A completed classification as displayed to the user.
///
/// Replaced wholesale on each success, never partially updated. Serialize
/// is for the copy-to-clipboard JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: String,
    pub assignee: String,
    pub priority: String,
    /// The text the user submitted, not anything echoed by the server.
    pub description: String,
}

impl Classification {
    /// Map a service response onto the domain result. `submitted` is the
    /// original request text; the description always comes from it.
    pub fn from_response(response: ClassifyResponse, submitted: &str) -> Self {
        Self {
            category: response.topic,
            assignee: response.routing,
            priority: response.priority,
            description: submitted.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_response_parses_full_body() {
        let body = r#"{
            "topic": "Billing", "topic_id": 2,
            "priority": "High", "priority_id": 1,
            "routing": "Finance", "routing_id": 0
        }"#;
        let parsed: ClassifyResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.topic, "Billing");
        assert_eq!(parsed.priority, "High");
        assert_eq!(parsed.routing, "Finance");
        assert_eq!(parsed.topic_id, 2);
    }

    #[test]
    fn classify_response_missing_core_field_is_an_error() {
        let body = r#"{"topic": "Billing", "priority": "High"}"#;
        assert!(serde_json::from_str::<ClassifyResponse>(body).is_err());
    }

    #[test]
    fn labels_response_defaults_missing_field_to_empty() {
        let parsed: LabelsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.routing_labels.is_empty());
    }

    #[test]
    fn labels_response_parses_label_list() {
        let body = r#"{"routing_labels": ["Finance", "Support", "Engineering"]}"#;
        let parsed: LabelsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.routing_labels, ["Finance", "Support", "Engineering"]);
    }

    #[test]
    fn error_body_tolerates_absent_error_field() {
        let parsed: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(parsed.error.is_none());

        let parsed: ErrorBody = serde_json::from_str(r#"{"error": "rate limited"}"#).unwrap();
        assert_eq!(parsed.error.as_deref(), Some("rate limited"));
    }

    #[test]
    fn from_response_maps_fields_and_keeps_submitted_text() {
        let response = ClassifyResponse {
            topic: "Billing".into(),
            topic_id: 2,
            priority: "High".into(),
            priority_id: 1,
            routing: "Finance".into(),
            routing_id: 0,
        };
        let result = Classification::from_response(response, "Refund not processed");
        assert_eq!(result.category, "Billing");
        assert_eq!(result.assignee, "Finance");
        assert_eq!(result.priority, "High");
        assert_eq!(result.description, "Refund not processed");
    }

    #[test]
    fn status_error_displays_bare_message() {
        let err = ApiError::Status {
            code: 429,
            message: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn classify_request_serializes_text_field() {
        let body = serde_json::to_string(&ClassifyRequest { text: "help" }).unwrap();
        assert_eq!(body, r#"{"text":"help"}"#);
    }
}
