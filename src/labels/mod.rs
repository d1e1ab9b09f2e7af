//! Routing label catalog
//!
//! Fetched once per successful classification to show every queue a ticket
//! could be routed to, with the predicted one highlighted. The fetch is
//! supplementary context: failure degrades to an empty catalog and is only
//! logged, never shown as a user-facing error. That asymmetry with the
//! classification request's hard-fail path is deliberate.

use crate::client::ApiError;

/// Where the routing label fetch stands for the currently displayed result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelsState {
    /// Fetch in progress (entered when a result first becomes available).
    Loading,
    /// Fetch finished; the list is legitimately empty when the service had
    /// no labels or the fetch failed.
    Loaded(Vec<String>),
}

impl LabelsState {
    /// Start a fresh fetch cycle for a newly displayed result.
    pub fn begin(&mut self) {
        *self = LabelsState::Loading;
    }

    /// Record the fetch outcome. Errors are swallowed into an empty catalog
    /// with a log line; the results pane shows "no labels available" rather
    /// than blocking or erroring the primary result.
    pub fn finish(&mut self, outcome: Result<Vec<String>, ApiError>) {
        let labels = match outcome {
            Ok(labels) => labels,
            Err(err) => {
                log::warn!("label fetch failed, showing empty catalog: {err}");
                Vec::new()
            }
        };
        *self = LabelsState::Loaded(labels);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LabelsState::Loading)
    }

    /// The fetched labels, if the fetch has finished.
    pub fn labels(&self) -> Option<&[String]> {
        match self {
            LabelsState::Loaded(labels) => Some(labels),
            LabelsState::Loading => None,
        }
    }
}

impl Default for LabelsState {
    fn default() -> Self {
        LabelsState::Loaded(Vec::new())
    }
}

/// Whether a catalog label is the one the classifier predicted.
///
/// Exact match after case folding; no partial or fuzzy matching. When the
/// service returns duplicate labels, every matching duplicate is marked.
pub fn is_predicted(label: &str, assignee: &str) -> bool {
    label.to_lowercase() == assignee.to_lowercase()
}
