use std::sync::mpsc;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::client::{spawn_worker, ApiResponse, ClassifierState};
use crate::clipboard;
use crate::labels::LabelsState;
use crate::suggestions::SuggestionPool;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputForm,
    ResultsPane,
}

/// Application state
pub struct App {
    pub textarea: TextArea<'static>,
    pub pool: SuggestionPool,
    pub classifier: ClassifierState,
    pub labels: LabelsState,
    pub focus: Focus,
    pub results_scroll: u16,
    /// Upper scroll bound, recomputed during render from content height.
    pub results_max_scroll: u16,
    /// Transient status message (clipboard feedback and the like).
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create an App wired to a live HTTP worker.
    ///
    /// `slot_count` is fixed here for the whole session; a later terminal
    /// resize does not reshape the suggestion window.
    pub fn new(slot_count: usize, base_url: String) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(base_url, request_rx, response_tx);

        let mut classifier = ClassifierState::new();
        classifier.set_channels(request_tx, response_rx);
        Self::with_classifier(slot_count, classifier)
    }

    /// Create an App around an existing classifier handle (test seam; tests
    /// hold the far ends of the channels instead of a worker thread).
    pub fn with_classifier(slot_count: usize, classifier: ClassifierState) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Describe your support ticket ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(
            "e.g., I'm experiencing a critical bug when trying to process payments through the API...",
        );

        Self {
            textarea,
            pool: SuggestionPool::new(slot_count),
            classifier,
            labels: LabelsState::default(),
            focus: Focus::InputForm,
            results_scroll: 0,
            results_max_scroll: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The current ticket draft text.
    pub fn draft(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Whether the submit action is currently available. The form disables
    /// submission while a request is in flight or the draft trims empty.
    pub fn can_submit(&self) -> bool {
        !self.classifier.is_loading() && !self.draft().trim().is_empty()
    }

    /// Submit the current draft for classification. Blank drafts and
    /// resubmission while loading are rejected inside the classifier with
    /// no transition and no message.
    pub fn submit(&mut self) {
        let draft = self.draft();
        if self.classifier.submit(&draft) {
            self.notice = None;
        }
    }

    /// Rotate the suggestion window by one entry.
    pub fn on_tick(&mut self) {
        self.pool.tick();
    }

    /// Copy the suggestion in the given slot into the draft, replacing it,
    /// with the cursor left at the end of the copied text. Pool cursor and
    /// window are untouched.
    pub fn apply_suggestion(&mut self, slot: usize) {
        let Some(text) = self.pool.get(slot) else {
            return;
        };
        self.clear_draft();
        self.textarea.insert_str(text);
        self.focus = Focus::InputForm;
    }

    /// Explicitly clear the draft (the only way it ever empties; a
    /// submission never clears it).
    pub fn clear_draft(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    /// Drain worker responses and apply them. Runs on the UI thread between
    /// redraws; each response is handled to completion before the next.
    pub fn drain_responses(&mut self) {
        for response in self.classifier.poll_responses() {
            match response {
                ApiResponse::Classified {
                    outcome,
                    request_id,
                } => {
                    self.classifier.apply_outcome(request_id, outcome);
                    if request_id == self.classifier.request_id
                        && self.classifier.result().is_some()
                    {
                        // A fresh result just mounted the results view:
                        // start the (soft-failing) label fetch for it.
                        self.labels.begin();
                        self.classifier.request_labels();
                        self.results_scroll = 0;
                    }
                }
                ApiResponse::Labels {
                    outcome,
                    request_id,
                } => {
                    if request_id == self.classifier.request_id {
                        self.labels.finish(outcome);
                    } else {
                        log::debug!("dropping stale label response {request_id}");
                    }
                }
            }
        }
    }

    /// Copy the current result as pretty-printed JSON.
    pub fn copy_result(&mut self) {
        let Some(result) = self.classifier.result() else {
            return;
        };
        let json = match serde_json::to_string_pretty(result) {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to serialize result: {e}");
                return;
            }
        };
        self.notice = match clipboard::copy(&json) {
            Ok(()) => Some("Result copied to clipboard".to_string()),
            Err(e) => {
                log::warn!("clipboard copy failed: {e}");
                Some("Copy failed".to_string())
            }
        };
    }

    /// "Classify another": discard the displayed result and return to Idle.
    /// The draft is deliberately left alone; clearing it stays explicit.
    pub fn reset_result(&mut self) {
        self.classifier.reset();
        self.labels = LabelsState::default();
        self.results_scroll = 0;
        self.results_max_scroll = 0;
        self.focus = Focus::InputForm;
        self.notice = None;
    }

    pub fn scroll_results_down(&mut self, lines: u16) {
        self.results_scroll = self
            .results_scroll
            .saturating_add(lines)
            .min(self.results_max_scroll);
    }

    pub fn scroll_results_up(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(lines);
    }
}
