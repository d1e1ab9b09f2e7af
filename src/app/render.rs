use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::client::RequestState;
use crate::labels::{is_predicted, LabelsState};

use super::state::{App, Focus};

/// Height of the draft textarea including its borders.
const INPUT_HEIGHT: u16 = 7;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT), // Ticket draft
            Constraint::Length(1),            // Suggestion chips
            Constraint::Length(1),            // Status line
            Constraint::Min(3),               // Results pane
        ])
        .split(frame.area());

        self.render_input(frame, layout[0]);
        self.render_suggestions(frame, layout[1]);
        self.render_status(frame, layout[2]);
        self.render_results(frame, layout[3]);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focus == Focus::InputForm {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Describe your support ticket ")
                .border_style(border),
        );
        frame.render_widget(&self.textarea, area);
    }

    /// One chip per visible slot, numbered so Alt+N can grab them.
    fn render_suggestions(&self, frame: &mut Frame, area: Rect) {
        let slots = self.pool.slot_count().max(1);
        let budget = (area.width as usize / slots).saturating_sub(5);

        let mut spans = Vec::new();
        for (i, suggestion) in self.pool.window().iter().enumerate() {
            spans.push(Span::styled(
                format!(" {} ", i + 1),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::styled(
                format!(" {} ", truncate_chip(suggestion, budget)),
                Style::default().fg(Color::Gray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();

        if self.classifier.is_loading() {
            spans.push(Span::styled(
                "Classifying… ",
                Style::default().fg(Color::Yellow),
            ));
        } else if self.can_submit() {
            spans.push(Span::styled(
                "Enter classify ",
                Style::default().fg(Color::Green),
            ));
        } else {
            // Submission disabled: blank draft (or just dim the hint).
            spans.push(Span::styled(
                "Enter classify ",
                Style::default().fg(Color::DarkGray),
            ));
        }

        spans.push(Span::styled(
            "· Alt+1-4 suggestion · Ctrl+L clear · Ctrl+Y copy · Ctrl+R reset · Ctrl+C quit",
            Style::default().fg(Color::DarkGray),
        ));

        if let Some(notice) = &self.notice {
            spans.push(Span::styled(
                format!("  {notice}"),
                Style::default().fg(Color::Cyan),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focus == Focus::ResultsPane {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Results ")
            .border_style(border);

        let lines = match &self.classifier.state {
            RequestState::Idle => vec![Line::styled(
                "Submit a ticket description to see its classification.",
                Style::default().fg(Color::DarkGray),
            )],
            RequestState::Loading => vec![Line::styled(
                "Classifying ticket…",
                Style::default().fg(Color::Yellow),
            )],
            RequestState::Failed(message) => vec![
                Line::styled(message.clone(), Style::default().fg(Color::Red)),
                Line::raw(""),
                Line::styled(
                    "Adjust the description and press Enter to retry.",
                    Style::default().fg(Color::DarkGray),
                ),
            ],
            RequestState::Succeeded(result) => {
                result_lines(result, &self.labels)
            }
        };

        // Clamp scrolling to the content that actually overflows. Lines wrap
        // inside the block, so the bound counts wrapped rows, not lines.
        let inner_width = area.width.saturating_sub(2).max(1) as usize;
        let total_rows: u16 = lines
            .iter()
            .map(|line| {
                let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
                wrapped_rows(&text, inner_width)
            })
            .sum();
        let viewport = area.height.saturating_sub(2);
        self.results_max_scroll = total_rows.saturating_sub(viewport);
        self.results_scroll = self.results_scroll.min(self.results_max_scroll);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.results_scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

/// Body of the results pane for a successful classification.
fn result_lines(
    result: &crate::client::Classification,
    labels: &LabelsState,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            "CLASSIFICATION RESULT",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            result.category.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Priority    ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(" {} ", result.priority),
                Style::default()
                    .fg(Color::Black)
                    .bg(priority_color(&result.priority))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Assigned to ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                result.assignee.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        Line::styled(
            "Possible assignees",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    lines.push(label_chips_line(labels, &result.assignee));
    lines.push(Line::styled(
        "The highlighted queue is the model's predicted routing.",
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Ticket content",
        Style::default().fg(Color::DarkGray),
    ));
    for text_line in result.description.lines() {
        lines.push(Line::raw(text_line.to_string()));
    }

    lines
}

/// The routing catalog row: loading text, the chips, or the degraded
/// "no labels" note when the soft fetch came back empty.
fn label_chips_line(labels: &LabelsState, assignee: &str) -> Line<'static> {
    match labels.labels() {
        None => Line::styled("Loading labels...", Style::default().fg(Color::DarkGray)),
        Some([]) => Line::styled(
            "No labels available.",
            Style::default().fg(Color::DarkGray),
        ),
        Some(list) => {
            let mut spans = Vec::new();
            for label in list {
                let style = if is_predicted(label, assignee) {
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                spans.push(Span::styled(format!(" {label} "), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        }
    }
}

/// Badge color by severity, mirroring the service's priority scale.
fn priority_color(priority: &str) -> Color {
    match priority.to_lowercase().as_str() {
        "critical" => Color::Red,
        "high" => Color::LightRed,
        "medium" => Color::Yellow,
        _ => Color::Green,
    }
}

/// Number of display rows one line occupies after greedy word wrapping at
/// the given width. Words wider than a whole row break across rows.
fn wrapped_rows(text: &str, width: usize) -> u16 {
    if width == 0 {
        return 1;
    }
    let mut rows: u16 = 1;
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let w = word.width();
        let sep = usize::from(used > 0);
        if used + sep + w <= width {
            used += sep + w;
        } else if w <= width {
            rows = rows.saturating_add(1);
            used = w;
        } else {
            if used > 0 {
                rows = rows.saturating_add(1);
            }
            let full = w / width;
            let rem = w % width;
            if rem == 0 {
                rows = rows.saturating_add((full as u16).saturating_sub(1));
                used = width;
            } else {
                rows = rows.saturating_add(full as u16);
                used = rem;
            }
        }
    }
    rows
}

/// Truncate a chip to a display-cell budget, appending an ellipsis when
/// anything was cut (double-width characters count as two cells).
fn truncate_chip(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ApiResponse, Classification, ClassifierState};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::mpsc;

    fn rendered_text(app: &mut App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app_with_result() -> (App, mpsc::Sender<ApiResponse>) {
        let (request_tx, _request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut classifier = ClassifierState::new();
        classifier.set_channels(request_tx, response_rx);
        let mut app = App::with_classifier(4, classifier);
        app.textarea.insert_str("Refund not processed");
        app.submit();
        response_tx
            .send(ApiResponse::Classified {
                outcome: Ok(Classification {
                    category: "Billing".into(),
                    assignee: "Finance".into(),
                    priority: "High".into(),
                    description: "Refund not processed".into(),
                }),
                request_id: 1,
            })
            .unwrap();
        app.drain_responses();
        (app, response_tx)
    }

    #[test]
    fn idle_state_shows_placeholder() {
        let (request_tx, _request_rx) = mpsc::channel();
        let (_response_tx, response_rx) = mpsc::channel();
        let mut classifier = ClassifierState::new();
        classifier.set_channels(request_tx, response_rx);
        let mut app = App::with_classifier(4, classifier);

        let text = rendered_text(&mut app);
        assert!(text.contains("Submit a ticket description"));
        assert!(text.contains("Describe your support ticket"));
    }

    #[test]
    fn suggestions_row_shows_numbered_chips() {
        let (request_tx, _request_rx) = mpsc::channel();
        let (_response_tx, response_rx) = mpsc::channel();
        let mut classifier = ClassifierState::new();
        classifier.set_channels(request_tx, response_rx);
        let mut app = App::with_classifier(2, classifier);

        let text = rendered_text(&mut app);
        assert!(text.contains(" 1 "));
        assert!(text.contains(" 2 "));
        assert!(text.contains("Payment failed"));
    }

    #[test]
    fn loading_state_shows_progress_text() {
        let (request_tx, _request_rx) = mpsc::channel();
        let (_response_tx, response_rx) = mpsc::channel();
        let mut classifier = ClassifierState::new();
        classifier.set_channels(request_tx, response_rx);
        let mut app = App::with_classifier(2, classifier);
        app.textarea.insert_str("something went wrong");
        app.submit();

        let text = rendered_text(&mut app);
        assert!(text.contains("Classifying ticket"));
    }

    #[test]
    fn success_shows_all_result_fields() {
        let (mut app, _tx) = app_with_result();

        let text = rendered_text(&mut app);
        assert!(text.contains("Billing"));
        assert!(text.contains("High"));
        assert!(text.contains("Finance"));
        assert!(text.contains("Refund not processed"));
        assert!(text.contains("Loading labels..."));
    }

    #[test]
    fn loaded_labels_replace_loading_text() {
        let (mut app, tx) = app_with_result();
        tx.send(ApiResponse::Labels {
            outcome: Ok(vec!["Finance".into(), "Support".into()]),
            request_id: 1,
        })
        .unwrap();
        app.drain_responses();

        let text = rendered_text(&mut app);
        assert!(!text.contains("Loading labels"));
        assert!(text.contains("Support"));
    }

    #[test]
    fn empty_label_catalog_shows_degraded_note() {
        let (mut app, tx) = app_with_result();
        tx.send(ApiResponse::Labels {
            outcome: Ok(Vec::new()),
            request_id: 1,
        })
        .unwrap();
        app.drain_responses();

        let text = rendered_text(&mut app);
        assert!(text.contains("No labels available."));
    }

    #[test]
    fn failed_state_shows_error_message() {
        let (request_tx, _request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut classifier = ClassifierState::new();
        classifier.set_channels(request_tx, response_rx);
        let mut app = App::with_classifier(2, classifier);
        app.textarea.insert_str("anything");
        app.submit();
        response_tx
            .send(ApiResponse::Classified {
                outcome: Err(crate::client::ApiError::Status {
                    code: 429,
                    message: "rate limited".into(),
                }),
                request_id: 1,
            })
            .unwrap();
        app.drain_responses();

        let text = rendered_text(&mut app);
        assert!(text.contains("rate limited"));
    }

    #[test]
    fn priority_colors_follow_severity() {
        assert_eq!(priority_color("Critical"), Color::Red);
        assert_eq!(priority_color("high"), Color::LightRed);
        assert_eq!(priority_color("MEDIUM"), Color::Yellow);
        assert_eq!(priority_color("Low"), Color::Green);
        assert_eq!(priority_color("anything else"), Color::Green);
    }

    #[test]
    fn wrapped_rows_counts_word_wrap() {
        assert_eq!(wrapped_rows("", 10), 1);
        assert_eq!(wrapped_rows("short", 10), 1);
        assert_eq!(wrapped_rows("one two three", 7), 2); // "one two" / "three"
        assert_eq!(wrapped_rows("aaaaaaaaaa", 4), 3); // 4 + 4 + 2
        assert_eq!(wrapped_rows("aaaaaaaa", 4), 2); // exact multiple
    }

    #[test]
    fn wrapped_description_bottom_is_reachable() {
        let (request_tx, _request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut classifier = ClassifierState::new();
        classifier.set_channels(request_tx, response_rx);
        let mut app = App::with_classifier(2, classifier);
        app.textarea.insert_str("long ticket");
        app.submit();

        // One logical line that wraps across many visual rows.
        let description = format!("{}ENDMARK", "refund stuck in review ".repeat(30));
        response_tx
            .send(ApiResponse::Classified {
                outcome: Ok(Classification {
                    category: "Billing".into(),
                    assignee: "Finance".into(),
                    priority: "High".into(),
                    description,
                }),
                request_id: 1,
            })
            .unwrap();
        app.drain_responses();

        let backend = TestBackend::new(40, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        assert!(app.results_max_scroll > 0);

        app.scroll_results_down(u16::MAX);
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        assert!(text.contains("ENDMARK"), "scrolling to the bound reaches the end");
    }

    #[test]
    fn truncate_chip_respects_budget() {
        assert_eq!(truncate_chip("short", 10), "short");
        assert_eq!(truncate_chip("exactly-ten", 11), "exactly-ten");
        let cut = truncate_chip("a very long suggestion text", 10);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 10);
    }
}
