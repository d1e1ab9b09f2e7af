use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, Focus};

impl App {
    /// Handle a key press event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputForm => self.handle_input_key(key),
            Focus::ResultsPane => self.handle_results_key(key),
        }
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Ctrl+C / Ctrl+Q: exit application
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.should_quit = true;
            return true;
        }

        // Shift+Tab: switch focus between the form and the results pane
        if key.code == KeyCode::BackTab {
            self.focus = match self.focus {
                Focus::InputForm => Focus::ResultsPane,
                Focus::ResultsPane => Focus::InputForm,
            };
            return true;
        }

        // Ctrl+R: discard the displayed result ("classify another")
        if ctrl && key.code == KeyCode::Char('r') {
            self.reset_result();
            return true;
        }

        // Ctrl+Y: copy the result JSON
        if ctrl && key.code == KeyCode::Char('y') {
            self.copy_result();
            return true;
        }

        // Ctrl+L: clear the draft (the only automatic-free way it empties)
        if ctrl && key.code == KeyCode::Char('l') {
            self.clear_draft();
            return true;
        }

        // Alt+1..Alt+4: copy the visible suggestion into the draft
        if key.modifiers.contains(KeyModifiers::ALT)
            && let KeyCode::Char(c @ '1'..='4') = key.code
        {
            self.apply_suggestion(c as usize - '1' as usize);
            return true;
        }

        false
    }

    /// Handle keys when the input form is focused
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            // Enter submits; Alt+Enter inserts a newline into the draft
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                self.textarea.insert_newline();
            }
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {
                self.textarea.input(key);
            }
        }
    }

    /// Handle keys when the results pane is focused
    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') => self.copy_result(),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_results_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_results_up(1),
            KeyCode::PageDown => self.scroll_results_down(10),
            KeyCode::PageUp => self.scroll_results_up(10),
            KeyCode::Char('g') | KeyCode::Home => self.results_scroll = 0,
            KeyCode::Esc => self.focus = Focus::InputForm,
            _ => {}
        }
    }
}
