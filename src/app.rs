//! Application state and core logic

use crate::config::FormConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::forms::{AddressSink, FieldName, LogSink, SubmissionController, SubmissionResult};
use crate::state::{AppState, FormButton};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Focus, dialogs and status text
    pub state: AppState,
    /// Owner of the four address fields
    pub controller: SubmissionController,
    /// Receives accepted addresses
    sink: Box<dyn AddressSink>,
    /// Render placeholder hints in empty fields
    pub show_hints: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance wired to the log sink
    pub fn new(config: &FormConfig) -> Self {
        Self::with_sink(config, Box::new(LogSink))
    }

    pub fn with_sink(config: &FormConfig, sink: Box<dyn AddressSink>) -> Self {
        Self {
            state: AppState::with_focus(config.initial_focus()),
            controller: SubmissionController::new()
                .with_reset_on_success(config.reset_on_success()),
            sink,
            show_hints: config.show_hints(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle one key press to completion
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Notification dialog is modal
        if self.state.has_notification() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notification();
            }
            return;
        }

        if Self::is_shortcut(&key, 's') {
            self.submit();
            return;
        }
        if Self::is_shortcut(&key, 'r') {
            self.clear_form();
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            _ if self.state.is_buttons_row_active() => self.handle_buttons_key(key),
            _ => self.handle_field_key(key),
        }
    }

    /// Pasted text lands at the end of the active field and goes through
    /// the field's mask as a whole
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_notification() {
            return;
        }
        let Some(field) = self.state.active_field() else {
            return;
        };

        let raw = format!("{}{}", self.controller.value(field), text.replace(['\r', '\n'], ""));
        self.controller.input(field, &raw);
    }

    /// Submit the form and queue the resulting notification
    pub fn submit(&mut self) -> SubmissionResult {
        let result = self
            .controller
            .submit(&mut self.state, self.sink.as_mut());

        // Jump to the first field that needs fixing
        if let Some(first) = result.failures().first() {
            self.state.active_form_field = first.field.index();
        }
        result
    }

    fn clear_form(&mut self) {
        self.controller.reset();
        self.state.active_form_field = FieldName::PostalCode.index();
        self.state.status_message = Some("Formulário limpo".to_string());
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.state.prev_button(),
            KeyCode::Right => self.state.next_button(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.selected_button {
                FormButton::Submit => {
                    self.submit();
                }
                FormButton::Clear => self.clear_form(),
            },
            _ => {}
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        let Some(field) = self.state.active_field() else {
            return;
        };

        match key.code {
            KeyCode::Enter => self.state.next_form_field(),
            KeyCode::Backspace => {
                self.controller.pop_char(field);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.push_char(field, c);
            }
            _ => {}
        }
    }

    fn is_shortcut(key: &KeyEvent, c: char) -> bool {
        key.code == KeyCode::Char(c)
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(SHORTCUT_MODIFIER))
    }
}
