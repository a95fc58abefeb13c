//! Screen state for the address form: focus, buttons and pending dialogs

use super::forms::{FieldName, Notification, Notifier};
use std::collections::VecDeque;

/// Rows the focus cycles through: the four fields plus the buttons row
pub const FORM_ROW_COUNT: usize = FieldName::ALL.len() + 1;
/// Index of the buttons row
pub const BUTTONS_ROW: usize = FieldName::ALL.len();

/// Buttons in the action panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Clear,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Submit, FormButton::Clear];

    pub fn label(self) -> &'static str {
        match self {
            FormButton::Submit => "Cadastrar",
            FormButton::Clear => "Limpar",
        }
    }

    fn toggle(self) -> Self {
        match self {
            FormButton::Submit => FormButton::Clear,
            FormButton::Clear => FormButton::Submit,
        }
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    /// Focused row: `0..BUTTONS_ROW` is a field, `BUTTONS_ROW` the buttons
    pub active_form_field: usize,
    pub selected_button: FormButton,
    /// Notifications waiting to be dismissed, oldest first
    notifications: VecDeque<Notification>,
    /// Short text for the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn with_focus(field: FieldName) -> Self {
        Self {
            active_form_field: field.index(),
            ..Self::default()
        }
    }

    /// The focused field, or `None` when the buttons row is active
    pub fn active_field(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_form_field)
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_form_field == BUTTONS_ROW
    }

    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % FORM_ROW_COUNT;
    }

    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = FORM_ROW_COUNT - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn next_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }

    pub fn prev_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }

    pub fn has_notification(&self) -> bool {
        !self.notifications.is_empty()
    }

    /// Notification currently shown as a modal dialog
    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.pop_front();
    }
}

impl Notifier for AppState {
    fn notify(&mut self, notification: Notification) {
        self.status_message = Some(if notification.is_success() {
            "Endereço cadastrado".to_string()
        } else {
            "Corrija os campos destacados".to_string()
        });
        self.notifications.push_back(notification);
    }
}
