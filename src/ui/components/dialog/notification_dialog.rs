//! Submit outcome dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::forms::Notification;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the notification of the last submit attempt as a modal overlay
pub fn render_notification_dialog(frame: &mut Frame, notification: &Notification) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    let accent = if notification.is_success() {
        Color::Green
    } else {
        Color::Red
    };
    let body = notification.body();

    render_dialog(
        frame,
        DialogConfig {
            title: notification.title(),
            accent,
            message: &body,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
