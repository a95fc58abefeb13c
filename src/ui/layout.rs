//! Layout components (content area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let focus = match app.state.active_field() {
        Some(field) => field.label(),
        None => "Actions",
    };
    spans.push(Span::styled(
        format!(" {focus} "),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    ));

    let hints = if app.state.has_notification() {
        " Enter/Esc: dismiss"
    } else if app.state.is_buttons_row_active() {
        " ←/→: choose | Enter: press | Tab: fields | Esc: quit"
    } else {
        " Tab/↑↓: move | Enter: next | Esc: quit"
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
