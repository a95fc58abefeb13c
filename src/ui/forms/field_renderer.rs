//! Field rendering utilities for forms

use crate::state::forms::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line form field. The cursor always sits after the last
/// character, so typing appends and backspace removes from the end.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    show_hint: bool,
) {
    let accent = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_span = if field.is_empty() {
        let placeholder = if show_hint {
            field.name.placeholder()
        } else if is_active {
            ""
        } else {
            "(empty)"
        };
        Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(field.as_text(), style)
    };

    let mut spans = Vec::with_capacity(2);
    if is_active && field.is_empty() {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        spans.push(value_span);
    } else {
        spans.push(value_span);
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(accent);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
