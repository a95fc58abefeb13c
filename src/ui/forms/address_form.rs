//! Address form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::forms::FieldName;
use crate::state::FormButton;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one bordered single-line field
const FIELD_HEIGHT: u16 = 3;

/// Draw the address form with its action sidebar
pub fn draw_address_form(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form_focused = !app.state.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Cadastro de Endereço ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // CEP
            Constraint::Length(FIELD_HEIGHT), // Logradouro
            Constraint::Length(FIELD_HEIGHT), // Número
            Constraint::Length(FIELD_HEIGHT), // UF
            Constraint::Length(2),            // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let active = app.state.active_field();
    for field in FieldName::ALL {
        draw_field(
            frame,
            chunks[field.index()],
            app.controller.form().field(field),
            active == Some(field),
            app.show_hints,
        );
    }

    let help = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Tab next field | {SUBMIT_SHORTCUT} submit | {CLEAR_SHORTCUT} clear"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "CEP and UF are formatted as you type.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(help, chunks[4]);
}

fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.is_buttons_row_active();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Clear
            Constraint::Min(0),
        ])
        .split(inner_area);

    for (i, button) in FormButton::ALL.into_iter().enumerate() {
        let color = match button {
            FormButton::Submit => Color::Green,
            FormButton::Clear => Color::Gray,
        };
        render_action_button(
            frame,
            button_chunks[i],
            button.label(),
            is_focused && app.state.selected_button == button,
            Some(color),
        );
    }
}
