//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_address_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal dialogs go last so they overlay everything else
    if let Some(notification) = app.state.current_notification() {
        components::render_notification_dialog(frame, notification);
    }
}
