//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod notification;

use crate::app::App;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (form_area, status_area) = layout::create_layout(area);

    forms::draw_contact_form(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Toast goes last so it overlays the form
    if let Some(toast) = app.validator.notification() {
        notification::draw(frame, area, toast, Instant::now());
    }
}
