//! Contact form rendering

use super::field_renderer::{draw_field, ERROR_LINE_HEIGHT};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Single-line field height: bordered input plus annotation line
const FIELD_HEIGHT: u16 = 3 + ERROR_LINE_HEIGHT;

/// Draw the contact form and its submit button
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Get In Touch ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(FIELD_HEIGHT), // Subject
            Constraint::Min(4 + ERROR_LINE_HEIGHT), // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .horizontal_margin(1)
        .split(inner);

    let validator = &app.validator;
    let active_row = app.active_row();

    for name in FieldName::ALL {
        draw_field(
            frame,
            chunks[name.index()],
            validator.form().field(name),
            active_row == name.index(),
            validator.error(name),
        );
    }

    let button_area = centered_width(chunks[4], 24);
    render_submit_button(
        frame,
        button_area,
        validator.button(),
        app.is_submit_row_active(),
    );
}

/// Horizontally center a fixed-width rect inside `area`
fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
