//! Layout components (form area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form grows on large terminals
const MAX_FORM_WIDTH: u16 = 72;

/// Split the screen into the centered form area and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = chunks[0];
    let width = content.width.min(MAX_FORM_WIDTH);
    let form_area = Rect {
        x: content.x + (content.width - width) / 2,
        width,
        ..content
    };

    (form_area, chunks[1])
}

/// Key hints for the focused row
fn get_hints(app: &App) -> String {
    if app.validator.button().is_busy() {
        " Sending... ".to_string()
    } else if app.is_submit_row_active() {
        format!(" Enter: send | {SUBMIT_SHORTCUT}: send | Tab: next | Esc: quit ")
    } else if app.validator.form().is_active_field_multiline() {
        format!(" Enter: newline | Tab: next | {SUBMIT_SHORTCUT}: send | Esc: quit ")
    } else {
        format!(" Tab/Enter: next | Shift+Tab: prev | {SUBMIT_SHORTCUT}: send | Esc: quit ")
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::LightRed)));
    }

    let errors = app.validator.error_count();
    if errors > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("✗ {errors}"),
            Style::default().fg(Color::Red),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
