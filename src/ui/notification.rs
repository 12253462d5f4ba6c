//! Toast notification rendering

use crate::state::{Notification, NotificationKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Maximum toast width in columns
const MAX_WIDTH: u16 = 40;
/// Rows from the top of the screen
const TOP_OFFSET: u16 = 1;
/// Columns kept free on the right edge
const RIGHT_MARGIN: u16 = 2;

fn background(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    }
}

/// Where the toast sits for a given slide offset, or `None` when fully off-screen
pub fn toast_area(area: Rect, message: &str, slide_offset: f32) -> Option<Rect> {
    let width = MAX_WIDTH.min(area.width.saturating_sub(RIGHT_MARGIN));
    if width < 4 {
        return None;
    }
    let inner_width = width.saturating_sub(4).max(1) as usize;
    let text_rows = message.chars().count().div_ceil(inner_width).max(1) as u16;
    let height = (text_rows + 2).min(area.height.saturating_sub(TOP_OFFSET));

    let resting_x = area.x + area.width - RIGHT_MARGIN - width;
    let shift = (slide_offset.clamp(0.0, 1.0) * (width + RIGHT_MARGIN) as f32).round() as u16;
    let x = resting_x + shift;
    let right_edge = area.x + area.width;
    if x >= right_edge {
        return None;
    }

    Some(Rect {
        x,
        y: area.y + TOP_OFFSET,
        width: width.min(right_edge - x),
        height,
    })
}

/// Draw the notification in the top-right corner, sliding per its phase
pub fn draw(frame: &mut Frame, area: Rect, notification: &Notification, now: Instant) {
    let offset = notification.slide_offset(now);
    let Some(toast) = toast_area(area, &notification.message, offset) else {
        return;
    };

    let style = Style::default()
        .bg(background(notification.kind))
        .fg(Color::White);
    let paragraph = Paragraph::new(notification.message.as_str())
        .style(style)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(style));

    frame.render_widget(Clear, toast);
    frame.render_widget(paragraph, toast);
}
