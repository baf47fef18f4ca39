use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::widgets::popup;

use super::state::{NotificationKind, NotificationState};

const NOTIFICATION_PADDING: u16 = 4;
const NOTIFICATION_HEIGHT: u16 = 3;

/// Render the active notification in the top-right corner, if any
pub fn render_notification(state: &NotificationState, frame: &mut Frame) {
    let Some((message, kind)) = state.current() else {
        return;
    };

    let color = match kind {
        NotificationKind::Info => Color::Blue,
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    };

    let width = (message.width() as u16) + NOTIFICATION_PADDING;
    let area = popup::popup_top_right(frame.area(), width, NOTIFICATION_HEIGHT);

    popup::clear_area(frame, area);

    let paragraph = Paragraph::new(format!(" {message} ")).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(paragraph, area);
}
