//! Toast notification widget
//!
//! Draws a [`Notification`] as a bordered box with a shrinking countdown
//! line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::notification::{Notification, NotificationKind};

/// Get the color for a notification kind
pub fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    /// Create a new notification widget
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.kind;
        let color = kind_color(kind);

        // Clear the area first
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", kind.icon(), kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let inner_width = area.width.saturating_sub(2) as f64;
        let remaining = (self.notification.remaining_fraction() * inner_width).round() as usize;

        let lines = vec![
            Line::from(self.notification.message.as_str()),
            Line::from(Span::styled(
                "─".repeat(remaining),
                Style::default().fg(color),
            )),
        ];

        Paragraph::new(lines)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_kind_colors() {
        assert_eq!(kind_color(NotificationKind::Success), Color::Green);
        assert_eq!(kind_color(NotificationKind::Error), Color::Red);
    }

    #[test]
    fn test_render_shows_title_and_message() {
        let notification = Notification::success("Budget created successfully!", Duration::from_secs(3));
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);

        NotificationWidget::new(&notification).render(area, &mut buf);

        let row = |y: u16| -> String { (0..40u16).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert!(row(0).contains("+ Success"));
        assert!(row(1).contains("Budget created successfully!"));
    }
}
