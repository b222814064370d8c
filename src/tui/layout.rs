//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, main panel, error alert,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title, totals and search box
    pub header: Rect,
    /// Table or chart
    pub main: Rect,
    /// Inline error alert; zero height when there is no error
    pub alert: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, show_alert: bool) -> Self {
        let alert_height = if show_alert { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Header
                Constraint::Min(5),               // Main area
                Constraint::Length(alert_height), // Error alert
                Constraint::Length(1),            // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            main: chunks[1],
            alert: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size rect in the top-right corner (toasts)
pub fn top_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_collapses_without_error() {
        let area = Rect::new(0, 0, 100, 40);

        let plain = AppLayout::new(area, false);
        assert_eq!(plain.alert.height, 0);
        assert_eq!(plain.status_bar.y, 39);

        let with_alert = AppLayout::new(area, true);
        assert_eq!(with_alert.alert.height, 3);
        assert!(with_alert.main.height < plain.main.height);
    }

    #[test]
    fn test_top_right_rect_fits() {
        let area = Rect::new(0, 0, 30, 10);
        let toast = top_right_rect(40, 3, area);
        assert_eq!(toast, Rect::new(0, 0, 30, 3));

        let toast = top_right_rect(20, 3, area);
        assert_eq!(toast.x, 10);
    }
}
