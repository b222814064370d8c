//! Status bar view
//!
//! Shows loading and submission state, the sort key, the last refresh time
//! and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::AppState;
use crate::tui::app::App;

const HINTS: &str = " q:Quit  /:Search  s:Sort  c:Chart  n:New  r:Reload ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, state: &AppState, area: Rect) {
    let mut spans = vec![];

    let (activity, color) = if state.is_submitting() {
        ("Submitting", Color::Yellow)
    } else if state.is_loading() {
        ("Loading", Color::Yellow)
    } else {
        ("Ready", Color::Green)
    };
    spans.push(Span::styled(
        format!(" {} ", activity),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        app.active_view.label(),
        Style::default().fg(Color::Cyan),
    ));

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        format!("Sort: {}", state.sort_key()),
        Style::default().fg(Color::White),
    ));

    if let Some(loaded_at) = state.last_loaded_at() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("Updated {}", loaded_at.format("%H:%M:%S")),
            Style::default().fg(Color::White),
        ));
    }

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
