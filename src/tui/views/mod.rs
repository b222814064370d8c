//! TUI Views module
//!
//! Contains the budget table, the scenario chart and the status bar, plus
//! the overlays (create dialog, toast) drawn on top.

pub mod budgets;
pub mod chart;
pub mod status_bar;

use std::sync::Arc;

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::{ActiveView, App};
use super::dialogs;
use super::layout::{top_right_rect, AppLayout};
use super::widgets::notification::kind_color;
use super::widgets::NotificationWidget;
use crate::notification::NotificationKind;
use crate::services::aggregate;
use crate::state::lock;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let shared = Arc::clone(app.desk.state());
    let state = lock(&shared);

    let view = state.view();
    app.clamp_selection(view.len());

    let layout = AppLayout::new(frame.area(), state.error().is_some());

    budgets::render_header(frame, app, &state, layout.header);

    match app.active_view {
        ActiveView::Table => budgets::render_table(frame, app, &state, &view, layout.main),
        ActiveView::Chart => chart::render(frame, app, &aggregate(&view), layout.main),
    }

    if let Some(error) = state.error() {
        render_alert(frame, error, layout.alert);
    }

    status_bar::render(frame, app, &state, layout.status_bar);

    if state.is_create_dialog_open() {
        dialogs::create_budget::render(frame, app, &state);
    }

    if let Some(notification) = state.success() {
        let area = top_right_rect(44, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render the inline error alert
fn render_alert(frame: &mut Frame, message: &str, area: Rect) {
    let kind = NotificationKind::Error;
    let color = kind_color(kind);
    let block = Block::default()
        .title(format!(" {} {} (x to dismiss) ", kind.icon(), kind.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let text = Paragraph::new(message)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(text, area);
}
