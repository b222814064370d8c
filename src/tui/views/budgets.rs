//! Budget table view
//!
//! Header with the total count and search box, and the table of the
//! filtered, sorted view with variance colouring.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{format_amount, or_dash};
use crate::models::{Budget, VarianceTone};
use crate::services::SortKey;
use crate::state::AppState;
use crate::tui::app::{App, InputMode};

/// Column headers and the sort key each one orders by
const COLUMNS: [(&str, SortKey); 11] = [
    ("Department", SortKey::Department),
    ("Project", SortKey::Project),
    ("Period", SortKey::Period),
    ("Budgeted", SortKey::Amount),
    ("Actual", SortKey::Actual),
    ("Variance", SortKey::Variance),
    ("Forecast", SortKey::Forecast),
    ("Best", SortKey::None),
    ("Worst", SortKey::None),
    ("Expected", SortKey::None),
    ("Notes", SortKey::None),
];

/// Colour for a variance figure
pub fn tone_color(tone: VarianceTone) -> Color {
    match tone {
        VarianceTone::Favorable => Color::Green,
        VarianceTone::Unfavorable => Color::Red,
        VarianceTone::Neutral => Color::White,
    }
}

/// Render the title bar with total count and search box
pub fn render_header(frame: &mut Frame, app: &mut App, state: &AppState, area: Rect) {
    let block = Block::default()
        .title(" Budgets ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(10)])
        .split(inner);

    let total = Line::from(vec![
        Span::styled("Total: ", Style::default().fg(Color::White)),
        Span::styled(
            state.total_count().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" budgets"),
    ]);
    frame.render_widget(Paragraph::new(total), chunks[0]);

    app.search_input.focused = app.input_mode == InputMode::Search;
    frame.render_widget(&app.search_input, chunks[1]);
}

fn budget_row(budget: &Budget, currency: &str) -> Row<'static> {
    let variance_style = Style::default()
        .fg(tone_color(budget.variance_tone()))
        .add_modifier(Modifier::BOLD);

    Row::new(vec![
        Cell::from(budget.department.clone()),
        Cell::from(or_dash(budget.project.as_deref()).to_string()),
        Cell::from(budget.period.clone()),
        Cell::from(format_amount(budget.amount, currency)),
        Cell::from(format_amount(budget.actual, currency)),
        Cell::from(format_amount(budget.variance, currency)).style(variance_style),
        Cell::from(format_amount(budget.forecast, currency)),
        Cell::from(format_amount(budget.scenarios.best, currency)),
        Cell::from(format_amount(budget.scenarios.worst, currency)),
        Cell::from(format_amount(budget.scenarios.expected, currency)),
        Cell::from(or_dash(budget.notes.as_deref()).to_string()),
    ])
}

/// Render the budget table
pub fn render_table(frame: &mut Frame, app: &mut App, state: &AppState, view: &[Budget], area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if view.is_empty() {
        let message = if state.is_loading() {
            "Loading budgets..."
        } else if state.total_count() > 0 {
            "No budgets match the search."
        } else {
            "No budgets yet. Press 'n' to create one."
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let sort_key = state.sort_key();
    let header = Row::new(
        COLUMNS
            .iter()
            .map(|(title, key)| {
                let sorted = *key != SortKey::None && *key == sort_key;
                let title = if sorted {
                    format!("{} ▲", title)
                } else {
                    title.to_string()
                };
                let style = if sorted {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                Cell::from(title).style(style)
            })
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = view
        .iter()
        .enumerate()
        .map(|(i, budget)| {
            let row = budget_row(budget, &app.currency);
            if i % 2 == 0 {
                row
            } else {
                row.style(Style::default().bg(Color::Rgb(30, 30, 30)))
            }
        })
        .collect();

    let widths = [
        Constraint::Min(12),    // Department
        Constraint::Min(10),    // Project
        Constraint::Length(9),  // Period
        Constraint::Length(16), // Budgeted
        Constraint::Length(16), // Actual
        Constraint::Length(16), // Variance
        Constraint::Length(16), // Forecast
        Constraint::Length(16), // Best
        Constraint::Length(16), // Worst
        Constraint::Length(16), // Expected
        Constraint::Min(10),    // Notes
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    table_state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut table_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_colors() {
        assert_eq!(tone_color(VarianceTone::Favorable), Color::Green);
        assert_eq!(tone_color(VarianceTone::Unfavorable), Color::Red);
        assert_eq!(tone_color(VarianceTone::Neutral), Color::White);
    }

    #[test]
    fn test_sortable_columns_cover_every_key() {
        for key in SortKey::ALL.iter().filter(|k| **k != SortKey::None) {
            assert!(COLUMNS.iter().any(|(_, k)| k == key), "{} has no column", key);
        }
    }
}
