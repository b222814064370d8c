//! Scenario chart view
//!
//! Grouped bar chart: one group per budget in the current view, one bar
//! per series.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_amount;
use crate::services::{ChartRow, ChartSeries};
use crate::tui::app::App;

/// Bar height for a chart value; negative and non-finite values draw nothing
fn bar_value(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

fn legend() -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for series in ChartSeries::ALL {
        spans.push(Span::styled("■ ", Style::default().fg(series.color())));
        spans.push(Span::raw(format!("{}  ", series.name())));
    }
    Line::from(spans)
}

/// Render the chart of the current view
pub fn render(frame: &mut Frame, app: &App, rows: &[ChartRow], area: Rect) {
    let peak = rows.iter().map(ChartRow::peak).fold(0.0, f64::max);
    let block = Block::default()
        .title(format!(" Scenarios (peak {}) ", format_amount(peak, &app.currency)))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(legend())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if rows.is_empty() {
        let text = Paragraph::new("No budgets to chart.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(2)
        .bar_gap(0)
        .group_gap(3);

    for row in rows {
        let bars: Vec<Bar> = ChartSeries::ALL
            .iter()
            .map(|series| {
                Bar::default()
                    .value(bar_value(row.value(*series)))
                    .text_value(String::new())
                    .style(Style::default().fg(series.color()))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(row.label.as_str()))
                .bars(&bars),
        );
    }

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_value_clamps() {
        assert_eq!(bar_value(1099.6), 1100);
        assert_eq!(bar_value(-5.0), 0);
        assert_eq!(bar_value(f64::NAN), 0);
        assert_eq!(bar_value(f64::INFINITY), 0);
    }

    #[test]
    fn test_legend_names_every_series() {
        let legend: String = legend().spans.iter().map(|s| s.content.to_string()).collect();
        for series in ChartSeries::ALL {
            assert!(legend.contains(series.name()));
        }
    }
}
