//! Text bar chart of the scenario series

use super::format_amount;
use crate::services::{ChartRow, ChartSeries};

const BAR_WIDTH: usize = 40;

/// Create a simple bar of `width` cells scaled against `max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if !value.is_finite() || max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One group per row, one bar per series, all on a shared scale
pub fn format_chart(rows: &[ChartRow], currency: &str) -> String {
    if rows.is_empty() {
        return "No budgets to chart.".to_string();
    }

    let max_value = rows.iter().map(ChartRow::peak).fold(0.0, f64::max);
    let name_width = ChartSeries::ALL
        .iter()
        .map(|s| s.name().len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for row in rows {
        output.push_str(&row.label);
        output.push('\n');
        for series in ChartSeries::ALL {
            let value = row.value(series);
            output.push_str(&format!(
                "  {:<name_width$}  {}  {}\n",
                series.name(),
                format_bar(value, max_value, BAR_WIDTH),
                format_amount(value, currency),
                name_width = name_width,
            ));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::budget::fixtures::budget;
    use crate::services::aggregate;

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(100.0, 100.0, 4), "████");
        assert_eq!(format_bar(-5.0, 100.0, 4), "░░░░");
        assert_eq!(format_bar(f64::NAN, 100.0, 4), "░░░░");
        assert_eq!(format_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn test_chart_has_group_per_row() {
        let rows = aggregate(&[
            budget("1", "Ops", None, "2024-Q1", 1000.0),
            budget("2", "IT", None, "2024-Q2", 500.0),
        ]);
        let output = format_chart(&rows, "KWD");

        assert!(output.contains("Ops 2024-Q1"));
        assert!(output.contains("IT 2024-Q2"));
        for series in ChartSeries::ALL {
            assert_eq!(output.matches(series.name()).count(), 2);
        }
        assert!(output.contains("KWD 1,100.000"));
    }

    #[test]
    fn test_empty_chart() {
        assert_eq!(format_chart(&[], "KWD"), "No budgets to chart.");
    }
}
