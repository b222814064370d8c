//! Chart rows derived from the current view

use ratatui::style::Color;

use crate::models::Budget;

/// One group in the scenario chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    /// `department + " " + period`
    pub label: String,
    pub budget: f64,
    pub actual: f64,
    pub forecast: f64,
    pub best: f64,
    pub worst: f64,
    pub expected: f64,
}

impl ChartRow {
    pub fn from_budget(budget: &Budget) -> Self {
        Self {
            label: format!("{} {}", budget.department, budget.period),
            budget: budget.amount,
            actual: budget.actual,
            forecast: budget.forecast,
            best: budget.scenarios.best,
            worst: budget.scenarios.worst,
            expected: budget.scenarios.expected,
        }
    }

    pub fn value(&self, series: ChartSeries) -> f64 {
        match series {
            ChartSeries::Budget => self.budget,
            ChartSeries::Actual => self.actual,
            ChartSeries::Forecast => self.forecast,
            ChartSeries::Best => self.best,
            ChartSeries::Worst => self.worst,
            ChartSeries::Expected => self.expected,
        }
    }

    /// Largest finite value across the six series, or 0
    pub fn peak(&self) -> f64 {
        ChartSeries::ALL
            .iter()
            .map(|s| self.value(*s))
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}

/// The six bars drawn per row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSeries {
    Budget,
    Actual,
    Forecast,
    Best,
    Worst,
    Expected,
}

impl ChartSeries {
    pub const ALL: [ChartSeries; 6] = [
        Self::Budget,
        Self::Actual,
        Self::Forecast,
        Self::Best,
        Self::Worst,
        Self::Expected,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Actual => "Actual",
            Self::Forecast => "Forecast",
            Self::Best => "Best",
            Self::Worst => "Worst",
            Self::Expected => "Expected",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Budget => Color::Blue,
            Self::Actual => Color::Green,
            Self::Forecast => Color::Yellow,
            Self::Best => Color::Cyan,
            Self::Worst => Color::Red,
            Self::Expected => Color::Magenta,
        }
    }
}

/// One chart row per entry, in view order
pub fn aggregate(view: &[Budget]) -> Vec<ChartRow> {
    view.iter().map(ChartRow::from_budget).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::budget::fixtures::budget;

    #[test]
    fn test_one_row_per_entry_in_order() {
        let view = vec![
            budget("1", "Ops", None, "2024-Q1", 1000.0),
            budget("2", "IT", Some("Cloud"), "2024-Q2", 500.0),
        ];
        let rows = aggregate(&view);

        assert_eq!(rows.len(), view.len());
        assert_eq!(rows[0].label, "Ops 2024-Q1");
        assert_eq!(rows[1].label, "IT 2024-Q2");
    }

    #[test]
    fn test_series_values() {
        let entry = budget("1", "Ops", None, "2024-Q1", 1000.0);
        let row = ChartRow::from_budget(&entry);

        assert_eq!(row.value(ChartSeries::Budget), 1000.0);
        assert_eq!(row.value(ChartSeries::Actual), entry.actual);
        assert_eq!(row.value(ChartSeries::Forecast), entry.forecast);
        assert_eq!(row.value(ChartSeries::Best), entry.scenarios.best);
        assert_eq!(row.value(ChartSeries::Worst), entry.scenarios.worst);
        assert_eq!(row.value(ChartSeries::Expected), entry.scenarios.expected);
        assert_eq!(row.peak(), entry.scenarios.best);
    }

    #[test]
    fn test_empty_view() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_peak_ignores_nan() {
        let mut entry = budget("1", "Ops", None, "2024-Q1", 100.0);
        entry.scenarios.best = f64::NAN;
        let row = ChartRow::from_budget(&entry);
        assert_eq!(row.peak(), 100.0);
    }
}
