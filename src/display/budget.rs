//! Budget list formatting
//!
//! Renders the filtered view as a table, or as JSON for scripting.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{format_amount, or_dash, truncate};
use crate::error::DeskResult;
use crate::models::Budget;
use crate::services::SortKey;

const NOTES_WIDTH: usize = 30;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Budgeted")]
    amount: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Variance")]
    variance: String,
    #[tabled(rename = "Tone")]
    tone: &'static str,
    #[tabled(rename = "Forecast")]
    forecast: String,
    #[tabled(rename = "Best")]
    best: String,
    #[tabled(rename = "Worst")]
    worst: String,
    #[tabled(rename = "Expected")]
    expected: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

impl BudgetRow {
    fn new(budget: &Budget, currency: &str) -> Self {
        Self {
            department: budget.department.clone(),
            project: or_dash(budget.project.as_deref()).to_string(),
            period: budget.period.clone(),
            amount: format_amount(budget.amount, currency),
            actual: format_amount(budget.actual, currency),
            variance: format_amount(budget.variance, currency),
            tone: budget.variance_tone().label(),
            forecast: format_amount(budget.forecast, currency),
            best: format_amount(budget.scenarios.best, currency),
            worst: format_amount(budget.scenarios.worst, currency),
            expected: format_amount(budget.scenarios.expected, currency),
            notes: truncate(or_dash(budget.notes.as_deref()), NOTES_WIDTH),
        }
    }
}

/// Format the view as a table with a summary line
pub fn format_budget_list(view: &[Budget], total: usize, sort_key: SortKey, currency: &str) -> String {
    if view.is_empty() {
        return if total == 0 {
            "No budgets found.".to_string()
        } else {
            format!("No budgets match the search ({} total).", total)
        };
    }

    let rows: Vec<BudgetRow> = view.iter().map(|b| BudgetRow::new(b, currency)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!("Showing {} of {} budgets", view.len(), total));
    if sort_key != SortKey::None {
        output.push_str(&format!(", sorted by {}", sort_key));
    }
    output.push('\n');
    output
}

/// Format the view as pretty-printed JSON
pub fn format_budget_json(view: &[Budget]) -> DeskResult<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
