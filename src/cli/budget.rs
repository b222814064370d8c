//! Budget CLI commands
//!
//! Implements listing, charting and creating budgets against the remote
//! service. Each command loads the collection first, so output always
//! reflects the server.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_json, format_budget_list, format_chart};
use crate::error::{DeskError, DeskResult};
use crate::models::{DraftField, ScenarioField};
use crate::services::submission::SUCCESS_MESSAGE;
use crate::services::{BudgetDesk, LoadOutcome, SortKey};
use crate::state::lock;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List budgets
    #[command(alias = "ls")]
    List {
        /// Only show budgets whose department, project or period contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Column to sort by (department, project, period, amount, actual, variance, forecast)
        #[arg(long, default_value = "none")]
        sort: SortKey,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the scenario chart
    Chart {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long, default_value = "none")]
        sort: SortKey,
    },

    /// Create a new budget
    Add {
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        project: Option<String>,
        /// Fiscal period label, e.g. "2024-Q2"
        #[arg(long)]
        period: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        forecast: Option<String>,
        /// Best-case scenario
        #[arg(long, allow_hyphen_values = true)]
        best: Option<String>,
        /// Worst-case scenario
        #[arg(long, allow_hyphen_values = true)]
        worst: Option<String>,
        /// Expected scenario
        #[arg(long, allow_hyphen_values = true)]
        expected: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}

/// Handle a budget command
pub async fn handle_budget_command(
    desk: &BudgetDesk,
    settings: &Settings,
    cmd: BudgetCommands,
) -> DeskResult<()> {
    match cmd {
        BudgetCommands::List { search, sort, json } => {
            load(desk).await?;
            apply_view_inputs(desk, search, sort);
            let state = lock(desk.state());
            let view = state.view();

            if json {
                println!("{}", format_budget_json(&view)?);
            } else {
                print!(
                    "{}",
                    format_budget_list(&view, state.total_count(), sort, &settings.currency_code)
                );
                if view.is_empty() {
                    println!();
                }
            }
        }

        BudgetCommands::Chart { search, sort } => {
            load(desk).await?;
            apply_view_inputs(desk, search, sort);
            let state = lock(desk.state());
            println!("{}", format_chart(&state.chart_rows(), &settings.currency_code));
        }

        BudgetCommands::Add {
            department,
            project,
            period,
            amount,
            forecast,
            best,
            worst,
            expected,
            notes,
        } => {
            let fields = [
                (DraftField::Department, department),
                (DraftField::Project, project),
                (DraftField::Period, period),
                (DraftField::Amount, amount),
                (DraftField::Forecast, forecast),
                (DraftField::Notes, notes),
            ];
            let scenarios = [
                (ScenarioField::Best, best),
                (ScenarioField::Worst, worst),
                (ScenarioField::Expected, expected),
            ];

            let missing = {
                let mut state = lock(desk.state());
                state.open_create_dialog();
                for (field, value) in fields {
                    state.set_draft_field(field, value.unwrap_or_default());
                }
                for (field, value) in scenarios {
                    state.set_draft_scenario_field(field, value.unwrap_or_default());
                }
                state.draft().missing_required()
            };
            if !missing.is_empty() {
                return Err(DeskError::InvalidInput(format!(
                    "Missing required fields: {}",
                    missing.join(", ")
                )));
            }

            let created = desk.submit().await?;

            let state = lock(desk.state());
            let message = state
                .success()
                .map(|n| n.message.clone())
                .unwrap_or_else(|| SUCCESS_MESSAGE.to_string());
            println!("{}", message);
            if let Some(budget) = created {
                println!("  ID:         {}", budget.id);
                println!("  Department: {}", budget.department);
                println!("  Period:     {}", budget.period);
            }
            match state.error() {
                Some(err) => eprintln!("Warning: could not refresh budgets: {}", err),
                None => println!("{} budgets on the server.", state.total_count()),
            }
        }
    }

    Ok(())
}

/// Load the collection, turning a failed load into an error
async fn load(desk: &BudgetDesk) -> DeskResult<usize> {
    match desk.load().await {
        LoadOutcome::Applied { count } => Ok(count),
        LoadOutcome::Failed { message } => Err(DeskError::transport(message)),
        LoadOutcome::Stale => Err(DeskError::transport("Load superseded by a newer request")),
    }
}

fn apply_view_inputs(desk: &BudgetDesk, search: Option<String>, sort: SortKey) {
    let mut state = lock(desk.state());
    state.set_search(search.unwrap_or_default());
    state.set_sort_key(sort);
}
