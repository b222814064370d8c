use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budgetdesk::cli::{handle_budget_command, handle_token_command, BudgetCommands, TokenCommands};
use budgetdesk::config::{BudgetDeskPaths, CredentialStore, FileCredentialStore, Settings};
use budgetdesk::logging::init_tracing;
use budgetdesk::services::BudgetDesk;

#[derive(Parser)]
#[command(
    name = "budgetdesk",
    version,
    about = "Browse, chart and create department budgets",
    long_about = "budgetdesk talks to a remote budget service. It lists budgets with \
                  search and sorting, charts budget against actual, forecast and \
                  scenario figures, and creates new budgets from the command line \
                  or an interactive terminal interface."
)]
struct Cli {
    /// Budget service base URL for this run
    #[arg(long, global = true, env = "BUDGETDESK_API_URL")]
    api_url: Option<String>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Bearer token management
    #[command(subcommand)]
    Token(TokenCommands),

    /// Show or change configuration
    Config {
        /// Persist a new budget service base URL
        #[arg(long, value_name = "URL")]
        set_api_url: Option<String>,
        /// Persist the currency code used for amounts
        #[arg(long, value_name = "CODE")]
        set_currency: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetDeskPaths::new()?;
    let log_file = matches!(cli.command, Some(Commands::Tui)).then(|| paths.log_file());
    init_tracing(cli.verbose, log_file.as_deref())?;

    let mut settings = Settings::load_or_create(&paths)?;
    let credentials = Arc::new(FileCredentialStore::new(&paths));

    match cli.command {
        Some(Commands::Tui) => {
            let desk = BudgetDesk::connect(&settings, cli.api_url.as_deref(), credentials)?;
            budgetdesk::tui::run_tui(desk, &settings).await?;
        }
        Some(Commands::Budget(cmd)) => {
            let desk = BudgetDesk::connect(&settings, cli.api_url.as_deref(), credentials)?;
            handle_budget_command(&desk, &settings, cmd).await?;
        }
        Some(Commands::Token(cmd)) => {
            handle_token_command(&paths, cmd)?;
        }
        Some(Commands::Config {
            set_api_url,
            set_currency,
        }) => {
            let changed = set_api_url.is_some() || set_currency.is_some();
            if let Some(url) = set_api_url {
                settings.api_base_url = url.trim().to_string();
            }
            if let Some(code) = set_currency {
                settings.currency_code = code.trim().to_uppercase();
            }
            if changed {
                settings.save(&paths)?;
                println!("Configuration saved.");
                println!();
            }

            println!("budgetdesk Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  API base URL:   {}", settings.api_base_url);
            if let Some(url) = cli.api_url.as_deref() {
                println!("  (overridden for this run: {})", url);
            }
            println!("  Currency:       {}", settings.currency_code);
            println!("  Toast duration: {} ms", settings.notification_duration_ms);
            match settings.request_timeout_secs {
                Some(secs) => println!("  Request timeout: {} s", secs),
                None => println!("  Request timeout: transport default"),
            }
            let token = if credentials.token().is_some() {
                "stored"
            } else {
                "not set"
            };
            println!("  Token:          {}", token);
        }
        None => {
            println!("budgetdesk - Department budgets from the terminal");
            println!();
            println!("Run 'budgetdesk --help' for usage information.");
            println!("Run 'budgetdesk tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
