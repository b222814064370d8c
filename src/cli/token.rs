//! Token CLI commands
//!
//! Manage the bearer token sent with every request to the budget service.

use clap::Subcommand;
use zeroize::Zeroizing;

use crate::config::{BudgetDeskPaths, CredentialStore, FileCredentialStore};
use crate::error::{DeskError, DeskResult};

/// Token management commands
#[derive(Subcommand)]
pub enum TokenCommands {
    /// Store a bearer token (prompts when no value is given)
    Set {
        /// Token value; omit to enter it without echo
        token: Option<String>,
    },

    /// Remove the stored token
    Clear,

    /// Show whether a token is stored
    Status,
}

/// Handle token commands
pub fn handle_token_command(paths: &BudgetDeskPaths, cmd: TokenCommands) -> DeskResult<()> {
    let store = FileCredentialStore::new(paths);

    match cmd {
        TokenCommands::Set { token } => {
            let token = match token {
                Some(token) => Zeroizing::new(token),
                None => prompt_token()?,
            };
            store.save(&token)?;
            println!("Token saved to {}", paths.token_file().display());
        }
        TokenCommands::Clear => {
            if store.clear()? {
                println!("Token removed.");
            } else {
                println!("No token stored.");
            }
        }
        TokenCommands::Status => match store.token() {
            Some(token) => println!("Token stored ({} characters).", token.chars().count()),
            None => println!("No token stored. Run 'budgetdesk token set' to add one."),
        },
    }

    Ok(())
}

/// Prompt for a token (hidden input)
fn prompt_token() -> DeskResult<Zeroizing<String>> {
    rpassword::prompt_password("Bearer token: ")
        .map(Zeroizing::new)
        .map_err(|e| DeskError::Credentials(format!("Failed to read token: {}", e)))
}
