//! Fetch controller
//!
//! Retrieves the budget collection, validates its shape and publishes it
//! into the shared state.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::CredentialStore;
use crate::error::{DeskError, DeskResult};
use crate::gateway::{BudgetGateway, GatewayError};
use crate::models::Budget;
use crate::state::{lock, LoadingGuard, SharedState};

/// Shown when the read response has an unexpected shape
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from server";

/// Shown when the read fails and the server gave no message
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch budgets";

/// What a single `load` call did to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The collection was replaced
    Applied { count: usize },
    /// The error was set; the collection is unchanged
    Failed { message: String },
    /// A newer load started before this one finished; nothing was written
    Stale,
}

/// Loads budgets from the gateway into the state
#[derive(Clone)]
pub struct FetchController {
    gateway: Arc<dyn BudgetGateway>,
    credentials: Arc<dyn CredentialStore>,
}

impl FetchController {
    pub fn new(gateway: Arc<dyn BudgetGateway>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            gateway,
            credentials,
        }
    }

    /// Fetch the collection and replace the state's copy.
    ///
    /// The loading flag is raised for the duration and lowered on every
    /// exit path, including when the future is dropped. Failures end up
    /// in the state's error; nothing is propagated.
    pub async fn load(&self, state: &SharedState) -> LoadOutcome {
        let generation = lock(state).begin_load();
        let _loading = LoadingGuard::new(state, generation);
        debug!(generation, "loading budgets");

        let token = self.credentials.token();
        let fetched = match self
            .gateway
            .list_budgets(token.as_deref().map(String::as_str))
            .await
        {
            Ok(body) => extract_budgets(body),
            Err(err) => Err(fetch_failure(&err)),
        };

        let mut guard = lock(state);
        if !guard.is_current_load(generation) {
            debug!(generation, "discarding stale budget response");
            return LoadOutcome::Stale;
        }

        match fetched {
            Ok(budgets) => {
                let count = budgets.len();
                guard.replace_budgets(budgets);
                debug!(generation, count, "budgets loaded");
                LoadOutcome::Applied { count }
            }
            Err(err) => {
                let message = err.to_string();
                guard.set_error(message.clone());
                LoadOutcome::Failed { message }
            }
        }
    }
}

/// Accept a bare array or `{ "budgets": [...] }`; reject anything else
pub fn extract_budgets(body: Value) -> DeskResult<Vec<Budget>> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("budgets") {
            Some(Value::Array(items)) => items,
            _ => return Err(invalid_response("object without a budgets array")),
        },
        other => return Err(invalid_response(json_kind(&other))),
    };

    items
        .into_iter()
        .map(serde_json::from_value::<Budget>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid_response(&e.to_string()))
}

fn invalid_response(detail: &str) -> DeskError {
    warn!(detail, "rejected budget response");
    DeskError::Validation(INVALID_RESPONSE_MESSAGE.into())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn fetch_failure(err: &GatewayError) -> DeskError {
    warn!(status = ?err.status(), error = %err, "budget fetch failed");
    DeskError::transport(err.server_message().unwrap_or(FETCH_FAILED_MESSAGE))
}
