//! Service layer for budgetdesk
//!
//! The fetch controller and submission workflow write to the shared state;
//! the view and chart functions derive read-only projections from it.

pub mod chart;
pub mod fetch;
pub mod submission;
pub mod view;

pub use chart::{aggregate, ChartRow, ChartSeries};
pub use fetch::{FetchController, LoadOutcome};
pub use submission::SubmissionWorkflow;
pub use view::{filter_and_sort, SortAccessor, SortKey};

use std::sync::Arc;

use crate::config::{CredentialStore, Settings};
use crate::error::DeskResult;
use crate::gateway::{BudgetGateway, HttpGateway};
use crate::models::Budget;
use crate::state::{AppState, SharedState};

/// State plus the two controllers that write to it
#[derive(Clone)]
pub struct BudgetDesk {
    state: SharedState,
    fetch: FetchController,
    submission: SubmissionWorkflow,
}

impl BudgetDesk {
    pub fn new(
        gateway: Arc<dyn BudgetGateway>,
        credentials: Arc<dyn CredentialStore>,
        settings: &Settings,
    ) -> Self {
        let fetch = FetchController::new(Arc::clone(&gateway), Arc::clone(&credentials));
        let submission = SubmissionWorkflow::new(
            gateway,
            credentials,
            fetch.clone(),
            settings.notification_duration(),
        );

        Self {
            state: AppState::shared(),
            fetch,
            submission,
        }
    }

    /// Wire up an HTTP gateway for the configured (or overridden) service URL
    pub fn connect(
        settings: &Settings,
        api_url: Option<&str>,
        credentials: Arc<dyn CredentialStore>,
    ) -> DeskResult<Self> {
        let base_url = api_url.unwrap_or(&settings.api_base_url);
        let gateway = HttpGateway::new(base_url, settings.request_timeout())?;
        Ok(Self::new(Arc::new(gateway), credentials, settings))
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub async fn load(&self) -> LoadOutcome {
        self.fetch.load(&self.state).await
    }

    pub async fn submit(&self) -> DeskResult<Option<Budget>> {
        self.submission.submit(&self.state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryCredentialStore;
    use crate::gateway::scripted::ScriptedGateway;
    use crate::models::DraftField;
    use crate::state::lock;
    use serde_json::json;

    #[tokio::test]
    async fn test_desk_shares_one_state() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .reply_create(Err(crate::gateway::GatewayError::Network("down".into())))
                .reply_list(Ok(json!([]))),
        );
        let desk = BudgetDesk::new(
            gateway,
            Arc::new(MemoryCredentialStore::new(None)),
            &Settings::default(),
        );

        lock(desk.state()).set_draft_field(DraftField::Department, "Ops");
        assert!(desk.submit().await.is_err());
        assert_eq!(lock(desk.state()).draft().department, "Ops");

        assert_eq!(desk.load().await, LoadOutcome::Applied { count: 0 });
        assert!(lock(desk.state()).error().is_none());
    }

    #[test]
    fn test_connect_uses_override() {
        let desk = BudgetDesk::connect(
            &Settings::default(),
            Some("http://budgets.internal:8080"),
            Arc::new(MemoryCredentialStore::new(None)),
        );
        assert!(desk.is_ok());
    }
}
