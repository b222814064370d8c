//! Submission workflow
//!
//! Turns the state's draft into a create request, sends it, and on success
//! closes the dialog and reloads the collection from the server.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::fetch::FetchController;
use crate::config::CredentialStore;
use crate::error::{DeskError, DeskResult};
use crate::gateway::BudgetGateway;
use crate::models::{Budget, CreateBudgetRequest};
use crate::notification::Notification;
use crate::state::{lock, SharedState, SubmittingGuard};

pub const SUCCESS_MESSAGE: &str = "Budget created successfully!";

/// Shown when the create fails and the server gave no message
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to create budget";

/// Sends drafts to the gateway
#[derive(Clone)]
pub struct SubmissionWorkflow {
    gateway: Arc<dyn BudgetGateway>,
    credentials: Arc<dyn CredentialStore>,
    fetch: FetchController,
    notification_duration: Duration,
}

impl SubmissionWorkflow {
    pub fn new(
        gateway: Arc<dyn BudgetGateway>,
        credentials: Arc<dyn CredentialStore>,
        fetch: FetchController,
        notification_duration: Duration,
    ) -> Self {
        Self {
            gateway,
            credentials,
            fetch,
            notification_duration,
        }
    }

    /// Submit the current draft.
    ///
    /// Refused with [`DeskError::SubmissionInProgress`] while another
    /// submission is running. On success the draft is reset, the dialog
    /// closed and the collection reloaded; the created entry is returned
    /// when the server echoes one back. On failure the draft is kept and
    /// the server's message (or a generic one) becomes the state error.
    pub async fn submit(&self, state: &SharedState) -> DeskResult<Option<Budget>> {
        let request = {
            let mut guard = lock(state);
            guard.begin_submit()?;
            CreateBudgetRequest::from_draft(guard.draft())
        };
        let submitting = SubmittingGuard::new(state);
        debug!(department = %request.department, period = %request.period, "submitting budget");

        let token = self.credentials.token();
        let result = self
            .gateway
            .create_budget(token.as_deref().map(String::as_str), &request)
            .await;

        match result {
            Ok(body) => {
                let created = serde_json::from_value::<Budget>(body).ok();
                info!(
                    id = created.as_ref().map(|b| b.id.as_str()).unwrap_or("-"),
                    department = %request.department,
                    "budget created"
                );

                lock(state).submit_succeeded(Notification::success(
                    SUCCESS_MESSAGE,
                    self.notification_duration,
                ));
                drop(submitting);

                self.fetch.load(state).await;
                Ok(created)
            }
            Err(err) => {
                warn!(status = ?err.status(), error = %err, "budget create failed");
                let message = err
                    .server_message()
                    .unwrap_or(SUBMIT_FAILED_MESSAGE)
                    .to_string();
                lock(state).submit_failed(message.clone());
                Err(DeskError::Submission(message))
            }
        }
    }
}
