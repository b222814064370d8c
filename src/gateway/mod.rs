//! Remote budget gateway
//!
//! The I/O boundary to the budget service. Implementations only move
//! bytes: shape validation and error wording belong to the controllers in
//! [`crate::services`].

mod http;

#[cfg(test)]
pub(crate) mod scripted;

pub use http::HttpGateway;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::CreateBudgetRequest;

/// Failure talking to the budget service
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The server answered with a non-success status
    #[error("server responded with status {status}")]
    Status { status: u16, body: Option<Value> },

    /// The request never produced a response
    #[error("request failed: {0}")]
    Network(String),
}

impl GatewayError {
    /// Human-readable `message` from the server's error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                body: Some(body), ..
            } => body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) => None,
        }
    }
}

/// Authenticated access to the budget collection endpoint
#[async_trait]
pub trait BudgetGateway: Send + Sync {
    /// `GET /api/budgets`; returns the raw decoded body
    async fn list_budgets(&self, token: Option<&str>) -> Result<Value, GatewayError>;

    /// `POST /api/budgets`; returns the raw decoded body
    async fn create_budget(
        &self,
        token: Option<&str>,
        request: &CreateBudgetRequest,
    ) -> Result<Value, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_message() {
        let err = GatewayError::Status {
            status: 401,
            body: Some(json!({"message": "Unauthorized"})),
        };
        assert_eq!(err.server_message(), Some("Unauthorized"));
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_server_message_absent_or_blank() {
        let no_body = GatewayError::Status {
            status: 500,
            body: None,
        };
        let blank = GatewayError::Status {
            status: 500,
            body: Some(json!({"message": ""})),
        };
        let not_text = GatewayError::Status {
            status: 500,
            body: Some(json!({"message": 42})),
        };
        let network = GatewayError::Network("connection refused".into());

        assert_eq!(no_body.server_message(), None);
        assert_eq!(blank.server_message(), None);
        assert_eq!(not_text.server_message(), None);
        assert_eq!(network.server_message(), None);
        assert_eq!(network.status(), None);
    }
}
