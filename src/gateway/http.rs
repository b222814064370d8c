//! HTTP gateway
//!
//! Talks to the budget service over reqwest. Error bodies are decoded when
//! they are JSON so the controllers can surface the server's `message`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, warn};

use super::{BudgetGateway, GatewayError};
use crate::error::{DeskError, DeskResult};
use crate::models::CreateBudgetRequest;

/// reqwest-backed gateway talking to `{base_url}/api/budgets`
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Build a gateway. Without a timeout the transport default applies.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> DeskResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DeskError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn budgets_url(&self) -> String {
        format!("{}/api/budgets", self.base_url.trim_end_matches('/'))
    }

    fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        if token.is_none() {
            warn!("no bearer token stored; the server will likely reject the request");
        }
        request.bearer_auth(token.unwrap_or_default())
    }

    async fn finish(response: Response) -> Result<Value, GatewayError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let body = parse_body(&text);

        debug!(status = status.as_u16(), "budget service responded");
        if status.is_success() {
            Ok(body)
        } else {
            Err(GatewayError::Status {
                status: status.as_u16(),
                body: Some(body),
            })
        }
    }
}

/// Decode a response body; anything that is not JSON is kept as a string
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[async_trait]
impl BudgetGateway for HttpGateway {
    async fn list_budgets(&self, token: Option<&str>) -> Result<Value, GatewayError> {
        let url = self.budgets_url();
        debug!(%url, "GET budgets");
        let response = Self::authorize(self.client.get(&url), token)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Self::finish(response).await
    }

    async fn create_budget(
        &self,
        token: Option<&str>,
        request: &CreateBudgetRequest,
    ) -> Result<Value, GatewayError> {
        let url = self.budgets_url();
        debug!(%url, department = %request.department, "POST budget");
        let response = Self::authorize(self.client.post(&url), token)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Self::finish(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_budgets_url_trims_slash() {
        let gateway = HttpGateway::new("http://localhost:5000/", None).unwrap();
        assert_eq!(gateway.budgets_url(), "http://localhost:5000/api/budgets");
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body(r#"{"budgets":[]}"#), json!({"budgets": []}));
        assert_eq!(
            parse_body("<html>oops</html>"),
            Value::String("<html>oops</html>".into())
        );
    }
}
