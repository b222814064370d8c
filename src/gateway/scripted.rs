//! Gateway double that replays queued responses and records calls

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{BudgetGateway, GatewayError};
use crate::models::CreateBudgetRequest;

type Reply = Result<Value, GatewayError>;

#[derive(Default)]
pub(crate) struct ScriptedGateway {
    list_replies: Mutex<VecDeque<Reply>>,
    create_replies: Mutex<VecDeque<Reply>>,
    list_tokens: Mutex<Vec<Option<String>>>,
    created: Mutex<Vec<CreateBudgetRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply_list(self, reply: Reply) -> Self {
        self.list_replies.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn reply_create(self, reply: Reply) -> Self {
        self.create_replies.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_tokens.lock().unwrap().len()
    }

    pub(crate) fn list_tokens(&self) -> Vec<Option<String>> {
        self.list_tokens.lock().unwrap().clone()
    }

    pub(crate) fn created(&self) -> Vec<CreateBudgetRequest> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl BudgetGateway for ScriptedGateway {
    async fn list_budgets(&self, token: Option<&str>) -> Result<Value, GatewayError> {
        self.list_tokens
            .lock()
            .unwrap()
            .push(token.map(str::to_string));
        self.list_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Network("no scripted list reply".into())))
    }

    async fn create_budget(
        &self,
        _token: Option<&str>,
        request: &CreateBudgetRequest,
    ) -> Result<Value, GatewayError> {
        self.created.lock().unwrap().push(request.clone());
        self.create_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Network("no scripted create reply".into())))
    }
}
