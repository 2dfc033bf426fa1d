//! Chat answering service client

use std::future::Future;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{ChatTurn, FarmContext};

use crate::error::{AppError, AppResult};

/// Request body sent to the answering service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssistantRequest {
    /// Most recent prior messages, oldest first
    pub messages: Vec<ChatTurn>,
    pub user_message: String,
    /// Serialized as `null` when no snapshot is loaded
    pub farm_context: Option<FarmContext>,
}

#[derive(Debug, Deserialize)]
struct AssistantResponse {
    response: String,
}

/// Anything that can answer a chat question
pub trait AssistantBackend {
    fn answer(&self, request: AssistantRequest) -> impl Future<Output = AppResult<String>> + Send;
}

/// Answering service client
#[derive(Clone)]
pub struct AssistantClient {
    client: Client,
    endpoint: String,
}

impl AssistantClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// POST the question and return the answer text
    pub async fn ask(&self, request: &AssistantRequest) -> AppResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Assistant(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Assistant(format!("{} - {}", status, body)));
        }

        let data: AssistantResponse = response
            .json()
            .await
            .map_err(|e| AppError::Assistant(format!("malformed body: {}", e)))?;

        if data.response.trim().is_empty() {
            return Err(AppError::Assistant("empty response".to_string()));
        }

        Ok(data.response)
    }
}

impl AssistantBackend for AssistantClient {
    async fn answer(&self, request: AssistantRequest) -> AppResult<String> {
        self.ask(&request).await
    }
}
