//! HTTP handlers for the farm assistant chat

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::ChatTranscript;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct PostMessageResponse {
    /// `false` when the message was blank or another exchange was pending
    pub accepted: bool,
    #[serde(flatten)]
    pub transcript: ChatTranscript,
}

/// Get the chat log
pub async fn get_chat(State(state): State<AppState>) -> Json<ChatTranscript> {
    let dashboard = state.dashboard.read().await;
    Json(dashboard.transcript())
}

/// Post a user message and wait for the answer
pub async fn post_chat_message(
    State(state): State<AppState>,
    Json(input): Json<PostMessageRequest>,
) -> AppResult<Json<PostMessageResponse>> {
    let dashboard = state.dashboard.clone();
    let assistant = state.assistant.clone();
    let accepted = tokio::spawn(async move {
        dashboard
            .post_user_message(&input.message, &assistant)
            .await
    })
    .await
    .map_err(|e| AppError::from(anyhow::Error::new(e).context("Chat task failed")))?;

    let dashboard = state.dashboard.read().await;
    Ok(Json(PostMessageResponse {
        accepted,
        transcript: dashboard.transcript(),
    }))
}
