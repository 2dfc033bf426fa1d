//! Chat session: append-only message log plus a pending flag
//!
//! Each user submission is sent to the answering service together with the
//! most recent prior messages and a summary of the current snapshot. When
//! the service fails for any reason, the canned fallback answer is appended
//! instead; the user never sees a distinct error.

use shared::fallback;
use shared::{ChatMessage, FarmContext, FarmSnapshot};

use crate::error::AppResult;
use crate::external::{AssistantBackend, AssistantRequest};

/// A submitted question awaiting its answer
#[derive(Debug)]
#[must_use = "a begun exchange must be completed to clear `pending`"]
pub struct PendingExchange {
    request: AssistantRequest,
}

impl PendingExchange {
    pub fn request(&self) -> &AssistantRequest {
        &self.request
    }

    pub fn question(&self) -> &str {
        &self.request.user_message
    }
}

#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: bool,
    history_limit: usize,
}

impl ChatSession {
    pub fn new(history_limit: usize) -> Self {
        Self {
            messages: Vec::new(),
            pending: false,
            history_limit,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Append the user's message and build the request for the answering
    /// service. No-op returning `None` for blank text or while another
    /// exchange is pending.
    pub fn begin_exchange(
        &mut self,
        text: &str,
        snapshot: Option<&FarmSnapshot>,
    ) -> Option<PendingExchange> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("Ignoring blank chat message");
            return None;
        }
        if self.pending {
            tracing::debug!("Chat exchange already pending, ignoring message");
            return None;
        }

        let start = self.messages.len().saturating_sub(self.history_limit);
        let history = self.messages[start..].iter().map(ChatMessage::turn).collect();

        self.messages.push(ChatMessage::user(text));
        self.pending = true;

        Some(PendingExchange {
            request: AssistantRequest {
                messages: history,
                user_message: text.to_string(),
                farm_context: snapshot.map(FarmContext::from),
            },
        })
    }

    /// Append the answer, or the fallback answer if the service failed.
    /// Always clears `pending`.
    pub fn complete_exchange(
        &mut self,
        exchange: PendingExchange,
        result: AppResult<String>,
        snapshot: Option<&FarmSnapshot>,
    ) -> &ChatMessage {
        let content = match result {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("Assistant unavailable, answering from fallback: {}", e);
                fallback::respond(exchange.question(), snapshot)
            }
        };

        self.messages.push(ChatMessage::assistant(content));
        self.pending = false;
        &self.messages[self.messages.len() - 1]
    }

    /// Submit `text` and wait for the answer
    pub async fn post_user_message<B: AssistantBackend>(
        &mut self,
        text: &str,
        backend: &B,
        snapshot: Option<&FarmSnapshot>,
    ) -> Option<&ChatMessage> {
        let exchange = self.begin_exchange(text, snapshot)?;
        let result = backend.answer(exchange.request().clone()).await;
        Some(self.complete_exchange(exchange, result, snapshot))
    }
}
