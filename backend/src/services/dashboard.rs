//! Dashboard composition: data store, navigation and chat in one place
//!
//! `SharedDashboard` is the handle handlers hold. Its async operations take
//! the write lock only around the begin/complete halves, never across the
//! collaborator call.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use shared::screen::{compose, Screen};
use shared::{ChatMessage, FarmDataState, ViewController, ViewState};
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::error::{AppError, AppResult};
use crate::external::{AssistantBackend, TelemetrySource};
use crate::services::chat::ChatSession;
use crate::services::farm_data::{FarmDataStore, RefreshOutcome};

#[derive(Debug)]
pub struct Dashboard {
    store: FarmDataStore,
    view: ViewController,
    chat: ChatSession,
}

/// Chat log as exposed to clients
#[derive(Debug, Clone, Serialize)]
pub struct ChatTranscript {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
}

impl Dashboard {
    pub fn new(history_limit: usize) -> Self {
        Self {
            store: FarmDataStore::new(),
            view: ViewController::new(),
            chat: ChatSession::new(history_limit),
        }
    }

    pub fn store(&self) -> &FarmDataStore {
        &self.store
    }

    pub fn farm_state(&self) -> &FarmDataState {
        self.store.state()
    }

    pub fn view(&self) -> &ViewState {
        self.view.state()
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn transcript(&self) -> ChatTranscript {
        ChatTranscript {
            messages: self.chat.messages().to_vec(),
            pending: self.chat.pending(),
        }
    }

    pub fn screen(&self, today: NaiveDate) -> Screen {
        compose(self.store.state(), self.view.state(), today)
    }

    /// Open the detail page for `field_id` from the current snapshot
    pub fn select_field(&mut self, field_id: &str) -> AppResult<&ViewState> {
        let field = self
            .store
            .snapshot()
            .and_then(|snapshot| snapshot.field(field_id))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Field '{}'", field_id)))?;

        tracing::debug!("Selected field {} ({})", field.field_id, field.crop_name);
        Ok(self.view.select_field(field))
    }

    pub fn go_back(&mut self) -> &ViewState {
        self.view.go_back()
    }
}

/// Cloneable handle to the process-wide dashboard
#[derive(Debug, Clone)]
pub struct SharedDashboard(Arc<RwLock<Dashboard>>);

impl SharedDashboard {
    pub fn new(dashboard: Dashboard) -> Self {
        Self(Arc::new(RwLock::new(dashboard)))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Dashboard> {
        self.0.read().await
    }

    pub async fn select_field(&self, field_id: &str) -> AppResult<ViewState> {
        let mut dashboard = self.0.write().await;
        dashboard.select_field(field_id).cloned()
    }

    pub async fn go_back(&self) -> ViewState {
        let mut dashboard = self.0.write().await;
        dashboard.go_back().clone()
    }

    /// Fetch a snapshot from `source`; skipped if a refresh is in flight
    pub async fn refresh<S: TelemetrySource + Sync>(&self, source: &S) -> RefreshOutcome {
        let ticket = self.0.write().await.store.begin_refresh();
        let Some(ticket) = ticket else {
            return RefreshOutcome::Skipped;
        };

        let result = source.fetch_snapshot().await;

        self.0.write().await.store.complete_refresh(ticket, result)
    }

    /// Post a user message and wait for the answer. Returns `false` when the
    /// message was ignored (blank, or another exchange pending).
    pub async fn post_user_message<B: AssistantBackend + Sync>(
        &self,
        text: &str,
        backend: &B,
    ) -> bool {
        let exchange = {
            let mut guard = self.0.write().await;
            let dashboard = &mut *guard;
            dashboard
                .chat
                .begin_exchange(text, dashboard.store.snapshot())
        };
        let Some(exchange) = exchange else {
            return false;
        };

        let result = backend.answer(exchange.request().clone()).await;

        let mut guard = self.0.write().await;
        let dashboard = &mut *guard;
        dashboard
            .chat
            .complete_exchange(exchange, result, dashboard.store.snapshot());
        true
    }
}
