//! Farm data store
//!
//! Holds the last snapshot plus `loading`/`error` flags. A refresh is split
//! into `begin_refresh` and `complete_refresh` so callers sharing the store
//! behind a lock never hold it across the network call; the in-flight flag
//! keeps refreshes from overlapping.
//!
//! Any ingestion failure substitutes the bundled snapshot and records an
//! advisory. There is no automatic retry.

use serde::Serialize;
use shared::bundled::default_snapshot;
use shared::{FarmDataState, FarmSnapshot};

use crate::error::AppResult;
use crate::external::TelemetrySource;

/// Proof that a refresh was started and must be completed
#[derive(Debug)]
#[must_use = "a begun refresh must be completed"]
pub struct RefreshTicket(());

/// How a refresh ended
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RefreshOutcome {
    /// Live snapshot stored
    Live,
    /// Ingestion failed, bundled snapshot stored
    Bundled,
    /// Another refresh was already in flight
    Skipped,
}

#[derive(Debug)]
pub struct FarmDataStore {
    state: FarmDataState,
    in_flight: bool,
}

impl Default for FarmDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FarmDataStore {
    /// Initial state: loading, no snapshot, no error
    pub fn new() -> Self {
        Self {
            state: FarmDataState::default(),
            in_flight: false,
        }
    }

    pub fn state(&self) -> &FarmDataState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&FarmSnapshot> {
        self.state.snapshot.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight
    }

    /// Mark a refresh as started, or `None` if one is already running
    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        if self.in_flight {
            tracing::debug!("Refresh already in flight, skipping");
            return None;
        }
        self.in_flight = true;
        self.state.loading = true;
        Some(RefreshTicket(()))
    }

    /// Store the ingestion result; always ends with `loading == false`
    pub fn complete_refresh(
        &mut self,
        _ticket: RefreshTicket,
        result: AppResult<FarmSnapshot>,
    ) -> RefreshOutcome {
        self.in_flight = false;
        self.state.loading = false;

        match result {
            Ok(snapshot) => {
                tracing::info!(
                    "Farm data refreshed: {} fields captured at {}",
                    snapshot.fields.len(),
                    snapshot.timestamp
                );
                self.state.snapshot = Some(snapshot);
                self.state.error = None;
                RefreshOutcome::Live
            }
            Err(e) => {
                tracing::warn!("Farm data ingestion failed, using bundled snapshot: {}", e);
                self.state.snapshot = Some(default_snapshot());
                self.state.error = Some(format!("{}. Showing bundled field data.", e));
                RefreshOutcome::Bundled
            }
        }
    }

    /// Fetch from `source` and store the result
    pub async fn refresh<S: TelemetrySource>(&mut self, source: &S) -> RefreshOutcome {
        let Some(ticket) = self.begin_refresh() else {
            return RefreshOutcome::Skipped;
        };
        let result = source.fetch_snapshot().await;
        self.complete_refresh(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_initial_state() {
        let store = FarmDataStore::new();
        assert!(store.loading());
        assert!(store.snapshot().is_none());
        assert!(store.error().is_none());
        assert!(!store.is_refreshing());
    }

    #[test]
    fn test_overlapping_refresh_rejected() {
        let mut store = FarmDataStore::new();
        let ticket = store.begin_refresh().expect("first refresh starts");
        assert!(store.begin_refresh().is_none());
        assert!(store.is_refreshing());

        store.complete_refresh(ticket, Ok(default_snapshot()));
        assert!(!store.is_refreshing());
        assert!(store.begin_refresh().is_some());
    }

    #[test]
    fn test_failure_substitutes_bundled_snapshot() {
        let mut store = FarmDataStore::new();
        let ticket = store.begin_refresh().unwrap();
        let outcome = store.complete_refresh(
            ticket,
            Err(AppError::Telemetry("HTTP error! status: 503".to_string())),
        );

        assert_eq!(outcome, RefreshOutcome::Bundled);
        assert!(!store.loading());
        assert_eq!(store.snapshot(), Some(&default_snapshot()));
        assert_eq!(
            store.error(),
            Some("Telemetry ingestion failed: HTTP error! status: 503. Showing bundled field data.")
        );
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut store = FarmDataStore::new();
        let ticket = store.begin_refresh().unwrap();
        store.complete_refresh(ticket, Err(AppError::Telemetry("offline".to_string())));
        assert!(store.error().is_some());

        let mut live = default_snapshot();
        live.message = "fresh".to_string();
        let ticket = store.begin_refresh().unwrap();
        assert!(store.loading());
        let outcome = store.complete_refresh(ticket, Ok(live));

        assert_eq!(outcome, RefreshOutcome::Live);
        assert!(store.error().is_none());
        assert_eq!(store.snapshot().map(|s| s.message.as_str()), Some("fresh"));
    }
}
