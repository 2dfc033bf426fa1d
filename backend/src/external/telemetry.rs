//! Field telemetry ingestion client
//!
//! A single GET against the configured endpoint returning
//! `{ message, timestamp, fields }`.

use std::future::Future;

use reqwest::{header::ACCEPT, Client};
use shared::FarmSnapshot;

use crate::error::{AppError, AppResult};

/// Anything that can produce a complete farm snapshot
pub trait TelemetrySource {
    fn fetch_snapshot(&self) -> impl Future<Output = AppResult<FarmSnapshot>> + Send;
}

/// Telemetry API client
#[derive(Clone)]
pub struct TelemetryClient {
    client: Client,
    endpoint: String,
}

impl TelemetryClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and validate the current snapshot
    pub async fn get_snapshot(&self) -> AppResult<FarmSnapshot> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::Telemetry(format!("request failed: {}", e)))?;

        tracing::debug!("Telemetry response status: {}", response.status());

        if !response.status().is_success() {
            return Err(AppError::Telemetry(format!(
                "HTTP error! status: {}",
                response.status().as_u16()
            )));
        }

        let snapshot: FarmSnapshot = response
            .json()
            .await
            .map_err(|e| AppError::Telemetry(format!("malformed body: {}", e)))?;

        snapshot.validate().map_err(|duplicate| {
            AppError::Telemetry(format!("duplicate field_id '{}' in snapshot", duplicate))
        })?;

        Ok(snapshot)
    }
}

impl TelemetrySource for TelemetryClient {
    async fn fetch_snapshot(&self) -> AppResult<FarmSnapshot> {
        self.get_snapshot().await
    }
}
