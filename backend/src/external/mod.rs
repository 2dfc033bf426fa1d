//! External API integrations

pub mod assistant;
pub mod telemetry;

use std::time::Duration;

use reqwest::Client;

use crate::error::{AppError, AppResult};

pub use assistant::{AssistantBackend, AssistantClient, AssistantRequest};
pub use telemetry::{TelemetryClient, TelemetrySource};

/// Build the HTTP client shared by every outbound collaborator
pub fn build_http_client(request_timeout: Duration) -> AppResult<Client> {
    Client::builder()
        .timeout(request_timeout)
        .build()
        .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))
}
