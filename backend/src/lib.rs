//! GrowIQ farm dashboard server
//!
//! Serves the composed dashboard screen, navigation and the farm assistant
//! chat over JSON. Telemetry and chat answers come from external services;
//! the bundled snapshot and the keyword fallback keep the dashboard usable
//! when either is unavailable.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{AssistantClient, TelemetryClient};
use services::SharedDashboard;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dashboard: SharedDashboard,
    pub telemetry: TelemetryClient,
    pub assistant: AssistantClient,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "GrowIQ Farm Dashboard API v1.0"
}
