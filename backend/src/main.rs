//! GrowIQ Farm Dashboard - Backend Server

use std::{sync::Arc, time::Duration};

use growiq_backend::{
    create_app,
    external::{build_http_client, AssistantClient, TelemetryClient},
    services::{Dashboard, SharedDashboard},
    AppState, Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "growiq_server=debug,growiq_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting GrowIQ Farm Dashboard Server");
    tracing::info!("Environment: {}", config.environment);

    let http = build_http_client(Duration::from_secs(config.http.request_timeout_secs))?;

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        dashboard: SharedDashboard::new(Dashboard::new(config.chat.history_limit)),
        telemetry: TelemetryClient::new(http.clone(), &config.telemetry.endpoint),
        assistant: AssistantClient::new(http, &config.assistant.endpoint),
    };

    tracing::info!("Telemetry endpoint: {}", state.telemetry.endpoint());

    // Initial load, once per process
    {
        let dashboard = state.dashboard.clone();
        let telemetry = state.telemetry.clone();
        tokio::spawn(async move {
            let outcome = dashboard.refresh(&telemetry).await;
            tracing::info!("Initial farm data load: {:?}", outcome);
        });
    }

    // Build application
    let app = create_app(state);

    // Start server
    let addr = config.bind_address();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
