//! HTTP handlers for the farm dashboard

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use shared::screen::Screen;
use shared::FarmDataState;

use crate::error::{AppError, AppResult};
use crate::services::RefreshOutcome;
use crate::AppState;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Get the screen for the current state
pub async fn get_screen(State(state): State<AppState>) -> Json<Screen> {
    let dashboard = state.dashboard.read().await;
    Json(dashboard.screen(today()))
}

/// Get the raw store state
pub async fn get_farm_data(State(state): State<AppState>) -> Json<FarmDataState> {
    let dashboard = state.dashboard.read().await;
    Json(dashboard.farm_state().clone())
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub outcome: RefreshOutcome,
    pub screen: Screen,
}

/// Re-fetch telemetry; runs detached so a dropped request cannot strand `loading`
pub async fn refresh_farm_data(State(state): State<AppState>) -> AppResult<Json<RefreshResponse>> {
    let dashboard = state.dashboard.clone();
    let telemetry = state.telemetry.clone();
    let outcome = tokio::spawn(async move { dashboard.refresh(&telemetry).await })
        .await
        .map_err(|e| AppError::from(anyhow::Error::new(e).context("Refresh task failed")))?;

    let dashboard = state.dashboard.read().await;
    Ok(Json(RefreshResponse {
        outcome,
        screen: dashboard.screen(today()),
    }))
}

/// Open the detail page for a field
pub async fn select_field(
    State(state): State<AppState>,
    Path(field_id): Path<String>,
) -> AppResult<Json<Screen>> {
    state.dashboard.select_field(&field_id).await?;
    let dashboard = state.dashboard.read().await;
    Ok(Json(dashboard.screen(today())))
}

/// Return to the dashboard page
pub async fn go_back(State(state): State<AppState>) -> Json<Screen> {
    state.dashboard.go_back().await;
    let dashboard = state.dashboard.read().await;
    Json(dashboard.screen(today()))
}
