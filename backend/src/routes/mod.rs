//! Route definitions for the GrowIQ dashboard

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/screen", get(handlers::get_screen))
        .route("/farm", get(handlers::get_farm_data))
        .route("/refresh", post(handlers::refresh_farm_data))
        .route("/fields/:field_id/select", post(handlers::select_field))
        .route("/back", post(handlers::go_back))
        .route(
            "/chat",
            get(handlers::get_chat).post(handlers::post_chat_message),
        )
}
