use crate::{AppState, get_user_settings, health, upsert_user_settings};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Settings endpoints
        .route("/user-settings", post(upsert_user_settings))
        .route("/user-settings/{user_id}", get(get_user_settings))
        // Health check endpoints
        .route("/healthz", get(health::healthz))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (browser front-ends on any origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
