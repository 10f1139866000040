use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

#[utoipa::path(
    get,
    path = "/health",
    tag = "home",
    responses((status = 200, description = "Service name, version, environment and timestamp"))
)]
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.app_env,
        "timestamp": chrono::Utc::now(),
    }))
}
