use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use serde_json::json;

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/manage/health", get(health))
}

/// The gateway holds no durable state of its own, so health is currently
/// trivially OK (§6.1) — it reports on itself, not on its downstreams.
async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
