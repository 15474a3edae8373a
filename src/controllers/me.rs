use axum::extract::State;
use axum::Json;
use axum::routing::get;
use axum::Router;

use super::identity::Identity;
use super::AppState;
use crate::error::GatewayError;
use crate::models::me::MeResponse;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/me", get(me))
}

async fn me(State(state): State<AppState>, Identity(username): Identity) -> Result<Json<MeResponse>, GatewayError> {
    let response = state.composition.me(&username).await?;
    Ok(Json(response))
}
