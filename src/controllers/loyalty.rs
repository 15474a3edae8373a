use axum::extract::State;
use axum::Json;
use axum::routing::get;
use axum::Router;

use super::AppState;
use super::identity::Identity;
use crate::error::GatewayError;
use crate::models::loyalty::Loyalty;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/loyalty", get(get_loyalty))
}

async fn get_loyalty(State(state): State<AppState>, Identity(username): Identity) -> Result<Json<Loyalty>, GatewayError> {
    Ok(Json(state.composition.get_loyalty(&username).await))
}
