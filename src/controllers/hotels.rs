use axum::extract::{Query, State};
use axum::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use super::AppState;
use crate::error::GatewayError;
use crate::models::hotel::HotelsPage;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/hotels", get(list_hotels))
}

#[derive(Debug, Deserialize)]
struct ListHotelsQuery {
    page: Option<u32>,
    size: Option<u32>,
}

async fn list_hotels(
    State(state): State<AppState>,
    Query(query): Query<ListHotelsQuery>,
) -> Result<Json<HotelsPage>, GatewayError> {
    let page = state.composition.list_hotels(query.page, query.size).await?;
    Ok(Json(page))
}
