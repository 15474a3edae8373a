use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use super::identity::Identity;
use super::AppState;
use crate::error::GatewayError;
use crate::models::reservation::{ReservationCreateResponse, ReservationShort};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/reservations", get(list_reservations).post(create_reservation))
        .route(
            "/api/v1/reservations/:uid",
            get(get_reservation).delete(cancel_reservation),
        )
}

async fn list_reservations(
    State(state): State<AppState>,
    Identity(username): Identity,
) -> Result<Json<Vec<ReservationShort>>, GatewayError> {
    let reservations = state.composition.list_user_reservations(&username).await?;
    Ok(Json(reservations))
}

#[derive(Debug, Deserialize)]
struct CreateReservationRequest {
    #[serde(rename = "hotelUid")]
    hotel_uid: String,
    #[serde(rename = "startDate")]
    start_date: String,
    #[serde(rename = "endDate")]
    end_date: String,
}

async fn create_reservation(
    State(state): State<AppState>,
    Identity(username): Identity,
    Json(body): Json<CreateReservationRequest>,
) -> Result<Json<ReservationCreateResponse>, GatewayError> {
    let response = state
        .saga
        .create_reservation(username, body.hotel_uid, body.start_date, body.end_date)
        .await?;
    Ok(Json(response))
}

async fn get_reservation(
    State(state): State<AppState>,
    Identity(username): Identity,
    Path(uid): Path<String>,
) -> Result<Json<ReservationShort>, GatewayError> {
    let reservation = state
        .composition
        .get_reservation(&username, &uid)
        .await?
        .ok_or(GatewayError::NotFound)?;
    Ok(Json(reservation))
}

async fn cancel_reservation(
    State(state): State<AppState>,
    Identity(username): Identity,
    Path(uid): Path<String>,
) -> Result<StatusCode, GatewayError> {
    state.saga.cancel_reservation(username, uid).await?;
    Ok(StatusCode::NO_CONTENT)
}
