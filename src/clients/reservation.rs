use reqwest::StatusCode;
use std::sync::Arc;
use tracing::debug;

use super::error::ClientError;
use super::support::{send_gated, send_ungated};
use crate::breaker::CircuitBreaker;
use crate::models::hotel::{Hotel, HotelsPage};
use crate::models::reservation::{ReservationCreateRequest, ReservationFull};

/// Wraps the Reservation service's hotel catalog and reservation-record
/// endpoints, consulting and updating its own circuit breaker on every
/// breaker-gated call.
#[derive(Clone)]
pub struct ReservationClient {
    base_url: String,
    http: reqwest::Client,
    breaker: Arc<CircuitBreaker>,
}

impl ReservationClient {
    pub fn new(base_url: impl Into<String>, http: reqwest::Client, breaker: Arc<CircuitBreaker>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
            breaker,
        }
    }

    pub async fn list_hotels(&self, page: u32, size: u32) -> Result<HotelsPage, ClientError> {
        let url = format!("{}/internal/hotels", self.base_url);
        let request = self
            .http
            .get(url)
            .query(&[("page", page), ("size", size)]);

        let response = send_gated(&self.breaker, request).await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json::<HotelsPage>().await?)
    }

    pub async fn get_hotel(&self, hotel_uid: &str) -> Result<Hotel, ClientError> {
        let url = format!("{}/internal/hotels/{}", self.base_url, hotel_uid);
        let response = send_gated(&self.breaker, self.http.get(url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(hotel_uid, "hotel not found");
            return Ok(Hotel::default());
        }
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        let hotel = response.json::<Hotel>().await?;
        Ok(hotel.with_full_address())
    }

    pub async fn create_reservation(
        &self,
        req: &ReservationCreateRequest,
    ) -> Result<ReservationFull, ClientError> {
        let url = format!("{}/internal/reservations", self.base_url);
        let response = send_ungated(self.http.post(url).json(req)).await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json::<ReservationFull>().await?)
    }

    pub async fn get_reservation(&self, reservation_uid: &str) -> Result<ReservationFull, ClientError> {
        let url = format!("{}/internal/reservations/{}", self.base_url, reservation_uid);
        let response = send_gated(&self.breaker, self.http.get(url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(ReservationFull::default());
        }
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json::<ReservationFull>().await?)
    }

    pub async fn get_reservations_by_user(&self, username: &str) -> Result<Vec<ReservationFull>, ClientError> {
        let url = format!("{}/internal/reservations/byUser/{}", self.base_url, username);
        let response = send_gated(&self.breaker, self.http.get(url)).await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json::<Vec<ReservationFull>>().await?)
    }

    /// Compensating/cancelling delete. Not breaker-gated: compensation must
    /// be attempted regardless of the breaker's opinion of the service.
    pub async fn cancel_reservation(&self, reservation_uid: &str) -> Result<(), ClientError> {
        let url = format!("{}/internal/reservations/{}", self.base_url, reservation_uid);
        let response = send_ungated(self.http.delete(url)).await?;

        if response.status() != StatusCode::NO_CONTENT && response.status() != StatusCode::OK {
            return Err(ClientError::Status(response.status()));
        }
        Ok(())
    }
}
