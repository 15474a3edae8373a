//! The create/cancel reservation sagas (§4.3, §4.4): the part of the
//! gateway that coordinates a multi-step transaction across three
//! independent services, compensates in reverse order on partial failure,
//! and hands off to the background retry worker rather than ever blocking
//! the caller on a degraded downstream.

pub mod error;

use chrono::NaiveDate;
use tracing::warn;

use crate::clients::{LoyaltyClient, PaymentClient, ReservationClient};
use crate::models::loyalty::Loyalty;
use crate::models::payment::PaymentCreateResponse;
use crate::models::reservation::{ReservationCreateRequest, ReservationCreateResponse};
use crate::retry::RetryQueue;

pub use error::SagaError;

#[derive(Clone)]
pub struct SagaOrchestrator {
    reservation: ReservationClient,
    payment: PaymentClient,
    loyalty: LoyaltyClient,
    retry: RetryQueue,
}

impl SagaOrchestrator {
    pub fn new(
        reservation: ReservationClient,
        payment: PaymentClient,
        loyalty: LoyaltyClient,
        retry: RetryQueue,
    ) -> Self {
        Self {
            reservation,
            payment,
            loyalty,
            retry,
        }
    }

    /// A single, non-retried attempt at the full create-reservation saga
    /// (§4.3 steps 1-8). Used both for the caller's first attempt and for
    /// the background retry.
    async fn create_reservation_once(
        &self,
        username: &str,
        hotel_uid: &str,
        start_date_str: &str,
        end_date_str: &str,
    ) -> Result<ReservationCreateResponse, SagaError> {
        let hotel = self.reservation.get_hotel(hotel_uid).await?;
        if hotel.is_absent() {
            return Err(SagaError::HotelNotFound);
        }

        let start = NaiveDate::parse_from_str(start_date_str, "%Y-%m-%d")
            .map_err(|_| SagaError::InvalidDate(start_date_str.to_string()))?;
        let end = NaiveDate::parse_from_str(end_date_str, "%Y-%m-%d")
            .map_err(|_| SagaError::InvalidDate(end_date_str.to_string()))?;

        let loyalty = match self.loyalty.get_loyalty(username).await {
            Ok(loyalty) => loyalty,
            Err(err) => {
                warn!(error = %err, username, "loyalty lookup failed, substituting default tier");
                Loyalty::default()
            }
        };

        let days = (end - start).num_days();
        let days = if days <= 0 { 1 } else { days };

        let base_price = hotel.price * days;
        let final_price = base_price - (base_price * loyalty.discount / 100);

        let payment = self.payment.create_payment(username, final_price).await?;

        let reservation_req = ReservationCreateRequest {
            username: username.to_string(),
            hotel_uid: hotel.hotel_uid.clone(),
            start_date: start,
            end_date: end,
            payment_uid: payment.payment_uid.clone(),
            status: "PAID".to_string(),
        };

        let full_reservation = match self.reservation.create_reservation(&reservation_req).await {
            Ok(full) => full,
            Err(err) => {
                self.compensate_payment(&payment.payment_uid).await;
                return Err(err.into());
            }
        };

        if let Err(err) = self.loyalty.increment_reservation(username).await {
            self.compensate_reservation(&full_reservation.reservation_uid).await;
            self.compensate_payment(&payment.payment_uid).await;
            return Err(err.into());
        }

        Ok(ReservationCreateResponse {
            reservation_uid: full_reservation.reservation_uid,
            hotel_uid: hotel.hotel_uid,
            start_date: start_date_str.to_string(),
            end_date: end_date_str.to_string(),
            discount: loyalty.discount,
            status: full_reservation.status,
            payment: PaymentCreateResponse {
                status: payment.status,
                price: final_price,
            },
        })
    }

    /// Runs the create-saga once; on any failure other than
    /// `HOTEL_NOT_FOUND`, queues a best-effort retry and answers the caller
    /// immediately with a PENDING response rather than blocking on a
    /// struggling downstream (§4.3 outer retry policy).
    pub async fn create_reservation(
        &self,
        username: String,
        hotel_uid: String,
        start_date: String,
        end_date: String,
    ) -> Result<ReservationCreateResponse, SagaError> {
        match self
            .create_reservation_once(&username, &hotel_uid, &start_date, &end_date)
            .await
        {
            Ok(resp) => Ok(resp),
            Err(SagaError::HotelNotFound) => Err(SagaError::HotelNotFound),
            Err(err) => {
                warn!(
                    error = %err,
                    username,
                    hotel_uid,
                    "create-reservation did not complete synchronously, queuing retry"
                );

                let orchestrator = self.clone();
                let retry_username = username.clone();
                let retry_hotel_uid = hotel_uid.clone();
                let retry_start = start_date.clone();
                let retry_end = end_date.clone();
                self.retry.submit(
                    "reservation",
                    Box::pin(async move {
                        let _ = orchestrator
                            .create_reservation_once(
                                &retry_username,
                                &retry_hotel_uid,
                                &retry_start,
                                &retry_end,
                            )
                            .await;
                    }),
                );

                Ok(ReservationCreateResponse::pending(hotel_uid, start_date, end_date))
            }
        }
    }

    /// §4.4: fetch, authorize, cancel the reservation, then best-effort
    /// cancel the payment — queuing a retry rather than failing the call if
    /// only the payment cancellation fails.
    pub async fn cancel_reservation(
        &self,
        username: String,
        reservation_uid: String,
    ) -> Result<(), SagaError> {
        let reservation = self.reservation.get_reservation(&reservation_uid).await?;
        if reservation.is_absent() {
            return Ok(());
        }
        if reservation.username != username {
            return Err(SagaError::Forbidden);
        }

        self.reservation.cancel_reservation(&reservation_uid).await?;

        if let Err(err) = self.payment.cancel_payment(&reservation.payment_uid).await {
            warn!(
                error = %err,
                payment_uid = %reservation.payment_uid,
                "payment cancellation failed after reservation was canceled, queuing retry"
            );

            let payment_client = self.payment.clone();
            let payment_uid = reservation.payment_uid.clone();
            self.retry.submit(
                "payment",
                Box::pin(async move {
                    let _ = payment_client.cancel_payment(&payment_uid).await;
                }),
            );
        }

        Ok(())
    }

    async fn compensate_payment(&self, payment_uid: &str) {
        if let Err(err) = self.payment.cancel_payment(payment_uid).await {
            warn!(error = %err, payment_uid, "compensating payment cancellation failed");
        }
    }

    async fn compensate_reservation(&self, reservation_uid: &str) {
        if let Err(err) = self.reservation.cancel_reservation(reservation_uid).await {
            warn!(error = %err, reservation_uid, "compensating reservation cancellation failed");
        }
    }
}
