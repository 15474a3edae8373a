//! The read-side fan-out service (§4.5): hotel listing passthrough, loyalty
//! lookup with graceful degradation, and reservation hydration that joins a
//! reservation with its hotel and payment.

use tracing::warn;

use crate::clients::{LoyaltyClient, PaymentClient, ReservationClient};
use crate::models::hotel::HotelsPage;
use crate::models::loyalty::Loyalty;
use crate::models::me::MeResponse;
use crate::models::reservation::{ReservationFull, ReservationShort};

#[derive(Debug, thiserror::Error)]
pub enum CompositionError {
    #[error("forbidden")]
    Forbidden,

    #[error("downstream failure: {0}")]
    Downstream(#[from] crate::clients::ClientError),
}

#[derive(Clone)]
pub struct CompositionService {
    reservation: ReservationClient,
    payment: PaymentClient,
    loyalty: LoyaltyClient,
}

impl CompositionService {
    pub fn new(reservation: ReservationClient, payment: PaymentClient, loyalty: LoyaltyClient) -> Self {
        Self {
            reservation,
            payment,
            loyalty,
        }
    }

    /// Direct passthrough to the Reservation service's hotel catalog, with
    /// the documented page/size defaults applied for non-positive input.
    pub async fn list_hotels(&self, page: Option<u32>, size: Option<u32>) -> Result<HotelsPage, CompositionError> {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let size = size.filter(|s| *s > 0).unwrap_or(10);
        Ok(self.reservation.list_hotels(page, size).await?)
    }

    /// Never fails: an unreachable Loyalty service degrades to the default
    /// tier rather than surfacing an error to the caller.
    pub async fn get_loyalty(&self, username: &str) -> Loyalty {
        match self.loyalty.get_loyalty(username).await {
            Ok(loyalty) => loyalty,
            Err(err) => {
                warn!(error = %err, username, "loyalty lookup failed, returning default tier");
                Loyalty::default()
            }
        }
    }

    /// All-or-nothing hydration: if any per-reservation hotel or payment
    /// lookup fails the whole call fails (§4.5, §9 item 4).
    pub async fn list_user_reservations(&self, username: &str) -> Result<Vec<ReservationShort>, CompositionError> {
        let reservations = self.reservation.get_reservations_by_user(username).await?;

        let mut result = Vec::with_capacity(reservations.len());
        for reservation in reservations {
            result.push(self.hydrate(reservation).await?);
        }
        Ok(result)
    }

    /// Fetches and hydrates a single reservation the caller owns. Returns
    /// `Ok(None)` for an absent reservation (handled as 404 at the edge) and
    /// `Err(Forbidden)` when the reservation belongs to a different user.
    pub async fn get_reservation(
        &self,
        username: &str,
        reservation_uid: &str,
    ) -> Result<Option<ReservationShort>, CompositionError> {
        let reservation = self.reservation.get_reservation(reservation_uid).await?;
        if reservation.is_absent() {
            return Ok(None);
        }
        if reservation.username != username {
            return Err(CompositionError::Forbidden);
        }

        Ok(Some(self.hydrate(reservation).await?))
    }

    pub async fn me(&self, username: &str) -> Result<MeResponse, CompositionError> {
        let loyalty = self.get_loyalty(username).await;
        let reservations = self.list_user_reservations(username).await?;

        Ok(MeResponse {
            username: username.to_string(),
            loyalty,
            reservations,
        })
    }

    async fn hydrate(&self, reservation: ReservationFull) -> Result<ReservationShort, CompositionError> {
        let hotel = self.reservation.get_hotel(&reservation.hotel_uid).await?;
        let payment = self.payment.get_payment(&reservation.payment_uid).await?;

        Ok(ReservationShort {
            reservation_uid: reservation.reservation_uid,
            hotel,
            start_date: reservation.start_date.format("%Y-%m-%d").to_string(),
            end_date: reservation.end_date.format("%Y-%m-%d").to_string(),
            status: reservation.status,
            payment,
        })
    }
}
