use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::hotel::Hotel;
use super::payment::{Payment, PaymentCreateResponse};

/// A reservation hydrated with its hotel and payment, as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationShort {
    #[serde(rename = "reservationUid")]
    pub reservation_uid: String,
    pub hotel: Hotel,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub status: String,
    pub payment: Payment,
}

/// The body posted to the Reservation service to create a reservation.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationCreateRequest {
    pub username: String,
    #[serde(rename = "hotelUid")]
    pub hotel_uid: String,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    #[serde(rename = "paymentUid")]
    pub payment_uid: String,
    pub status: String,
}

/// The full record as stored and returned by the Reservation service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReservationFull {
    #[serde(rename = "reservationUid", default)]
    pub reservation_uid: String,
    #[serde(default)]
    pub username: String,
    #[serde(rename = "hotelUid", default)]
    pub hotel_uid: String,
    #[serde(rename = "startDate", default = "default_date")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate", default = "default_date")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "paymentUid", default)]
    pub payment_uid: String,
}

fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid epoch date")
}

impl ReservationFull {
    pub fn is_absent(&self) -> bool {
        self.reservation_uid.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReservationCreateResponse {
    #[serde(rename = "reservationUid")]
    pub reservation_uid: String,
    #[serde(rename = "hotelUid")]
    pub hotel_uid: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub discount: i64,
    pub status: String,
    pub payment: PaymentCreateResponse,
}

impl ReservationCreateResponse {
    /// The response handed to the caller when a create-saga could not
    /// complete synchronously and has been handed off to the retry worker.
    pub fn pending(hotel_uid: String, start_date: String, end_date: String) -> Self {
        Self {
            reservation_uid: String::new(),
            hotel_uid,
            start_date,
            end_date,
            discount: 0,
            status: "PENDING".to_string(),
            payment: PaymentCreateResponse {
                status: "PENDING".to_string(),
                price: 0,
            },
        }
    }
}
