use reqwest::StatusCode;
use serde::Serialize;
use std::sync::Arc;

use super::error::ClientError;
use super::support::{send_gated, send_ungated};
use crate::breaker::CircuitBreaker;
use crate::models::payment::Payment;

#[derive(Debug, Serialize)]
struct CreatePaymentRequest<'a> {
    username: &'a str,
    price: i64,
}

/// Wraps the Payment service's create/get/cancel endpoints.
#[derive(Clone)]
pub struct PaymentClient {
    base_url: String,
    http: reqwest::Client,
    breaker: Arc<CircuitBreaker>,
}

impl PaymentClient {
    pub fn new(base_url: impl Into<String>, http: reqwest::Client, breaker: Arc<CircuitBreaker>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
            breaker,
        }
    }

    /// Not breaker-gated: the primary mutating step of the saga must be
    /// attempted even against a degraded payment service so the orchestrator
    /// can observe the failure and decide whether to compensate.
    pub async fn create_payment(&self, username: &str, price: i64) -> Result<Payment, ClientError> {
        let url = format!("{}/internal/payments", self.base_url);
        let body = CreatePaymentRequest { username, price };
        let response = send_ungated(self.http.post(url).json(&body)).await?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json::<Payment>().await?)
    }

    pub async fn get_payment(&self, payment_uid: &str) -> Result<Payment, ClientError> {
        let url = format!("{}/internal/payments/{}", self.base_url, payment_uid);
        let response = send_gated(&self.breaker, self.http.get(url)).await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json::<Payment>().await?)
    }

    /// Compensating cancel; not breaker-gated for the same reason as
    /// `create_payment` — it must always be attempted.
    pub async fn cancel_payment(&self, payment_uid: &str) -> Result<(), ClientError> {
        let url = format!("{}/internal/payments/{}", self.base_url, payment_uid);
        let response = send_ungated(self.http.delete(url)).await?;

        if response.status() != StatusCode::NO_CONTENT && response.status() != StatusCode::OK {
            return Err(ClientError::Status(response.status()));
        }
        Ok(())
    }
}
