use reqwest::StatusCode;
use std::sync::Arc;

use super::error::ClientError;
use super::support::send_gated;
use crate::breaker::CircuitBreaker;
use crate::models::loyalty::Loyalty;

/// Wraps the Loyalty service's per-user tier lookup and booking-count
/// increment.
#[derive(Clone)]
pub struct LoyaltyClient {
    base_url: String,
    http: reqwest::Client,
    breaker: Arc<CircuitBreaker>,
}

impl LoyaltyClient {
    pub fn new(base_url: impl Into<String>, http: reqwest::Client, breaker: Arc<CircuitBreaker>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
            breaker,
        }
    }

    pub async fn get_loyalty(&self, username: &str) -> Result<Loyalty, ClientError> {
        let url = format!("{}/internal/loyalty/{}", self.base_url, username);
        let response = send_gated(&self.breaker, self.http.get(url)).await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json::<Loyalty>().await?)
    }

    pub async fn increment_reservation(&self, username: &str) -> Result<(), ClientError> {
        let url = format!("{}/internal/loyalty/{}", self.base_url, username);
        let response = send_gated(&self.breaker, self.http.post(url)).await?;

        if response.status() != StatusCode::OK && response.status() != StatusCode::NO_CONTENT {
            return Err(ClientError::Status(response.status()));
        }
        Ok(())
    }
}
