//! Shared request-execution helpers used by every downstream client.
//!
//! Classification rule (mirrors §4.1/§4.2): a transport error or a 5xx
//! response is a breaker failure; a 2xx or 4xx response is a breaker
//! success — the downstream process answered, so it is healthy, even if the
//! specific request was rejected.

use reqwest::{RequestBuilder, Response};

use super::error::ClientError;
use crate::breaker::CircuitBreaker;

/// Sends a request that is gated by the circuit breaker: reads and other
/// idempotent calls. Returns `ClientError::CircuitOpen` without touching the
/// network if the breaker currently rejects calls.
pub(crate) async fn send_gated(
    breaker: &CircuitBreaker,
    request: RequestBuilder,
) -> Result<Response, ClientError> {
    if !breaker.allow() {
        return Err(ClientError::CircuitOpen);
    }

    match request.send().await {
        Ok(response) => {
            breaker.record(!response.status().is_server_error());
            Ok(response)
        }
        Err(err) => {
            breaker.record(false);
            Err(ClientError::Transport(err))
        }
    }
}

/// Sends a request that bypasses the breaker entirely: the create-payment
/// and create-reservation mutations, which must be attempted even against a
/// degraded downstream so the saga can detect failure and compensate.
pub(crate) async fn send_ungated(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request.send().await?;
    Ok(response)
}
