//! Extracts the caller's identity from the `X-User-Name` header (§6.1, §9).
//! A stand-in for verified token claims: the gateway trusts whatever name
//! the caller presents.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::GatewayError;

pub const IDENTITY_HEADER: &str = "X-User-Name";

pub struct Identity(pub String);

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let username = parts
            .headers
            .get(IDENTITY_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .ok_or(GatewayError::Unauthorized)?;

        Ok(Identity(username.to_string()))
    }
}
