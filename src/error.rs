//! The single error type the edge layer maps to an HTTP response. Every
//! fallible path in the gateway — saga, composition, or the identity check
//! at the door — eventually funnels into this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::composition::CompositionError;
use crate::saga::SagaError;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("missing X-User-Name header")]
    Unauthorized,

    #[error("hotel not found")]
    HotelNotFound,

    #[error("not found")]
    NotFound,

    #[error("forbidden")]
    Forbidden,

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("downstream failure: {0}")]
    Downstream(String),
}

impl From<SagaError> for GatewayError {
    fn from(err: SagaError) -> Self {
        match err {
            SagaError::HotelNotFound => GatewayError::HotelNotFound,
            SagaError::Forbidden => GatewayError::Forbidden,
            SagaError::InvalidDate(s) => GatewayError::InvalidDate(s),
            SagaError::Downstream(e) => GatewayError::Downstream(e.to_string()),
        }
    }
}

impl From<CompositionError> for GatewayError {
    fn from(err: CompositionError) -> Self {
        match err {
            CompositionError::Forbidden => GatewayError::Forbidden,
            CompositionError::Downstream(e) => GatewayError::Downstream(e.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::HotelNotFound => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::NotFound => StatusCode::NOT_FOUND,
            GatewayError::Forbidden => StatusCode::FORBIDDEN,
            GatewayError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            GatewayError::Downstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
