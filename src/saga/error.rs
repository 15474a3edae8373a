use crate::clients::ClientError;

/// Outcomes of a saga step, as distinguished from the lower-level
/// `ClientError`s that cause them (§7).
#[derive(Debug, thiserror::Error)]
pub enum SagaError {
    #[error("hotel not found")]
    HotelNotFound,

    #[error("forbidden")]
    Forbidden,

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("downstream failure: {0}")]
    Downstream(#[from] ClientError),
}
