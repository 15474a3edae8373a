use reqwest::StatusCode;

/// Errors surfaced by a downstream HTTP client, before the edge layer or
/// saga orchestrator decide what they mean for the caller.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("circuit open")]
    CircuitOpen,

    #[error("downstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("downstream returned status {0}")]
    Status(StatusCode),
}
