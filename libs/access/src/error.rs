use thiserror::Error;

/// Transport level failures, the request never produced an envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Not found")]
    NotFound,
    #[error("Internal server error")]
    InternalServerError,
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Deserialize error: {0}")]
    Deserialize(String),
    #[error("Request error: {0}")]
    Request(String),
}
