//! Shared error type across pagehits crates.

use http::StatusCode;
use thiserror::Error;

/// HTTP-facing classification of an error (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    /// Invalid request, or a business operation that failed.
    BadRequest,
    /// Method outside the supported set.
    MethodNotAllowed,
    /// Startup / wiring failure. Never produced by the request path.
    Internal,
}

impl ErrorStatus {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorStatus::BadRequest => StatusCode::BAD_REQUEST,
            ErrorStatus::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorStatus::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PageHitsError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum PageHitsError {
    /// Missing or malformed request input. Displayed verbatim.
    #[error("{0}")]
    Validation(String),
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    /// Store call or decoding failure. The message is the underlying error text.
    #[error("{0}")]
    Repository(String),
    #[error("config: {0}")]
    Config(String),
}

impl PageHitsError {
    /// Map an error to the status the handler answers with.
    pub fn status(&self) -> ErrorStatus {
        match self {
            PageHitsError::Validation(_) => ErrorStatus::BadRequest,
            PageHitsError::MethodNotAllowed => ErrorStatus::MethodNotAllowed,
            PageHitsError::Repository(_) => ErrorStatus::BadRequest,
            PageHitsError::Config(_) => ErrorStatus::Internal,
        }
    }
}
