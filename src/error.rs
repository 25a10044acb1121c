// src/error.rs
//! Application error types with structured error handling.
//!
//! `AppError` covers everything that can go wrong talking to the board
//! service or resolving configuration. Page-level failures built on top of
//! it live in [`crate::content::PageError`].

use std::fmt;
use thiserror::Error;

/// Board API failure codes as a typed vocabulary.
///
/// Trello reports errors mostly through the HTTP status with a short plain
/// text body, so the code is derived from the status rather than parsed
/// from the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardErrorCode {
    /// The requested board, list or card does not exist (or is not visible)
    NotFound,
    /// Key or token is invalid, expired, or lacks read access to the board
    Unauthorized,
    /// API rate limit exceeded
    RateLimited,
    /// Malformed id or request parameters
    InvalidRequest,
    /// The board service failed or is temporarily unavailable
    ServiceUnavailable,
    /// Any other non-success status
    HttpStatus(u16),
}

impl BoardErrorCode {
    /// Classifies a non-success HTTP status.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            401 | 403 => Self::Unauthorized,
            429 => Self::RateLimited,
            400 => Self::InvalidRequest,
            500..=599 => Self::ServiceUnavailable,
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl fmt::Display for BoardErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Board API returned an error ({code}): {message}")]
    BoardService {
        code: BoardErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Whether the failure happened below the HTTP layer (DNS, TLS, connect, body read).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkFailure(_))
    }

    /// Whether the board service reported the object as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BoardService { code, .. } if code.is_not_found())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
