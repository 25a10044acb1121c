// src/types/mod.rs
//! Validated domain primitives: typed board identifiers and API credentials.

use thiserror::Error;

mod credentials;
mod ids;

pub use credentials::*;
pub use ids::*;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid board ID format: {0}")]
    InvalidId(String),

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid API token format: {reason}")]
    InvalidToken { reason: String },
}
