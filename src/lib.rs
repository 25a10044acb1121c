// src/lib.rs
//! boardfolio library: turns an artist's Trello board into page view-models.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `PageError`, `ValidationError`
//! - **Configuration**: `SiteConfig`, `CommandLineInput`
//! - **Board model**: `BoardList`, `Card`, `Attachment`, `Preview`
//! - **View-models**: `ProfileViewModel`, `GalleryItem`, `CommissionEntry`, `TosSection`
//! - **API client**: `BoardRepository`, `TrelloHttpClient`
//! - **Aggregation**: `ContentAggregator`, `PageSession`, `PageState`, `PageData`

pub mod api;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod model;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, BoardErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, SiteConfig};

// --- Board Model ---
pub use crate::model::{
    Attachment, BoardList, Card, CommissionEntry, GalleryItem, ImageRef, Preview, Pricing,
    ProfileViewModel, TosSection,
};

// --- Domain Types ---
pub use crate::types::{
    ApiKey, ApiToken, AttachmentId, BoardId, CardId, Credentials, Id, ListId,
};

// --- API Client ---
pub use crate::api::{parser::ApiResponse, BoardRepository, TrelloHttpClient};

// --- Aggregation ---
pub use crate::content::{
    ContentAggregator, Degradation, DriftPolicy, FetchStage, FieldRole, FieldRule, ItemFailure,
    Page, PageContent, PageData, PageError, PageSession, PageState, ProfileSchema, SchemaError,
    Subscription,
};
