// src/api/mod.rs
//! Board API interaction: the ability to read lists, cards and attachments.
//!
//! This module provides a data-oriented interface to the board service,
//! with clear separation between I/O operations and parsing. The content
//! layer depends on [`BoardRepository`], never on HTTP details.

pub mod client;
pub mod parser;

use crate::error::AppError;
use crate::model::{Attachment, BoardList, Card};
use crate::types::{BoardId, CardId, ListId};

/// The ability to read content from a board.
///
/// Implementations must return collections in the board's own order: list
/// resolution and positional card binding both depend on it.
#[async_trait::async_trait]
pub trait BoardRepository: Send + Sync {
    async fn list_lists(&self, board: &BoardId) -> Result<Vec<BoardList>, AppError>;
    async fn list_cards(&self, list: &ListId) -> Result<Vec<Card>, AppError>;
    /// Card detail, including its full description.
    async fn get_card(&self, card: &CardId) -> Result<Card, AppError>;
    async fn list_attachments(&self, card: &CardId) -> Result<Vec<Attachment>, AppError>;
}

pub use client::TrelloHttpClient;
