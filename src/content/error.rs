// src/content/error.rs
//! Failure vocabulary of the aggregation layer.
//!
//! Two tiers: [`PageError`] aborts a page, while [`Degradation`] records a
//! non-fatal deviation that travels alongside a successful result.

use super::schema::FieldRole;
use crate::error::AppError;
use crate::model::Card;
use crate::types::CardId;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A failure that prevents a page from rendering at all.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("no list matching '{keyword}' on the board")]
    ListNotFound { keyword: String },

    #[error("list '{list}' has no cards")]
    EmptyList { list: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("content source failed: {0}")]
    Source(#[from] AppError),
}

impl PageError {
    /// Short, user-facing explanation. Transport and service details stay in the logs.
    pub fn user_summary(&self) -> String {
        match self {
            Self::ListNotFound { keyword } => format!("{} list not found", keyword),
            Self::EmptyList { list } => format!("no cards found in the {} list", list),
            Self::Schema(_) => "the board content does not match the expected layout".to_string(),
            Self::Source(err) if err.is_transport() => {
                "the content service could not be reached".to_string()
            }
            Self::Source(_) => "the content service returned an error".to_string(),
        }
    }
}

/// The positional layout of a profile list drifted from its schema.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("card {position} of '{list}' should hold the {role} (label '{expected}') but is named '{found}'")]
    LabelMismatch {
        list: String,
        role: FieldRole,
        position: usize,
        expected: String,
        found: String,
    },
}

/// Which per-card request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStage {
    Detail,
    Attachments,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detail => write!(f, "card detail"),
            Self::Attachments => write!(f, "attachments"),
        }
    }
}

/// A single card that was dropped from a set-mode page because a fetch failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFailure {
    pub card_id: CardId,
    pub card_name: String,
    pub stage: FetchStage,
    pub reason: String,
}

impl ItemFailure {
    pub fn new(card: &Card, stage: FetchStage, error: &AppError) -> Self {
        Self {
            card_id: card.id.clone(),
            card_name: card.name.clone(),
            stage,
            reason: error.to_string(),
        }
    }
}

impl fmt::Display for ItemFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "card '{}' ({}): {} fetch failed: {}",
            self.card_name, self.card_id, self.stage, self.reason
        )
    }
}

/// A recorded, non-fatal deviation from the expected board shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Degradation {
    /// A card was excluded because one of its fetches failed.
    ItemFailed(ItemFailure),
    /// A positional field had no card; its fallback text was used.
    FieldMissing { role: FieldRole, position: usize },
    /// A positional card did not carry the expected label; it was bound anyway.
    FieldMismatch {
        role: FieldRole,
        position: usize,
        expected: String,
        found: String,
    },
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemFailed(failure) => write!(f, "{}", failure),
            Self::FieldMissing { role, position } => {
                write!(f, "no card at position {} for the {}", position, role)
            }
            Self::FieldMismatch {
                role,
                position,
                expected,
                found,
            } => write!(
                f,
                "card {} bound as the {} is named '{}', expected '{}'",
                position, role, found, expected
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_summary_hides_transport_details() {
        let err = PageError::Source(AppError::InternalError {
            message: "socket closed by peer 10.0.0.3".to_string(),
        });
        assert_eq!(err.user_summary(), "the content service returned an error");

        let err = PageError::ListNotFound {
            keyword: "gallery".to_string(),
        };
        assert_eq!(err.user_summary(), "gallery list not found");
    }

    #[test]
    fn test_degradation_serializes_with_kind_tag() {
        let degradation = Degradation::FieldMissing {
            role: FieldRole::Bio,
            position: 3,
        };
        assert_eq!(
            serde_json::to_value(&degradation).unwrap(),
            serde_json::json!({"kind": "field_missing", "role": "bio", "position": 3})
        );
    }
}
