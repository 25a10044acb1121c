// src/model/mod.rs
//! Board content as the board service returns it.
//!
//! These types mirror the Trello JSON payloads closely (camelCase on the
//! wire). They are read-only snapshots: nothing here is written back, and
//! every page visit fetches them fresh.

pub mod view;

pub use view::*;

use crate::constants::IMAGE_MIME_PREFIX;
use crate::types::{AttachmentId, CardId, ListId};
use serde::{Deserialize, Serialize};

/// A list on the board ("Gallery", "Commission", ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
}

/// A card within a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub desc: String,
}

impl Card {
    /// The card description, or `None` when the author left it blank.
    pub fn description(&self) -> Option<&str> {
        Some(self.desc.as_str()).filter(|d| !d.is_empty())
    }
}

/// A file or link attached to a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: AttachmentId,
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub previews: Vec<Preview>,
}

impl Attachment {
    /// Whether the attachment's media type denotes an image.
    pub fn is_image(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|mime| mime.starts_with(IMAGE_MIME_PREFIX))
    }
}

/// A scaled rendition the board service generated for an image attachment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub scaled: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
