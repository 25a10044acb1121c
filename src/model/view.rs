// src/model/view.rs
//! Page view-models handed to the presentation layer.
//!
//! Field names serialise in camelCase because the consumer is a web front end.

use super::{Attachment, Card, Preview};
use crate::types::{AttachmentId, CardId};
use serde::Serialize;

/// Profile block shown on the home and about pages
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileViewModel {
    pub name: String,
    pub description: String,
    /// Only the about page carries a bio.
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

/// An image attachment reduced to what the front end renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub id: AttachmentId,
    pub url: String,
    pub name: String,
    pub file_name: Option<String>,
    pub previews: Vec<Preview>,
}

impl From<&Attachment> for ImageRef {
    fn from(attachment: &Attachment) -> Self {
        Self {
            id: attachment.id.clone(),
            url: attachment.url.clone(),
            name: attachment.name.clone(),
            file_name: attachment.file_name.clone(),
            previews: attachment.previews.clone(),
        }
    }
}

/// One gallery tile: a single image, denormalised with its card's metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub card_id: CardId,
    pub card_title: String,
    pub card_description: String,
    pub id: AttachmentId,
    pub url: String,
    pub name: String,
    pub file_name: Option<String>,
    pub previews: Vec<Preview>,
}

impl GalleryItem {
    pub fn new(card: &Card, image: ImageRef) -> Self {
        Self {
            card_id: card.id.clone(),
            card_title: card.name.clone(),
            card_description: card.desc.clone(),
            id: image.id,
            url: image.url,
            name: image.name,
            file_name: image.file_name,
            previews: image.previews,
        }
    }
}

/// Price tiers parsed from a commission card description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pricing {
    #[serde(rename = "type")]
    pub kind: String,
    pub vnd: String,
    pub usd: String,
}

/// One commission offering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionEntry {
    pub id: CardId,
    pub name: String,
    pub description: String,
    pub pricing: Option<Pricing>,
    pub images: Vec<ImageRef>,
}

/// One section of the terms of service
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TosSection {
    pub id: CardId,
    pub name: String,
    pub description: String,
}
