// src/content/attachments.rs
//! Image selection among a card's attachments.

use crate::model::{Attachment, ImageRef};

/// Attachments whose media type denotes an image, in source order.
pub fn image_attachments(attachments: &[Attachment]) -> impl Iterator<Item = &Attachment> {
    attachments.iter().filter(|a| a.is_image())
}

/// The first image attachment: the one a profile page shows.
pub fn primary_image(attachments: &[Attachment]) -> Option<&Attachment> {
    image_attachments(attachments).next()
}

/// Every image attachment, reduced to what the front end renders.
pub fn collect_images(attachments: &[Attachment]) -> Vec<ImageRef> {
    image_attachments(attachments).map(ImageRef::from).collect()
}
