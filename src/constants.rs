// src/constants.rs
//! Domain constants that define how board content maps onto the site.
//!
//! Reading these constants should tell you the authoring conventions the
//! aggregation layer relies on: which list feeds which page, what counts as
//! an image, and what a page shows when a field was never authored.

// ---------------------------------------------------------------------------
// Board API boundaries
// ---------------------------------------------------------------------------

/// Base URL of the Trello REST API. Endpoints are joined onto it, so the
/// trailing slash matters.
pub const TRELLO_API_BASE_URL: &str = "https://api.trello.com/1/";

// ---------------------------------------------------------------------------
// List keywords
// ---------------------------------------------------------------------------
//
// A page's list is the first list whose lower-cased name contains its keyword.

pub const HOMEPAGE_LIST_KEYWORD: &str = "homepage";
pub const ABOUT_LIST_KEYWORD: &str = "about";
pub const GALLERY_LIST_KEYWORD: &str = "gallery";
pub const COMMISSION_LIST_KEYWORD: &str = "commission";
pub const TERMS_LIST_KEYWORD: &str = "termofservice";

// ---------------------------------------------------------------------------
// Attachments
// ---------------------------------------------------------------------------

/// MIME prefix an attachment must carry to be treated as an image.
pub const IMAGE_MIME_PREFIX: &str = "image/";

// ---------------------------------------------------------------------------
// Fallback text
// ---------------------------------------------------------------------------

/// Shown when a profile page has no name card (or it has no text).
pub const NAME_FALLBACK: &str = "N/A name";

/// Shown when a profile page has no description card (or it has no text).
pub const DESCRIPTION_FALLBACK: &str = "N/A desc";

/// Shown when the about page has no bio card (or it has no text).
pub const BIO_FALLBACK: &str = "N/A bio";

/// Shown for a terms-of-service section whose card has no description.
pub const SECTION_FALLBACK: &str = "N/A";

// ---------------------------------------------------------------------------
// Commission pricing
// ---------------------------------------------------------------------------

/// Separator between the fields of a commission card's pricing line.
pub const PRICING_DELIMITER: char = ';';
