use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Strong typing for board object IDs with phantom types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentMarker;

/// Type aliases for specific ID types
pub type BoardId = Id<BoardMarker>;
pub type ListId = Id<ListMarker>;
pub type CardId = Id<CardMarker>;
pub type AttachmentId = Id<AttachmentMarker>;

/// 24 hex characters, the canonical Trello object id.
static OBJECT_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{24}$")
        .expect("Failed to compile object id regex - this is a bug in the code")
});

/// 8 alphanumeric characters, the short link used in board URLs.
static SHORT_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Za-z]{8}$")
        .expect("Failed to compile short link regex - this is a bug in the code")
});

impl<T> Id<T> {
    /// Wraps an ID exactly as the board service issued it.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _phantom: PhantomData,
        }
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl BoardId {
    /// Parses operator input into a board ID.
    ///
    /// Accepts a 24-character object id, an 8-character short link, or a
    /// board URL of the form `https://trello.com/b/<shortLink>/<slug>`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::EmptyField("board id"));
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            let id = extract_id_from_url(input).ok_or_else(|| {
                ValidationError::InvalidId(format!("Could not extract board ID from URL: {}", input))
            })?;
            return Self::parse(id);
        }

        if OBJECT_ID.is_match(input) {
            return Ok(Self::new(input.to_lowercase()));
        }

        if SHORT_LINK.is_match(input) {
            // Short links are case-sensitive.
            return Ok(Self::new(input));
        }

        Err(ValidationError::InvalidId(format!(
            "expected a 24-character object id or an 8-character short link, got '{}'",
            input
        )))
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}

/// Extract the board segment from a board URL
fn extract_id_from_url(url: &str) -> Option<&str> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    if host != "trello.com" && !host.ends_with(".trello.com") {
        return None;
    }

    // Format: https://trello.com/b/[shortLink]/[slug]
    let path = url.split_once("/b/")?.1;
    path.split(['/', '?', '#']).next().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_id_parsing() {
        // Object id
        let id = BoardId::parse("5F1A2B3C4D5E6F7081920A1B").unwrap();
        assert_eq!(id.as_str(), "5f1a2b3c4d5e6f7081920a1b");

        // Short link keeps its case
        let id = BoardId::parse("AbCd1234").unwrap();
        assert_eq!(id.as_str(), "AbCd1234");

        // Board URL
        let id = BoardId::parse("https://trello.com/b/AbCd1234/artist-portfolio").unwrap();
        assert_eq!(id.as_str(), "AbCd1234");
    }

    #[test]
    fn test_invalid_board_ids() {
        assert!(BoardId::parse("").is_err());
        assert!(BoardId::parse("too-short").is_err());
        assert!(BoardId::parse("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        assert!(BoardId::parse("https://example.com/b/AbCd1234/x").is_err());
        assert!(BoardId::parse("https://trello.com/c/AbCd1234").is_err());
    }

    #[test]
    fn test_board_url_host_must_be_trello() {
        assert!(BoardId::parse("https://nottrello.com/b/AbCd1234/x").is_err());
        assert!(BoardId::parse("https://trello.com.evil.io/b/AbCd1234/x").is_err());

        let id = BoardId::parse("https://www.trello.com/b/AbCd1234/x").unwrap();
        assert_eq!(id.as_str(), "AbCd1234");
    }

    #[test]
    fn test_api_ids_deserialize_verbatim() {
        let id: CardId = serde_json::from_str("\"card-1\"").unwrap();
        assert_eq!(id, CardId::new("card-1"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"card-1\"");
    }
}
