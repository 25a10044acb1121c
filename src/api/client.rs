// src/api/client.rs
//! Thin HTTP client for the Trello REST API.
//!
//! Handles authentication and basic request/response operations; decoding
//! lives in [`super::parser`]. No retries and no timeouts are applied: a
//! failed request surfaces as-is and the caller decides what it means.

use super::parser;
use crate::error::AppError;
use crate::model::{Attachment, BoardList, Card};
use crate::types::{BoardId, CardId, Credentials, ListId, ValidationError};
use reqwest::{header, Client, Response};
use url::Url;

/// A thin wrapper around reqwest Client for board API requests.
#[derive(Clone)]
pub struct TrelloHttpClient {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl TrelloHttpClient {
    /// Creates a client against the public Trello API.
    pub fn new(credentials: Credentials) -> Result<Self, AppError> {
        Self::with_base_url(credentials, crate::constants::TRELLO_API_BASE_URL)
    }

    /// Creates a client against an alternative API root (a proxy or a test server).
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers())
            .build()?;
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
            credentials,
        })
    }

    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers
    }

    /// The API root every endpoint is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Makes an authenticated GET request to the specified endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The API endpoint path, relative to the base URL
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| AppError::InternalError {
                message: format!("Cannot build URL for endpoint '{}': {}", endpoint, e),
            })?;
        url.query_pairs_mut()
            .append_pair("key", self.credentials.key.as_str())
            .append_pair("token", self.credentials.token.as_str());

        // Only the endpoint is logged; the full URL carries the secrets.
        log::debug!("GET {}", endpoint);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(parser::redact_network_error)?;
        log::debug!("GET {} -> {}", endpoint, response.status());

        Ok(response)
    }

    async fn get_json<T>(&self, endpoint: &str) -> Result<T, AppError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.get(endpoint).await?;
        let result = parser::extract_response_text(response).await?;
        parser::parse_api_response(result)
    }
}

#[async_trait::async_trait]
impl super::BoardRepository for TrelloHttpClient {
    async fn list_lists(&self, board: &BoardId) -> Result<Vec<BoardList>, AppError> {
        self.get_json(&format!("boards/{}/lists", board.as_str()))
            .await
    }

    async fn list_cards(&self, list: &ListId) -> Result<Vec<Card>, AppError> {
        self.get_json(&format!("lists/{}/cards", list.as_str())).await
    }

    async fn get_card(&self, card: &CardId) -> Result<Card, AppError> {
        self.get_json(&format!("cards/{}", card.as_str())).await
    }

    async fn list_attachments(&self, card: &CardId) -> Result<Vec<Attachment>, AppError> {
        self.get_json(&format!("cards/{}/attachments", card.as_str()))
            .await
    }
}

/// Parses an API root and guarantees the trailing slash `Url::join` needs.
pub fn normalize_base_url(input: &str) -> Result<Url, ValidationError> {
    let mut url = Url::parse(input.trim()).map_err(|e| ValidationError::InvalidUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ValidationError::InvalidUrl {
            url: input.to_string(),
            reason: "Only HTTP and HTTPS URLs are supported".to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = normalize_base_url("https://api.trello.com/1").unwrap();
        assert_eq!(url.as_str(), "https://api.trello.com/1/");
        assert_eq!(
            url.join("boards/abc/lists").unwrap().as_str(),
            "https://api.trello.com/1/boards/abc/lists"
        );
    }

    #[test]
    fn test_base_url_rejects_other_schemes() {
        assert!(normalize_base_url("ftp://api.trello.com/1/").is_err());
        assert!(normalize_base_url("not a url").is_err());
    }
}
