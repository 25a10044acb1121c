// src/api/parser.rs
//! Decoding of board API responses into domain types or typed errors.

use crate::error::{AppError, BoardErrorCode};
use reqwest::{Response, StatusCode};
use serde::Deserialize;

/// Longest slice of a response body quoted back in an error.
const BODY_PREVIEW_LEN: usize = 300;

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
///
/// The query string is stripped from the recorded URL because it carries
/// the API key and token.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let mut url = response.url().clone();
    url.set_query(None);
    let text = response.text().await.map_err(redact_network_error)?;

    Ok(ApiResponse {
        data: text,
        status,
        url: url.to_string(),
    })
}

/// Wraps a transport error with the query string removed from its URL.
///
/// reqwest includes the request URL in its Display output, and that URL
/// carries the key and token.
pub fn redact_network_error(err: reqwest::Error) -> AppError {
    let err = match err.url().cloned() {
        Some(mut url) => {
            url.set_query(None);
            err.with_url(url)
        }
        None => err,
    };
    AppError::NetworkFailure(err)
}

/// Error payload shape used by some Trello endpoints; most reply in plain text.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Parse any board API response into `T`, or into the matching `AppError`.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse {
            url: url.to_string(),
            reason: format!("{} (body: {})", e, preview(body)),
        }
    })
}

fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    let body = body.trim();
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.message.or(e.error))
        .or_else(|| (!body.is_empty()).then(|| preview(body)))
        .unwrap_or_else(|| format!("HTTP {} from {}", status, url));

    AppError::BoardService {
        code: BoardErrorCode::from_http_status(status.as_u16()),
        message,
        status,
    }
}

fn preview(body: &str) -> String {
    if body.len() > BODY_PREVIEW_LEN {
        let cut = (0..=BODY_PREVIEW_LEN)
            .rev()
            .find(|&i| body.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoardList, Card};

    fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://api.trello.com/1/boards/abc/lists".to_string(),
        }
    }

    #[test]
    fn test_parse_lists() {
        let body = r#"[
            {"id": "l1", "name": "Gallery", "closed": false, "pos": 1024},
            {"id": "l2", "name": "Commission"}
        ]"#;
        let lists: Vec<BoardList> = parse_api_response(response(StatusCode::OK, body)).unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[1].name, "Commission");
    }

    #[test]
    fn test_plain_text_error_body() {
        let err = parse_api_response::<Card>(response(
            StatusCode::NOT_FOUND,
            "The requested resource was not found.",
        ))
        .unwrap_err();
        match err {
            AppError::BoardService { code, message, status } => {
                assert_eq!(code, BoardErrorCode::NotFound);
                assert_eq!(message, "The requested resource was not found.");
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_json_error_body() {
        let err = parse_api_response::<Card>(response(
            StatusCode::UNAUTHORIZED,
            r#"{"message": "invalid token", "error": "ERROR"}"#,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::BoardService { code: BoardErrorCode::Unauthorized, ref message, .. }
                if message == "invalid token"
        ));
    }

    #[test]
    fn test_empty_error_body_falls_back_to_status() {
        let err =
            parse_api_response::<Card>(response(StatusCode::BAD_GATEWAY, "")).unwrap_err();
        assert!(err.to_string().contains("HTTP 502 Bad Gateway"));
    }

    #[test]
    fn test_malformed_success_body() {
        let err = parse_api_response::<Vec<BoardList>>(response(StatusCode::OK, "<html>"))
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse { .. }));
    }
}
