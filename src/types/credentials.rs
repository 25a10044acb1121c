use super::ValidationError;
use std::fmt;

/// Minimum length of a Trello API key (keys are 32 hex characters).
const MIN_KEY_LEN: usize = 32;

/// Minimum length of a Trello member token.
const MIN_TOKEN_LEN: usize = 32;

/// Validated Trello API key
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key with validation
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into().trim().to_string();

        if key.is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot be empty".to_string(),
            });
        }

        if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key must be alphanumeric".to_string(),
            });
        }

        if key.len() < MIN_KEY_LEN {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key is too short".to_string(),
            });
        }

        Ok(Self(key))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated Trello member token
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into().trim().to_string();

        if token.is_empty() {
            return Err(ValidationError::InvalidToken {
                reason: "token cannot be empty".to_string(),
            });
        }

        if token.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidToken {
                reason: "token must not contain whitespace".to_string(),
            });
        }

        if token.len() < MIN_TOKEN_LEN {
            return Err(ValidationError::InvalidToken {
                reason: "token is too short".to_string(),
            });
        }

        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The key/token pair every board API request is signed with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub key: ApiKey,
    pub token: ApiToken,
}

impl Credentials {
    pub fn new(key: ApiKey, token: ApiToken) -> Self {
        Self { key, token }
    }
}

fn redact(secret: &str) -> String {
    let head: String = secret.chars().take(6).collect();
    format!("{}...", head)
}

// Secrets never reach logs verbatim, not even through `{:?}`.
impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(&self.0))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", redact(&self.0))
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(&self.0))
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiToken({})", redact(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_validation() {
        assert!(ApiKey::new("0123456789abcdef0123456789abcdef").is_ok());
        assert!(ApiKey::new("").is_err());
        assert!(ApiKey::new("short").is_err());
        assert!(ApiKey::new("0123456789abcdef-0123456789abcdef").is_err());
    }

    #[test]
    fn test_token_validation() {
        assert!(ApiToken::new("ATTA0123456789abcdef0123456789abcdef").is_ok());
        assert!(ApiToken::new("   ").is_err());
        assert!(ApiToken::new("ATTA 0123456789abcdef0123456789abcdef").is_err());
    }

    #[test]
    fn test_secrets_are_redacted() {
        let key = ApiKey::new("0123456789abcdef0123456789abcdef").unwrap();
        assert_eq!(key.to_string(), "012345...");
        assert_eq!(format!("{:?}", key), "ApiKey(012345...)");
    }
}
