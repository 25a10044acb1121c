// src/config.rs
use crate::api::client::normalize_base_url;
use crate::constants::TRELLO_API_BASE_URL;
use crate::content::{DriftPolicy, Page};
use crate::error::AppError;
use crate::types::{ApiKey, ApiToken, BoardId, Credentials};
use clap::Parser;
use url::Url;

/// Environment variable holding the Trello API key.
pub const API_KEY_ENV: &str = "TRELLO_API_KEY";
/// Environment variable holding the Trello member token.
pub const TOKEN_ENV: &str = "TRELLO_TOKEN";
/// Environment variable holding the default board.
pub const BOARD_ENV: &str = "TRELLO_BOARD_ID";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Page to build: home, about, gallery, commissions or terms
    #[arg(value_enum)]
    pub page: Page,

    /// Board ID, short link or board URL (defaults to $TRELLO_BOARD_ID)
    #[arg(short, long)]
    pub board: Option<String>,

    /// Root of the board API (e.g. a caching proxy)
    #[arg(long, default_value = TRELLO_API_BASE_URL)]
    pub api_base: String,

    /// Fail the page when a profile card does not carry its expected label
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Print JSON on a single line
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved site configuration, validated and ready to build pages.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub page: Page,
    pub board: BoardId,
    pub credentials: Credentials,
    pub api_base: Url,
    pub policy: DriftPolicy,
    pub compact: bool,
    pub verbose: bool,
}

impl SiteConfig {
    /// Resolves a complete configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, |name| std::env::var(name).ok())
    }

    /// Resolves a configuration, reading environment values through `env`.
    pub fn resolve_with(
        cli: CommandLineInput,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let require = |name: &str| {
            env(name).filter(|v| !v.trim().is_empty()).ok_or_else(|| {
                AppError::MissingConfiguration(format!("{} environment variable not set", name))
            })
        };

        let key = ApiKey::new(require(API_KEY_ENV)?)?;
        let token = ApiToken::new(require(TOKEN_ENV)?)?;

        let board_input = match cli.board {
            Some(board) => board,
            None => require(BOARD_ENV).map_err(|_| {
                AppError::MissingConfiguration(format!(
                    "no board given: pass --board or set {}",
                    BOARD_ENV
                ))
            })?,
        };
        let board = BoardId::parse(&board_input)?;
        let api_base = normalize_base_url(&cli.api_base)?;

        Ok(SiteConfig {
            page: cli.page,
            board,
            credentials: Credentials::new(key, token),
            api_base,
            policy: if cli.strict {
                DriftPolicy::Strict
            } else {
                DriftPolicy::Lenient
            },
            compact: cli.compact,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const KEY: &str = "0123456789abcdef0123456789abcdef";
    const TOKEN: &str = "ATTA0123456789abcdef0123456789abcdef";

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn parse(args: &[&str]) -> CommandLineInput {
        CommandLineInput::parse_from(std::iter::once("boardfolio").chain(args.iter().copied()))
    }

    #[test]
    fn test_resolve_from_flags_and_env() {
        let config = SiteConfig::resolve_with(
            parse(&["gallery", "--board", "AbCd1234", "--strict"]),
            env(&[(API_KEY_ENV, KEY), (TOKEN_ENV, TOKEN)]),
        )
        .unwrap();

        assert_eq!(config.page, Page::Gallery);
        assert_eq!(config.board.as_str(), "AbCd1234");
        assert_eq!(config.policy, DriftPolicy::Strict);
        assert_eq!(config.api_base.as_str(), TRELLO_API_BASE_URL);
    }

    #[test]
    fn test_board_falls_back_to_env() {
        let config = SiteConfig::resolve_with(
            parse(&["terms"]),
            env(&[(API_KEY_ENV, KEY), (TOKEN_ENV, TOKEN), (BOARD_ENV, "AbCd1234")]),
        )
        .unwrap();
        assert_eq!(config.page, Page::TermsOfService);
        assert_eq!(config.policy, DriftPolicy::Lenient);
    }

    #[test]
    fn test_missing_secrets_are_reported() {
        let err = SiteConfig::resolve_with(
            parse(&["about", "--board", "AbCd1234"]),
            env(&[(API_KEY_ENV, KEY)]),
        )
        .unwrap_err();
        assert!(err.to_string().contains(TOKEN_ENV));

        let err = SiteConfig::resolve_with(
            parse(&["about"]),
            env(&[(API_KEY_ENV, KEY), (TOKEN_ENV, TOKEN)]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("--board"));
    }

    #[test]
    fn test_invalid_board_is_a_validation_error() {
        let err = SiteConfig::resolve_with(
            parse(&["home", "--board", "nope"]),
            env(&[(API_KEY_ENV, KEY), (TOKEN_ENV, TOKEN)]),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
