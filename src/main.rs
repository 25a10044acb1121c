// src/main.rs

use boardfolio::{
    AppError, BoardRepository, CommandLineInput, ContentAggregator, PageState, SiteConfig,
    TrelloHttpClient,
};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Logger, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Name of the log file written next to other temporary files.
const LOG_FILE_NAME: &str = "boardfolio.log";

/// Builds the log4rs configuration.
///
/// Console output goes to stderr so stdout carries only the page JSON, and
/// is filtered to Warn unless `verbose`. The file always receives this
/// crate's debug trace, truncated per run. Dependencies stay at Warn: the
/// HTTP stack logs request URLs, which carry the key and token.
fn logging_config(
    verbose: bool,
    log_file_path: &Path,
) -> Result<Config, Box<dyn std::error::Error>> {
    let console_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let pattern = if verbose {
        "{d(%H:%M:%S)} [{l}] {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .append(false)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}",
        )))
        .build(log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(console_level)))
                .build("stderr", Box::new(stderr_appender)),
        )
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .logger(Logger::builder().build("boardfolio", LevelFilter::Debug))
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(LevelFilter::Warn),
        )?;
    Ok(config)
}

/// Sets up logging for the process.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    log4rs::init_config(logging_config(verbose, &log_file_path)?)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Builds one page and prints it. Returns `false` when the page errored.
async fn render_page(config: &SiteConfig) -> Result<bool, AppError> {
    let client = TrelloHttpClient::with_base_url(
        config.credentials.clone(),
        config.api_base.as_str(),
    )?;
    let repo: Arc<dyn BoardRepository> = Arc::new(client);
    let aggregator =
        ContentAggregator::new(repo, config.board.clone()).with_policy(config.policy);

    log::info!(
        "Building {} page from board {}",
        config.page,
        config.board.as_str()
    );
    let mut session = aggregator.open(config.page);
    let state = session.settled().await;
    session.close().await;

    match state {
        PageState::Ready(data) => {
            for degradation in &data.degradations {
                log::warn!("Degraded: {}", degradation);
            }
            let output = serde_json::json!({
                "page": config.page,
                "view": data.view,
                "degradations": data.degradations,
            });
            let rendered = if config.compact {
                serde_json::to_string(&output)
            } else {
                serde_json::to_string_pretty(&output)
            }
            .map_err(|e| AppError::InternalError {
                message: format!("Failed to serialize page: {}", e),
            })?;
            println!("{}", rendered);
            Ok(true)
        }
        PageState::Errored(message) => {
            eprintln!("{}", message);
            Ok(false)
        }
        PageState::Loading => Err(AppError::InternalError {
            message: "page session settled while still loading".to_string(),
        }),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = SiteConfig::resolve(cli)?;

    if !render_page(&config).await? {
        std::process::exit(1);
    }

    Ok(())
}
