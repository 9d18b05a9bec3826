use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use dotenv::dotenv;
use serde::Serialize;
use social_detector::{
    Error, SocialDetector,
    bulk::{BulkItem, detect_bulk},
    config::{Config, global_config},
    telemetry::setup_logger,
    validate_username,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, stdin};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "social-detector", version, about = "Detect social platforms from URLs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect the platform of a URL or domain.
    Detect {
        input: String,
        /// Build the profile URL for this username.
        #[arg(short, long)]
        username: Option<String>,
        /// Attach input, username and timing metadata.
        #[arg(short, long)]
        metadata: bool,
    },
    /// Extract the username from a profile URL.
    Extract {
        url: String,
        #[arg(short, long)]
        platform: Option<String>,
    },
    /// Check that a URL belongs to the given platform.
    Validate { url: String, platform: String },
    /// Build a profile URL.
    Profile { platform: String, username: String },
    /// Check a username against a platform's format rules.
    CheckUsername { platform: String, username: String },
    /// List supported platforms.
    Platforms,
    /// Detect every line read from stdin.
    Bulk {
        /// Items processed at once (defaults to SOCIAL_DETECTOR_MAX_CONCURRENT).
        #[arg(short = 'c', long)]
        max_concurrent: Option<usize>,
    },
}

fn print_json<T: Serialize>(value: &T) -> color_eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    dotenv().ok();
    color_eyre::install()?;

    Config::from_env().init()?;
    let config = global_config();
    if let Err(err) = setup_logger(&config.log_dir) {
        eprintln!("failed to set up logging: {err}");
    }

    let cli = Cli::parse();
    let detector = SocialDetector::with_catalog(config.load_catalog()?);
    info!(platforms = detector.catalog().len(), "detector ready");

    match cli.command {
        Command::Detect {
            input,
            username,
            metadata,
        } => {
            let mut options = config.detection_options();
            options.extract_metadata |= metadata;
            print_json(&detector.detect(&input, username.as_deref(), &options))?;
        }
        Command::Extract { url, platform } => {
            print_json(&detector.extract_username(&url, platform.as_deref()))?;
        }
        Command::Validate { url, platform } => {
            print_json(&detector.validate_platform(&url, &platform))?;
        }
        Command::Profile { platform, username } => {
            if !detector.catalog().contains(&platform) {
                return Err(Error::UnknownPlatform(platform).into());
            }
            let url = detector
                .generate_profile_url(&platform, &username)
                .ok_or_else(|| eyre!("cannot build a {platform} profile url for {username:?}"))?;
            println!("{url}");
        }
        Command::CheckUsername { platform, username } => {
            print_json(&validate_username(&username, &platform))?;
        }
        Command::Platforms => print_json(&detector.supported_platforms())?,
        Command::Bulk { max_concurrent } => {
            let mut lines = BufReader::new(stdin()).lines();
            let mut items = Vec::new();
            while let Some(line) = lines.next_line().await? {
                if line.trim().is_empty() {
                    continue;
                }
                items.push(BulkItem::new(items.len().to_string(), line));
            }
            if items.is_empty() {
                warn!("no input lines on stdin");
            }

            let concurrency = max_concurrent.unwrap_or(config.max_concurrent);
            let outcomes = detect_bulk(
                Arc::new(detector),
                items,
                config.detection_options(),
                concurrency,
            )
            .await;
            print_json(&outcomes)?;
        }
    }

    Ok(())
}
