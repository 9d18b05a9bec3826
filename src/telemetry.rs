use std::{fs::create_dir_all, path::Path};
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "social-detector.log";

/// Install the global tracing subscriber.
///
/// Logs go to stderr and to a file under `log_dir`. `RUST_LOG` controls the
/// level (default `info`).
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a subscriber is
/// already installed.
pub fn setup_logger(log_dir: &Path) -> color_eyre::Result<()> {
    create_dir_all(log_dir)?;

    let logfile = if cfg!(debug_assertions) {
        rolling::daily(log_dir, LOG_FILE)
    } else {
        rolling::never(log_dir, LOG_FILE)
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    #[cfg(feature = "bunyan")]
    {
        use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};

        let formatter = BunyanFormattingLayer::new("social-detector".into(), logfile);
        tracing_subscriber::registry()
            .with(filter)
            .with(JsonStorageLayer)
            .with(formatter)
            .try_init()?;
    }

    #[cfg(not(feature = "bunyan"))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(logfile),
            )
            .try_init()?;
    }

    Ok(())
}
