use crate::{
    catalog::Catalog,
    error::{Error, Result},
    options::DetectionOptions,
};
use std::{env, path::PathBuf, sync::OnceLock};

static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Config {
    /// Attach metadata to every detection unless a call says otherwise.
    pub extract_metadata: bool,
    /// Chunk size for bulk detection.
    pub max_concurrent: usize,
    pub log_dir: PathBuf,
    /// Custom catalog JSON replacing the builtin one.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub const DEFAULT_MAX_CONCURRENT: usize = 5;
    const DEFAULT_LOG_DIR: &'static str = ".logs";

    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let max_concurrent = env::var("SOCIAL_DETECTOR_MAX_CONCURRENT")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(Self::DEFAULT_MAX_CONCURRENT);

        Self {
            extract_metadata: env_flag("SOCIAL_DETECTOR_EXTRACT_METADATA"),
            max_concurrent,
            log_dir: env::var("SOCIAL_DETECTOR_LOG_DIR")
                .map_or_else(|_| PathBuf::from(Self::DEFAULT_LOG_DIR), PathBuf::from),
            catalog_path: get_path_from_env("SOCIAL_DETECTOR_CATALOG_PATH"),
        }
    }

    /// Detection options derived from this configuration.
    #[must_use]
    pub fn detection_options(&self) -> DetectionOptions {
        DetectionOptions {
            extract_metadata: self.extract_metadata,
            ..DetectionOptions::default()
        }
    }

    /// The configured catalog, or the builtin one.
    ///
    /// # Errors
    ///
    /// Propagates [`Catalog::from_path`] errors for a custom catalog file.
    pub fn load_catalog(&self) -> Result<Catalog> {
        self.catalog_path
            .as_ref()
            .map_or_else(|| Ok(Catalog::builtin().clone()), Catalog::from_path)
    }

    /// Initialize the global config (call once at startup).
    ///
    /// # Errors
    ///
    /// Returns error if config is already initialized.
    pub fn init(self) -> Result<()> {
        GLOBAL_CONFIG
            .set(self)
            .map_err(|_| Error::other("config already initialized"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extract_metadata: false,
            max_concurrent: Self::DEFAULT_MAX_CONCURRENT,
            log_dir: PathBuf::from(Self::DEFAULT_LOG_DIR),
            catalog_path: None,
        }
    }
}

/// Get global config (initialized by `Config::init(self)`).
#[must_use]
pub fn global_config() -> Config {
    GLOBAL_CONFIG.get().cloned().unwrap_or_default()
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .is_ok_and(|val| matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
}

/// A set, non-blank variable is kept as-is so a missing file surfaces when loaded.
fn get_path_from_env(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}
