//! Static catalog of known platforms and their hostname rules.
//!
//! The catalog ships as an embedded JSON array so that declaration order is
//! explicit: when two platforms claim the same hostname, the one declared
//! first wins.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
    sync::OnceLock,
};
use tracing::debug;
use url::Url;

/// Embedded platform data (loaded at compile time).
const PLATFORMS_JSON: &str = include_str!("catalog/platforms.json");

static BUILTIN_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Raw catalog entry as stored in JSON.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PatternData {
    key: String,
    display_name: String,
    example_domain: String,
    base_url: String,
    #[serde(default)]
    username_prefix: Option<String>,
    domains: Vec<String>,
}

/// A single platform entry with compiled hostname rules.
#[derive(Debug, Clone)]
pub struct PlatformPattern {
    key: String,
    domains: Vec<Regex>,
    base_url: String,
    display_name: String,
    example_domain: String,
    username_prefix: Option<String>,
}

impl PlatformPattern {
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    #[must_use]
    pub fn domains(&self) -> &[Regex] {
        &self.domains
    }

    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[inline]
    #[must_use]
    pub fn example_domain(&self) -> &str {
        &self.example_domain
    }

    #[inline]
    #[must_use]
    pub fn username_prefix(&self) -> Option<&str> {
        self.username_prefix.as_deref()
    }

    /// Whether any hostname rule matches. `host` must already be lowercase.
    #[must_use]
    pub fn matches_host(&self, host: &str) -> bool {
        self.domains.iter().any(|re| re.is_match(host))
    }

    #[must_use]
    pub fn info(&self) -> PlatformInfo {
        PlatformInfo {
            key: self.key.clone(),
            display_name: self.display_name.clone(),
            example_domain: self.example_domain.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl TryFrom<PatternData> for PlatformPattern {
    type Error = Error;

    fn try_from(data: PatternData) -> Result<Self> {
        if data.key.trim().is_empty() {
            return Err(Error::catalog("platform key cannot be empty"));
        }
        if data.domains.is_empty() {
            return Err(Error::catalog(format!("{}: no domain rules", data.key)));
        }
        if data.example_domain.starts_with("http://") || data.example_domain.starts_with("https://")
        {
            return Err(Error::catalog(format!(
                "{}: example domain must not carry a scheme",
                data.key
            )));
        }

        Url::parse(&data.base_url)?;
        let prefix_ok = data
            .username_prefix
            .as_deref()
            .is_some_and(|p| data.base_url.ends_with(p));
        if !(data.base_url.ends_with('/') || prefix_ok) {
            return Err(Error::catalog(format!(
                "{}: base url must end with '/' or the username prefix",
                data.key
            )));
        }

        let domains = data
            .domains
            .iter()
            .map(|d| Regex::new(d))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            key: data.key,
            domains,
            base_url: data.base_url,
            display_name: data.display_name,
            example_domain: data.example_domain,
            username_prefix: data.username_prefix.filter(|p| !p.is_empty()),
        })
    }
}

/// Public summary of a supported platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
    pub key: String,
    pub display_name: String,
    pub example_domain: String,
    pub base_url: String,
}

/// Ordered, immutable set of platform patterns.
#[derive(Debug, Clone)]
pub struct Catalog {
    patterns: Vec<PlatformPattern>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The catalog bundled with the crate, parsed once per process.
    ///
    /// # Panics
    ///
    /// Panics if the embedded `platforms.json` is invalid.
    #[must_use]
    pub fn builtin() -> &'static Self {
        BUILTIN_CATALOG.get_or_init(|| {
            Self::from_json(PLATFORMS_JSON).expect("invalid embedded platforms.json")
        })
    }

    /// Parse and validate a catalog from a JSON array of platform entries.
    ///
    /// # Errors
    ///
    /// - `Error::Json` if the document is malformed.
    /// - `Error::Regex` if a domain rule does not compile.
    /// - `Error::InvalidUrl` if a base url does not parse.
    /// - `Error::Catalog` for duplicate keys/example domains or other rule violations.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries = serde_json::from_str::<Vec<PatternData>>(json)?;
        if entries.is_empty() {
            return Err(Error::catalog("catalog contains no platforms"));
        }

        let mut patterns = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        let mut example_domains = HashSet::with_capacity(entries.len());

        for entry in entries {
            let pattern = PlatformPattern::try_from(entry)?;
            if index.contains_key(&pattern.key) {
                return Err(Error::catalog(format!("duplicate platform key: {}", pattern.key)));
            }
            if !example_domains.insert(pattern.example_domain.clone()) {
                return Err(Error::catalog(format!(
                    "duplicate example domain: {}",
                    pattern.example_domain
                )));
            }
            index.insert(pattern.key.clone(), patterns.len());
            patterns.push(pattern);
        }

        debug!(platforms = patterns.len(), "catalog loaded");
        Ok(Self { patterns, index })
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read, otherwise the errors of
    /// [`Catalog::from_json`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PlatformPattern> {
        self.index.get(key).map(|&i| &self.patterns[i])
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Patterns in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &PlatformPattern> {
        self.patterns.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(PlatformPattern::key)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// First platform, in declaration order, whose rules match `host`.
    #[must_use]
    pub fn match_hostname(&self, host: &str) -> Option<&PlatformPattern> {
        self.patterns.iter().find(|p| p.matches_host(host))
    }

    #[must_use]
    pub fn platform_info(&self) -> Vec<PlatformInfo> {
        self.patterns.iter().map(PlatformPattern::info).collect()
    }
}
