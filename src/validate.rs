pub mod utils;

use crate::error::{Error, Result};
use regex::Regex;
use std::{collections::HashMap, sync::OnceLock};
use utils::validate_non_empty;

/// Trait for validating platform-specific identifiers extracted from user input.
///
/// Implementors return `Ok(canonical)` on success.
pub trait Validate {
    /// Validate the input and return a canonicalized String (e.g. a trimmed username).
    ///
    /// # Errors
    ///
    /// Returns an error describing why the input was rejected.
    fn validate(&self, input: &str) -> Result<String>;
}

const GITHUB_MAX_LEN: usize = 39;

static USERNAME_RULES: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();

fn username_rules() -> &'static HashMap<&'static str, Regex> {
    USERNAME_RULES.get_or_init(|| {
        [
            ("twitter", r"^[a-zA-Z0-9_]{1,15}$"),
            ("instagram", r"^[a-zA-Z0-9._]{1,30}$"),
            ("tiktok", r"^[a-zA-Z0-9._]{1,24}$"),
            ("youtube", r"^[a-zA-Z0-9._-]{1,30}$"),
            ("linkedin", r"^[a-zA-Z0-9-]{3,100}$"),
            ("reddit", r"^[a-zA-Z0-9_-]{3,20}$"),
            ("facebook", r"^[a-zA-Z0-9.]{5,50}$"),
            // Discord profiles are addressed by numeric user id
            ("discord", r"^\d{18,19}$"),
            ("telegram", r"^[a-zA-Z0-9_]{5,32}$"),
            ("twitch", r"^[a-zA-Z0-9_]{4,25}$"),
            ("pinterest", r"^[a-zA-Z0-9_]{3,30}$"),
            ("medium", r"^[a-zA-Z0-9_-]{1,30}$"),
        ]
        .into_iter()
        .map(|(key, pattern)| {
            let re = Regex::new(pattern).expect("failed to compile username rule");
            (key, re)
        })
        .collect()
    })
}

/// Username format rules for a single platform.
#[derive(Debug, Clone, Copy)]
pub struct UsernameValidator<'a> {
    platform: &'a str,
}

impl<'a> UsernameValidator<'a> {
    #[inline]
    #[must_use]
    pub const fn new(platform: &'a str) -> Self {
        Self { platform }
    }

    fn reject(&self, username: &str) -> Error {
        Error::InvalidUsername {
            platform: self.platform.to_owned(),
            username: username.to_owned(),
        }
    }

    fn is_valid_github(name: &str) -> bool {
        (1..=GITHUB_MAX_LEN).contains(&name.len())
            && !name.starts_with('-')
            && !name.ends_with('-')
            && !name.contains("--")
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    }
}

impl Validate for UsernameValidator<'_> {
    fn validate(&self, input: &str) -> Result<String> {
        let trimmed = validate_non_empty(input)?;

        let ok = if self.platform == "github" {
            Self::is_valid_github(trimmed)
        } else {
            username_rules()
                .get(self.platform)
                .is_none_or(|re| re.is_match(trimmed))
        };

        if ok {
            Ok(trimmed.to_owned())
        } else {
            Err(self.reject(trimmed))
        }
    }
}

/// Check a username against the format rules of `platform`.
///
/// Platforms without a rule accept any non-blank username.
#[must_use]
pub fn validate_username(username: &str, platform: &str) -> bool {
    UsernameValidator::new(platform).validate(username).is_ok()
}
