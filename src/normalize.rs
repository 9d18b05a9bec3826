use crate::{error::Result, validate::utils::validate_non_empty};
use regex::Regex;
use std::sync::OnceLock;

const DEFAULT_SCHEME: &str = "https://";

static SCHEME_RE: OnceLock<Regex> = OnceLock::new();

fn scheme_regex() -> &'static Regex {
    SCHEME_RE.get_or_init(|| Regex::new(r"^https?://").expect("failed to compile regex"))
}

/// Turn raw caller input into a lowercase, absolute-looking URL string.
///
/// The whole input is case-folded before the scheme check, so an uppercase
/// scheme such as `HTTP://` is recognised and never prefixed twice. Inputs
/// without a `.` are returned lowercased but otherwise untouched.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if the input is empty or whitespace only.
pub fn normalize_input(input: &str) -> Result<String> {
    let normalized = validate_non_empty(input)?.to_lowercase();

    if normalized.contains('.') && !scheme_regex().is_match(&normalized) {
        return Ok(format!("{DEFAULT_SCHEME}{normalized}"));
    }
    Ok(normalized)
}
