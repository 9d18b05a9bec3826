use regex::Regex;
use std::{collections::HashMap, sync::OnceLock};
use url::Url;

/// Path shapes that hold the username, by platform.
const EXTRACTION_PATTERNS: &[(&str, &str)] = &[
    ("instagram", DIRECT_SEGMENT),
    ("facebook", DIRECT_SEGMENT),
    ("twitter", DIRECT_SEGMENT),
    ("linkedin", r"/in/([^/?]+)/?(?:\?|$)"),
    ("youtube", AT_SEGMENT),
    ("tiktok", AT_SEGMENT),
    ("github", DIRECT_SEGMENT),
    ("reddit", r"/u/([^/?]+)/?(?:\?|$)"),
    ("discord", r"/users/([^/?]+)/?(?:\?|$)"),
    ("telegram", DIRECT_SEGMENT),
    ("twitch", DIRECT_SEGMENT),
    ("pinterest", DIRECT_SEGMENT),
    ("medium", AT_SEGMENT),
    ("behance", DIRECT_SEGMENT),
    ("bluesky", r"/profile/([^/?]+)/?(?:\?|$)"),
    ("clubhouse", AT_SEGMENT),
    ("devto", DIRECT_SEGMENT),
    ("dribbble", DIRECT_SEGMENT),
    ("gitlab", DIRECT_SEGMENT),
    ("mastodon", AT_SEGMENT),
    ("onlyfans", DIRECT_SEGMENT),
    ("producthunt", AT_SEGMENT),
    ("quora", r"/profile/([^/?]+)/?(?:\?|$)"),
    ("snapchat", r"/add/([^/?]+)/?(?:\?|$)"),
    ("spotify", r"/user/([^/?]+)/?(?:\?|$)"),
    ("threads", AT_SEGMENT),
    ("tumblr", DIRECT_SEGMENT),
    ("vkontakte", DIRECT_SEGMENT),
];

const DIRECT_SEGMENT: &str = r"/([^/?]+)/?(?:\?|$)";
const AT_SEGMENT: &str = r"/@([^/?]+)/?(?:\?|$)";

static EXTRACTORS: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();
static DISALLOWED_RE: OnceLock<Regex> = OnceLock::new();

fn extractors() -> &'static HashMap<&'static str, Regex> {
    EXTRACTORS.get_or_init(|| {
        EXTRACTION_PATTERNS
            .iter()
            .map(|&(key, pattern)| {
                let re = Regex::new(pattern).expect("failed to compile regex");
                (key, re)
            })
            .collect()
    })
}

fn disallowed_regex() -> &'static Regex {
    DISALLOWED_RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_@.\-]").expect("failed to compile regex"))
}

/// Whether a username extraction rule exists for `platform`.
#[must_use]
pub fn has_extractor(platform: &str) -> bool {
    extractors().contains_key(platform)
}

/// Trim, drop everything outside `[A-Za-z0-9_@.-]`, then lowercase.
#[must_use]
pub fn sanitize_username(username: &str) -> String {
    disallowed_regex()
        .replace_all(username.trim(), "")
        .to_lowercase()
}

/// Pull the username out of a profile URL using the rule for `platform`.
///
/// Returns `None` when the platform has no rule, the URL does not parse, or
/// the path does not have the expected shape.
#[must_use]
pub fn extract_username_for_platform(url: &str, platform: &str) -> Option<String> {
    let re = extractors().get(platform)?;
    let parsed = Url::parse(url).ok()?;
    let captures = re.captures(parsed.path())?;
    let name = sanitize_username(captures.get(1)?.as_str());
    (!name.is_empty()).then_some(name)
}
