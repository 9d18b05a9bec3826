//! Small lookups over the builtin catalog and URL helpers.

use crate::catalog::Catalog;
use url::Url;

#[inline]
#[must_use]
pub fn is_platform_supported(platform: &str) -> bool {
    Catalog::builtin().contains(platform)
}

/// Display name, or the key itself for unknown platforms.
#[must_use]
pub fn platform_display_name(platform: &str) -> String {
    Catalog::builtin()
        .get(platform)
        .map_or_else(|| platform.to_owned(), |p| p.display_name().to_owned())
}

/// Example domain, or `<key>.com` for unknown platforms.
#[must_use]
pub fn platform_example_domain(platform: &str) -> String {
    Catalog::builtin()
        .get(platform)
        .map_or_else(|| format!("{platform}.com"), |p| p.example_domain().to_owned())
}

#[must_use]
pub fn all_platform_keys() -> Vec<&'static str> {
    Catalog::builtin().keys().collect()
}

fn with_scheme(url: &str) -> String {
    if url.starts_with("http") {
        url.to_owned()
    } else {
        format!("https://{url}")
    }
}

/// Serialized, lowercased form of `url` for comparisons. Unparsable input is
/// returned unchanged.
#[must_use]
pub fn normalize_url(url: &str) -> String {
    Url::parse(&with_scheme(url)).map_or_else(|_| url.to_owned(), |u| u.as_str().to_lowercase())
}

/// Hostname of `url`, adding `https://` when no scheme is present.
#[must_use]
pub fn extract_domain(url: &str) -> Option<String> {
    if url.trim().is_empty() || url == "https://" || url == "http://" {
        return None;
    }
    if !(url.starts_with("http") || url.contains('.')) {
        return None;
    }
    Url::parse(&with_scheme(url))
        .ok()?
        .host_str()
        .map(ToOwned::to_owned)
}
