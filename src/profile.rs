use crate::{catalog::PlatformPattern, username::sanitize_username};

/// Build the canonical profile URL for `username` on `pattern`'s platform.
///
/// A username prefix such as `@` is never doubled: when the base URL already
/// ends with the prefix it is stripped from the username, otherwise it is
/// added unless the username already carries it.
///
/// Returns `None` for a blank username or one that sanitizes to nothing.
#[must_use]
pub fn generate_profile_url(pattern: &PlatformPattern, username: &str) -> Option<String> {
    if username.trim().is_empty() {
        return None;
    }

    let clean = sanitize_username(username);
    let base = pattern.base_url();

    let handle = match pattern.username_prefix() {
        Some(prefix) if base.ends_with(prefix) => {
            clean.strip_prefix(prefix).unwrap_or(&clean).to_owned()
        }
        Some(prefix) if clean.starts_with(prefix) => clean,
        Some(prefix) => format!("{prefix}{clean}"),
        None => clean,
    };

    let bare = pattern
        .username_prefix()
        .map_or(handle.as_str(), |p| handle.strip_prefix(p).unwrap_or(&handle));
    if bare.is_empty() {
        return None;
    }

    Some(format!("{base}{handle}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn url(key: &str, name: &str) -> Option<String> {
        generate_profile_url(Catalog::builtin().get(key).unwrap(), name)
    }

    #[test]
    fn plain_concatenation() {
        assert_eq!(url("instagram", "testuser").as_deref(), Some("https://instagram.com/testuser"));
        assert_eq!(
            url("linkedin", "jane-doe").as_deref(),
            Some("https://linkedin.com/in/jane-doe")
        );
    }

    #[test]
    fn prefix_is_not_doubled() {
        let expected = Some("https://youtube.com/@name".to_owned());
        assert_eq!(url("youtube", "name"), expected);
        assert_eq!(url("youtube", "@name"), expected);
    }

    #[test]
    fn username_is_sanitized() {
        assert_eq!(
            url("instagram", "  TestUser  ").as_deref(),
            Some("https://instagram.com/testuser")
        );
        assert_eq!(url("github", "dev/../etc").as_deref(), Some("https://github.com/dev..etc"));
    }

    #[test]
    fn blank_or_empty_after_sanitizing() {
        assert_eq!(url("instagram", ""), None);
        assert_eq!(url("instagram", "   "), None);
        assert_eq!(url("instagram", "!!!"), None);
        assert_eq!(url("youtube", "@"), None);
    }

    #[test]
    fn prefix_inserted_when_base_lacks_it() {
        let json = r#"[{"key":"demo","displayName":"Demo","exampleDomain":"demo.example","baseUrl":"https://demo.example/","usernamePrefix":"~","domains":["demo\\.example$"]}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let demo = catalog.get("demo").unwrap();
        // `~` is stripped by the sanitizer, so the prefix is always inserted
        assert_eq!(generate_profile_url(demo, "bob").as_deref(), Some("https://demo.example/~bob"));
        assert_eq!(
            generate_profile_url(demo, "~bob").as_deref(),
            Some("https://demo.example/~bob")
        );
    }

    #[test]
    fn username_already_prefixed_is_kept() {
        let json = r#"[{"key":"demo","displayName":"Demo","exampleDomain":"demo.example","baseUrl":"https://demo.example/","usernamePrefix":"@","domains":["demo\\.example$"]}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let demo = catalog.get("demo").unwrap();
        assert_eq!(
            generate_profile_url(demo, "@bob").as_deref(),
            Some("https://demo.example/@bob")
        );
        assert_eq!(generate_profile_url(demo, "bob").as_deref(), Some("https://demo.example/@bob"));
    }
}
