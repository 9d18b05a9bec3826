use serde::{Deserialize, Serialize};

/// Options recognised by [`SocialDetector::detect`](crate::SocialDetector::detect).
///
/// Only `extract_metadata` changes behaviour today. The other fields are
/// reserved: they are accepted and carried along but no strategy reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct DetectionOptions {
    /// Reserved, no effect.
    pub strict_mode: bool,
    /// Reserved, no effect. Subdomains are always matched as the catalog rules allow.
    pub include_subdomains: bool,
    /// Reserved, no effect. Input is always case-folded.
    pub case_sensitive: bool,
    /// Attach [`DetectionMetadata`](crate::DetectionMetadata) to every result.
    pub extract_metadata: bool,
}

impl Default for DetectionOptions {
    fn default() -> Self {
        Self {
            strict_mode: false,
            include_subdomains: true,
            case_sensitive: false,
            extract_metadata: false,
        }
    }
}

impl DetectionOptions {
    #[must_use]
    pub const fn with_metadata(mut self) -> Self {
        self.extract_metadata = true;
        self
    }
}
