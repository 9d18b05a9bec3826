use serde::Serialize;
use std::fmt::Display;

/// Platform key reported when nothing matched.
pub const UNKNOWN_PLATFORM: &str = "unknown";

/// Reliability tier, fixed by the strategy that produced the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    Pattern,
    Domain,
    UrlStructure,
    None,
}

impl From<Confidence> for DetectionMethod {
    fn from(value: Confidence) -> Self {
        match value {
            Confidence::High => Self::Pattern,
            Confidence::Medium => Self::Domain,
            Confidence::Low => Self::UrlStructure,
        }
    }
}

impl Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(s)
    }
}

impl Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pattern => "pattern",
            Self::Domain => "domain",
            Self::UrlStructure => "url_structure",
            Self::None => "none",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionMetadata {
    /// The input exactly as the caller passed it.
    pub original_input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_username: Option<String>,
    /// Wall-clock time of the whole call, in milliseconds.
    pub processing_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub platform: String,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub confidence: Confidence,
    pub detection_method: DetectionMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DetectionMetadata>,
}

impl DetectionResult {
    /// The "nothing matched" result: unknown, invalid, low, none.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            platform: UNKNOWN_PLATFORM.into(),
            is_valid: false,
            normalized_url: None,
            display_name: None,
            confidence: Confidence::Low,
            detection_method: DetectionMethod::None,
            metadata: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.platform == UNKNOWN_PLATFORM
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: DetectionMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_follows_confidence() {
        assert_eq!(DetectionMethod::from(Confidence::High), DetectionMethod::Pattern);
        assert_eq!(DetectionMethod::from(Confidence::Medium), DetectionMethod::Domain);
        assert_eq!(DetectionMethod::from(Confidence::Low), DetectionMethod::UrlStructure);
    }

    #[test]
    fn unknown_result_shape() {
        let r = DetectionResult::unknown();
        assert!(r.is_unknown());
        assert!(!r.is_valid);
        assert_eq!(r.confidence, Confidence::Low);
        assert_eq!(r.detection_method, DetectionMethod::None);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(DetectionResult::unknown()).unwrap();
        assert_eq!(json["platform"], "unknown");
        assert_eq!(json["isValid"], false);
        assert_eq!(json["confidence"], "low");
        assert_eq!(json["detectionMethod"], "none");
        assert!(json.get("metadata").is_none());
        assert_eq!(serde_json::to_value(DetectionMethod::UrlStructure).unwrap(), "url_structure");
    }
}
