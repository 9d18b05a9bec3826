use crate::{
    cache::{DomainCache, MemoryDomainCache},
    catalog::{Catalog, PlatformInfo},
    matcher::{MatchOutcome, Matcher},
    normalize::normalize_input,
    options::DetectionOptions,
    profile,
    result::{DetectionMetadata, DetectionMethod, DetectionResult},
    username::extract_username_for_platform,
};
use std::{
    sync::{Arc, OnceLock},
    time::Instant,
};
use tracing::debug;

static DEFAULT_DETECTOR: OnceLock<SocialDetector> = OnceLock::new();

/// Classifies URLs and domains against a platform catalog.
///
/// Every method is synchronous and infallible from the caller's point of
/// view: bad input yields an unknown result or `None`.
#[derive(Debug, Clone)]
pub struct SocialDetector {
    catalog: Arc<Catalog>,
    cache: Arc<dyn DomainCache>,
    matcher: Matcher,
}

impl Default for SocialDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialDetector {
    /// Detector over the builtin catalog with a fresh in-memory cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin().clone())
    }

    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::with_parts(catalog, Arc::new(MemoryDomainCache::new()))
    }

    /// Use the builtin catalog with a caller-owned cache.
    #[must_use]
    pub fn with_cache(cache: Arc<dyn DomainCache>) -> Self {
        Self::with_parts(Catalog::builtin().clone(), cache)
    }

    #[must_use]
    pub fn with_parts(catalog: Catalog, cache: Arc<dyn DomainCache>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            matcher: Matcher::new(Arc::clone(&cache)),
            cache,
        }
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn cache(&self) -> &Arc<dyn DomainCache> {
        &self.cache
    }

    /// Detect the platform behind `input`, optionally building a profile URL
    /// for `username`.
    #[must_use]
    pub fn detect(
        &self,
        input: &str,
        username: Option<&str>,
        options: &DetectionOptions,
    ) -> DetectionResult {
        self.detect_optional(Some(input), username, options)
    }

    /// Like [`detect`](Self::detect), but accepts a missing input.
    #[must_use]
    pub fn detect_optional(
        &self,
        input: Option<&str>,
        username: Option<&str>,
        options: &DetectionOptions,
    ) -> DetectionResult {
        let started = Instant::now();
        let raw = input.unwrap_or_default();

        let normalized = match normalize_input(raw) {
            Ok(n) => n,
            Err(err) => {
                debug!(%err, "rejecting input");
                return Self::attach_metadata(
                    DetectionResult::unknown(),
                    raw,
                    None,
                    options,
                    started,
                );
            }
        };

        let Some(outcome) = self.matcher.run(&normalized, &self.catalog) else {
            debug!(input = %normalized, "no platform matched");
            return Self::attach_metadata(DetectionResult::unknown(), raw, None, options, started);
        };

        Self::build_result(&outcome, &normalized, raw, username, options, started)
    }

    fn build_result(
        outcome: &MatchOutcome<'_>,
        normalized: &str,
        raw: &str,
        username: Option<&str>,
        options: &DetectionOptions,
        started: Instant,
    ) -> DetectionResult {
        let pattern = outcome.pattern;
        let username = username.filter(|u| !u.is_empty());

        let normalized_url = match username {
            Some(name) => profile::generate_profile_url(pattern, name),
            None => Some(normalized.to_owned()),
        };

        let result = DetectionResult {
            platform: pattern.key().to_owned(),
            is_valid: true,
            normalized_url,
            display_name: Some(pattern.display_name().to_owned()),
            confidence: outcome.confidence,
            detection_method: DetectionMethod::from(outcome.confidence),
            metadata: None,
        };

        if !options.extract_metadata {
            return result;
        }

        let extracted = username
            .map(ToOwned::to_owned)
            .or_else(|| extract_username_for_platform(normalized, pattern.key()));
        Self::attach_metadata(result, raw, extracted, options, started)
    }

    fn attach_metadata(
        result: DetectionResult,
        raw: &str,
        extracted_username: Option<String>,
        options: &DetectionOptions,
        started: Instant,
    ) -> DetectionResult {
        if !options.extract_metadata {
            return result;
        }
        result.with_metadata(DetectionMetadata {
            original_input: raw.to_owned(),
            extracted_username,
            processing_time: started.elapsed().as_secs_f64() * 1000.0,
        })
    }

    /// Extract the username from a profile URL.
    ///
    /// When `platform` is `None` or not in the catalog, the platform is
    /// detected first.
    #[must_use]
    pub fn extract_username(&self, url: &str, platform: Option<&str>) -> Option<String> {
        let normalized = normalize_input(url).ok()?;

        if let Some(key) = platform.filter(|k| self.catalog.contains(k)) {
            return extract_username_for_platform(&normalized, key);
        }

        let detection = self.detect(&normalized, None, &DetectionOptions::default());
        if !detection.is_valid {
            return None;
        }
        extract_username_for_platform(&normalized, &detection.platform)
    }

    /// Whether `url` is detected as `expected_platform`.
    #[must_use]
    pub fn validate_platform(&self, url: &str, expected_platform: &str) -> bool {
        let detection = self.detect(url, None, &DetectionOptions::default());
        detection.is_valid && detection.platform == expected_platform
    }

    /// Canonical profile URL, or `None` for an unknown platform or blank username.
    #[must_use]
    pub fn generate_profile_url(&self, platform: &str, username: &str) -> Option<String> {
        let pattern = self.catalog.get(platform)?;
        profile::generate_profile_url(pattern, username)
    }

    /// All platforms, in catalog order.
    #[must_use]
    pub fn supported_platforms(&self) -> Vec<PlatformInfo> {
        self.catalog.platform_info()
    }
}

/// Process-wide detector over the builtin catalog.
#[must_use]
pub fn social_detector() -> &'static SocialDetector {
    DEFAULT_DETECTOR.get_or_init(SocialDetector::new)
}

/// Shorthand for `social_detector().detect(..)`.
#[must_use]
pub fn quick_detect(
    input: &str,
    username: Option<&str>,
    options: &DetectionOptions,
) -> DetectionResult {
    social_detector().detect(input, username, options)
}
