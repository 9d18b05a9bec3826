//! Classify URLs and domains against a catalog of social platforms, extract
//! usernames and build canonical profile URLs.

pub mod bulk;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod detector;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod options;
pub mod profile;
pub mod result;
pub mod strategies;
pub mod telemetry;
pub mod username;
pub mod utils;
pub mod validate;

pub use cache::{CachedLookup, DomainCache, MemoryDomainCache};
pub use catalog::{Catalog, PlatformInfo, PlatformPattern};
pub use detector::{SocialDetector, quick_detect, social_detector};
pub use error::{Error, Result};
pub use options::DetectionOptions;
pub use result::{Confidence, DetectionMetadata, DetectionMethod, DetectionResult, UNKNOWN_PLATFORM};
pub use username::sanitize_username;
pub use validate::validate_username;
