//! Batch detection on top of the synchronous detector.
//!
//! Items are processed in chunks of `max_concurrent`; each detection runs on
//! the blocking pool and results come back in input order.

use crate::{
    detector::SocialDetector,
    error::Error,
    options::DetectionOptions,
    result::{DetectionMetadata, DetectionResult},
};
use futures::{StreamExt, stream};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tracing::{info, warn};

const INVALID_INPUT: &str = "invalid input provided";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkItem {
    pub id: String,
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl BulkItem {
    #[must_use]
    pub fn new(id: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            input: input.into(),
            username: None,
        }
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkOutcome {
    #[serde(flatten)]
    pub item: BulkItem,
    pub result: DetectionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Detect every item, `max_concurrent` at a time.
///
/// Metadata is always extracted. A zero `max_concurrent` is treated as one.
pub async fn detect_bulk(
    detector: Arc<SocialDetector>,
    items: Vec<BulkItem>,
    options: DetectionOptions,
    max_concurrent: usize,
) -> Vec<BulkOutcome> {
    let options = options.with_metadata();
    let chunk_size = max_concurrent.max(1);
    let total = items.len();
    let mut outcomes = Vec::with_capacity(total);

    for chunk in items.chunks(chunk_size) {
        let chunk_outcomes = stream::iter(chunk.iter().cloned().map(|item| {
            let detector = Arc::clone(&detector);
            async move { detect_one(detector, item, options).await }
        }))
        .buffered(chunk_size)
        .collect::<Vec<_>>()
        .await;

        outcomes.extend(chunk_outcomes);
        info!(completed = outcomes.len(), total, "bulk detection progress");
    }

    outcomes
}

async fn detect_one(
    detector: Arc<SocialDetector>,
    item: BulkItem,
    options: DetectionOptions,
) -> BulkOutcome {
    let task_item = item.clone();
    let joined = spawn_blocking(move || {
        detector.detect(&task_item.input, task_item.username.as_deref(), &options)
    })
    .await;

    match joined {
        Ok(result) => {
            let error = (!result.is_valid && result.is_unknown()).then(|| INVALID_INPUT.to_owned());
            BulkOutcome {
                item,
                result,
                error,
            }
        }
        Err(err) => {
            let err = Error::from(err);
            warn!(id = %item.id, %err, "detection task failed");
            let result = DetectionResult::unknown().with_metadata(DetectionMetadata {
                original_input: item.input.clone(),
                extracted_username: None,
                processing_time: 0.0,
            });
            BulkOutcome {
                item,
                result,
                error: Some(err.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<BulkItem> {
        vec![
            BulkItem::new("1", "https://instagram.com/test"),
            BulkItem::new("2", "https://unknown-site.example/x"),
            BulkItem::new("3", "youtube.com").with_username("creator"),
            BulkItem::new("4", ""),
            BulkItem::new("5", "https://github.com/dev"),
            BulkItem::new("6", "https://x.com/handle"),
        ]
    }

    #[tokio::test]
    async fn keeps_input_order_and_flags_invalid() {
        let detector = Arc::new(SocialDetector::new());
        let out = detect_bulk(detector, items(), DetectionOptions::default(), 4).await;

        let ids = out.iter().map(|o| o.item.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);

        assert_eq!(out[0].result.platform, "instagram");
        assert!(out[0].error.is_none());
        assert_eq!(out[1].error.as_deref(), Some(INVALID_INPUT));
        assert_eq!(out[2].result.normalized_url.as_deref(), Some("https://youtube.com/@creator"));
        assert_eq!(out[3].error.as_deref(), Some(INVALID_INPUT));
        assert!(out.iter().all(|o| o.result.metadata.is_some()));
    }

    #[tokio::test]
    async fn zero_concurrency_still_progresses() {
        let detector = Arc::new(SocialDetector::new());
        let out = detect_bulk(detector, items(), DetectionOptions::default(), 0).await;
        assert_eq!(out.len(), 6);
    }

    #[tokio::test]
    async fn empty_batch() {
        let detector = Arc::new(SocialDetector::new());
        let out = detect_bulk(detector, Vec::new(), DetectionOptions::default(), 5).await;
        assert!(out.is_empty());
    }
}
