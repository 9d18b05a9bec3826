use super::{DetectionStrategy, StrategyOutcome};
use crate::{catalog::Catalog, result::Confidence};
use regex::Regex;
use std::sync::OnceLock;

/// Path shapes in priority order, each with its candidate platforms.
///
/// Only the first candidate present in the catalog is reported; the rest
/// document which other platforms share the shape.
const SHAPES: &[(&str, &[&str])] = &[
    (r"/watch\?v=", &["youtube"]),
    (r"/status/\d+", &["twitter"]),
    (r"/p/[\w-]+", &["instagram"]),
    (r"/in/[\w-]+", &["linkedin"]),
    (r"/@[\w-]+", &["twitter", "medium", "youtube"]),
    (r"/u/[\w-]+", &["reddit"]),
    (r"/channel/", &["youtube"]),
    (r"/c/[\w-]+", &["youtube"]),
    (r"/user/[\w-]+", &["reddit", "github"]),
    (r"/company/[\w-]+", &["linkedin"]),
    (r"/profile/[\w-]+", &["facebook"]),
];

static SHAPE_RES: OnceLock<Vec<(Regex, &'static [&'static str])>> = OnceLock::new();

fn shapes() -> &'static [(Regex, &'static [&'static str])] {
    SHAPE_RES.get_or_init(|| {
        SHAPES
            .iter()
            .map(|&(pattern, platforms)| {
                let re = Regex::new(pattern).expect("failed to compile regex");
                (re, platforms)
            })
            .collect()
    })
}

/// Guesses a platform from the path shape alone, whatever the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructureStrategy;

impl StructureStrategy {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DetectionStrategy for StructureStrategy {
    fn name(&self) -> &'static str {
        "url_structure"
    }

    fn confidence(&self) -> Confidence {
        Confidence::Low
    }

    fn attempt<'c>(&self, input: &str, catalog: &'c Catalog) -> StrategyOutcome<'c> {
        shapes()
            .iter()
            .filter(|(re, _)| re.is_match(input))
            .find_map(|(_, platforms)| platforms.first().and_then(|key| catalog.get(key)))
            .map_or(StrategyOutcome::NoMatch, StrategyOutcome::Matched)
    }
}
