mod domain;
mod pattern;
mod structure;

use crate::{
    catalog::{Catalog, PlatformPattern},
    result::Confidence,
};
use std::fmt::Debug;
use url::{ParseError, Url};

pub use domain::DomainStrategy;
pub use pattern::PatternStrategy;
pub use structure::StructureStrategy;

/// Result of a single strategy attempt.
#[derive(Debug, Clone)]
pub enum StrategyOutcome<'c> {
    Matched(&'c PlatformPattern),
    NoMatch,
    /// The input is not an absolute URL; the next strategy should be tried.
    Unparsable(ParseError),
}

impl<'c> StrategyOutcome<'c> {
    #[inline]
    #[must_use]
    pub const fn matched(&self) -> Option<&'c PlatformPattern> {
        match self {
            Self::Matched(p) => Some(*p),
            Self::NoMatch | Self::Unparsable(_) => None,
        }
    }
}

pub trait DetectionStrategy: Debug + Send + Sync {
    /// Short name used for logging.
    fn name(&self) -> &'static str;

    /// Confidence reported when this strategy matches.
    fn confidence(&self) -> Confidence;

    /// Try to classify an already normalized input.
    fn attempt<'c>(&self, input: &str, catalog: &'c Catalog) -> StrategyOutcome<'c>;
}

/// Parse `input` as an absolute URL and return its lowercase hostname.
///
/// URLs without a host (e.g. `mailto:`) yield `Ok(None)`.
pub(crate) fn parse_hostname(input: &str) -> Result<Option<String>, ParseError> {
    let url = Url::parse(input)?;
    Ok(url.host_str().map(str::to_lowercase))
}

/// Hostname scan shared by the pattern and domain strategies.
pub(crate) fn scan_hostname<'c>(input: &str, catalog: &'c Catalog) -> StrategyOutcome<'c> {
    match parse_hostname(input) {
        Ok(Some(host)) => catalog
            .match_hostname(&host)
            .map_or(StrategyOutcome::NoMatch, StrategyOutcome::Matched),
        Ok(None) => StrategyOutcome::NoMatch,
        Err(e) => StrategyOutcome::Unparsable(e),
    }
}
