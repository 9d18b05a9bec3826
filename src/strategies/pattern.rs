use super::{DetectionStrategy, StrategyOutcome, scan_hostname};
use crate::{catalog::Catalog, result::Confidence};

/// Matches the input's hostname against every catalog rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternStrategy;

impl PatternStrategy {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DetectionStrategy for PatternStrategy {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn confidence(&self) -> Confidence {
        Confidence::High
    }

    fn attempt<'c>(&self, input: &str, catalog: &'c Catalog) -> StrategyOutcome<'c> {
        scan_hostname(input, catalog)
    }
}
