use crate::{
    cache::DomainCache,
    catalog::{Catalog, PlatformPattern},
    result::Confidence,
    strategies::{
        DetectionStrategy, DomainStrategy, PatternStrategy, StrategyOutcome, StructureStrategy,
    },
};
use std::sync::Arc;
use tracing::{debug, trace};

/// A successful match and the strategy that produced it.
#[derive(Debug, Clone, Copy)]
pub struct MatchOutcome<'c> {
    pub pattern: &'c PlatformPattern,
    pub confidence: Confidence,
    pub strategy: &'static str,
}

/// Ordered chain of detection strategies; the first match wins.
#[derive(Debug, Clone)]
pub struct Matcher {
    strategies: Arc<[Box<dyn DetectionStrategy>]>,
}

impl Matcher {
    /// The standard chain: pattern, then cached domain lookup, then path shape.
    #[must_use]
    pub fn new(cache: Arc<dyn DomainCache>) -> Self {
        Self::with_strategies(vec![
            Box::new(PatternStrategy::new()),
            Box::new(DomainStrategy::new(cache)),
            Box::new(StructureStrategy::new()),
        ])
    }

    #[must_use]
    pub fn with_strategies(strategies: Vec<Box<dyn DetectionStrategy>>) -> Self {
        Self {
            strategies: strategies.into(),
        }
    }

    pub fn strategy_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strategies.iter().map(|s| s.name())
    }

    /// Run `input` (already normalized) through the chain.
    #[must_use]
    pub fn run<'c>(&self, input: &str, catalog: &'c Catalog) -> Option<MatchOutcome<'c>> {
        for strategy in &*self.strategies {
            match strategy.attempt(input, catalog) {
                StrategyOutcome::Matched(pattern) => {
                    debug!(strategy = strategy.name(), platform = pattern.key(), "matched");
                    return Some(MatchOutcome {
                        pattern,
                        confidence: strategy.confidence(),
                        strategy: strategy.name(),
                    });
                }
                StrategyOutcome::NoMatch => {
                    trace!(strategy = strategy.name(), "no match");
                }
                StrategyOutcome::Unparsable(err) => {
                    trace!(strategy = strategy.name(), %err, "input is not a url");
                }
            }
        }
        None
    }
}
