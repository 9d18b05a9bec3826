use super::{DetectionStrategy, StrategyOutcome, scan_hostname};
use crate::{
    cache::{CachedLookup, DomainCache},
    catalog::Catalog,
    result::Confidence,
};
use std::sync::Arc;
use tracing::trace;

/// Hostname lookup memoized per normalized input string.
///
/// Unparsable inputs and misses are cached as [`CachedLookup::NoMatch`].
#[derive(Debug, Clone)]
pub struct DomainStrategy {
    cache: Arc<dyn DomainCache>,
}

impl DomainStrategy {
    #[must_use]
    pub fn new(cache: Arc<dyn DomainCache>) -> Self {
        Self { cache }
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<dyn DomainCache> {
        &self.cache
    }
}

impl DetectionStrategy for DomainStrategy {
    fn name(&self) -> &'static str {
        "domain"
    }

    fn confidence(&self) -> Confidence {
        Confidence::Medium
    }

    fn attempt<'c>(&self, input: &str, catalog: &'c Catalog) -> StrategyOutcome<'c> {
        if let Some(cached) = self.cache.get(input) {
            trace!(input, ?cached, "domain cache hit");
            return match cached {
                // A key from a different catalog is treated as a miss
                CachedLookup::Platform(key) => catalog
                    .get(&key)
                    .map_or(StrategyOutcome::NoMatch, StrategyOutcome::Matched),
                CachedLookup::NoMatch => StrategyOutcome::NoMatch,
            };
        }

        let outcome = scan_hostname(input, catalog);
        let lookup = outcome.matched().map_or(CachedLookup::NoMatch, |p| {
            CachedLookup::Platform(p.key().to_owned())
        });
        self.cache.insert(input.to_owned(), lookup);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryDomainCache;

    #[test]
    fn memoizes_hits_and_misses() {
        let cache: Arc<dyn DomainCache> = Arc::new(MemoryDomainCache::new());
        let strategy = DomainStrategy::new(Arc::clone(&cache));
        let catalog = Catalog::builtin();

        assert!(strategy.attempt("https://github.com/dev", catalog).matched().is_some());
        assert!(strategy.attempt("https://nowhere.example/", catalog).matched().is_none());
        assert!(matches!(strategy.attempt("garbage", catalog), StrategyOutcome::Unparsable(_)));

        assert_eq!(
            cache.get("https://github.com/dev"),
            Some(CachedLookup::Platform("github".into()))
        );
        assert_eq!(cache.get("https://nowhere.example/"), Some(CachedLookup::NoMatch));
        assert_eq!(cache.get("garbage"), Some(CachedLookup::NoMatch));
    }

    #[test]
    fn answers_from_cache() {
        let cache: Arc<dyn DomainCache> = Arc::new(MemoryDomainCache::new());
        cache.insert("https://nowhere.example/".into(), CachedLookup::Platform("reddit".into()));
        let strategy = DomainStrategy::new(cache);

        let outcome = strategy.attempt("https://nowhere.example/", Catalog::builtin());
        assert_eq!(outcome.matched().map(|p| p.key()), Some("reddit"));
    }

    #[test]
    fn cache_key_is_the_full_input() {
        let cache: Arc<dyn DomainCache> = Arc::new(MemoryDomainCache::new());
        let strategy = DomainStrategy::new(Arc::clone(&cache));
        let catalog = Catalog::builtin();

        strategy.attempt("https://x.com/a?ref=1", catalog);
        strategy.attempt("https://x.com/a?ref=2", catalog);
        assert_eq!(cache.len(), 2);
    }
}
