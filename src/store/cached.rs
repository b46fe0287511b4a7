//! Memoizing wrapper around a membership store.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;
use parking_lot::RwLock;

use super::GraphStore;
use crate::types::KmerToken;

/// Configuration for the membership cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries in the cache.
    pub max_entries: usize,
    /// Whether to enable the cache.
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            enabled: true,
        }
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that fell through to the inner store.
    pub misses: u64,
    /// Current number of entries in the cache.
    pub len: usize,
    /// Maximum capacity of the cache.
    pub cap: usize,
}

/// Membership cache over an inner store.
///
/// Memoizes `contains` answers in an LRU keyed by token. Repeated walks over
/// the same region, restarts from nearby seeds, and dense coverage probe the
/// same neighborhoods again and again, so even a small cache absorbs most
/// lookups against a slow backend.
///
/// The wrapper assumes the inner graph does not change while cached; call
/// [`clear_cache`](CachedGraphStore::clear_cache) after any rebuild.
pub struct CachedGraphStore<S: GraphStore> {
    inner: S,
    cache: Option<RwLock<LruCache<KmerToken, bool>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<S: GraphStore> CachedGraphStore<S> {
    /// Wrap `inner` with the default cache configuration.
    pub fn new(inner: S) -> Self {
        Self::with_config(inner, CacheConfig::default())
    }

    /// Wrap `inner` with a custom cache configuration.
    pub fn with_config(inner: S, config: CacheConfig) -> Self {
        let cache = if config.enabled {
            let size = NonZeroUsize::new(config.max_entries).unwrap_or(NonZeroUsize::MIN);
            Some(RwLock::new(LruCache::new(size)))
        } else {
            None
        };
        Self {
            inner,
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap, discarding the cache.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Cache statistics.
    ///
    /// Returns `None` if caching is disabled.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|cache| {
            let cache = cache.read();
            CacheStats {
                hits: self.hits.load(Ordering::Relaxed),
                misses: self.misses.load(Ordering::Relaxed),
                len: cache.len(),
                cap: cache.cap().get(),
            }
        })
    }

    /// Drop every cached answer. No-op when caching is disabled.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.write().clear();
        }
    }
}

impl<S: GraphStore> GraphStore for CachedGraphStore<S> {
    type Error = S::Error;

    fn contains(&self, token: KmerToken) -> Result<bool, S::Error> {
        if let Some(cache) = &self.cache {
            // Read lock first: peek does not touch recency order.
            if let Some(&present) = cache.read().peek(&token) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Ok(present);
            }
        }

        let present = self.inner.contains(token)?;

        if let Some(cache) = &self.cache {
            self.misses.fetch_add(1, Ordering::Relaxed);
            cache.write().put(token, present);
        }

        Ok(present)
    }
}
