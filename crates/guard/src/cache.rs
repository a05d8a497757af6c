//! Call-site resolution cache
//!
//! Resolving the declared name of a guarded parameter happens once per call
//! site. The result is kept in an [`ArgumentCache`] keyed by the call-site key,
//! the declared value type and the parameter name, so later guard calls from
//! the same place only pay for a lookup.

use crate::foundation::{CallSite, CallSiteKey};
use lru::LruCache;
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Cache entry key: call site, declared value type and parameter name.
///
/// One source location can guard several parameters (a helper that forwards
/// the name, a macro expanding several guards), so the name is part of the key.
type EntryKey = (CallSiteKey, &'static str, Cow<'static, str>);

// ============================================================================
// ARGUMENT CACHE
// ============================================================================

/// Thread-safe mapping from call sites to their resolved [`CallSite`].
///
/// # Cache Behavior
///
/// - All reads and writes are serialized by a single `parking_lot::Mutex`
/// - **Unbounded** by default: entries live as long as the cache
/// - Optionally bounded with **LRU eviction** (see [`with_capacity`](Self::with_capacity))
/// - Cloning is cheap and yields a handle to the same cache
#[derive(Clone)]
pub struct ArgumentCache {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    sites: LruCache<EntryKey, Arc<CallSite>>,
    capacity: Option<NonZeroUsize>,
    hits: u64,
    misses: u64,
}

impl ArgumentCache {
    /// Creates an unbounded cache.
    #[must_use]
    pub fn new() -> Self {
        Self::from_lru(LruCache::unbounded(), None)
    }

    /// Creates a cache that holds at most `capacity` call sites, evicting the
    /// least recently used one when full.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self::from_lru(LruCache::new(capacity), Some(capacity))
    }

    fn from_lru(sites: LruCache<EntryKey, Arc<CallSite>>, capacity: Option<NonZeroUsize>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                sites,
                capacity,
                hits: 0,
                misses: 0,
            })),
        }
    }

    /// Returns the call site for `key`, value type `T` and parameter `name`,
    /// creating it on first use.
    pub fn resolve<T: ?Sized>(
        &self,
        key: CallSiteKey,
        name: impl Into<Cow<'static, str>>,
    ) -> Arc<CallSite> {
        let entry = (key, std::any::type_name::<T>(), name.into());
        let mut inner = self.inner.lock();

        if let Some(site) = inner.sites.get(&entry).cloned() {
            inner.hits += 1;
            return site;
        }

        inner.misses += 1;
        let site = Arc::new(CallSite::new::<T>(key, entry.2.clone()));
        tracing::trace!(
            call_site = %key,
            name = site.name(),
            value_type = entry.1,
            "resolved guard call site"
        );

        if let Some(((evicted, _, name), _)) = inner.sites.push(entry, Arc::clone(&site)) {
            tracing::debug!(call_site = %evicted, name = %name, "evicted guard call site");
        }

        site
    }

    /// Looks up a cached call site without creating it or touching the
    /// statistics and recency order.
    #[must_use]
    pub fn peek<T: ?Sized>(
        &self,
        key: CallSiteKey,
        name: impl Into<Cow<'static, str>>,
    ) -> Option<Arc<CallSite>> {
        let entry = (key, std::any::type_name::<T>(), name.into());
        self.inner.lock().sites.peek(&entry).cloned()
    }

    /// Returns the number of cached call sites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().sites.len()
    }

    /// Returns true if no call site has been cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().sites.is_empty()
    }

    /// Returns the capacity, or `None` for an unbounded cache.
    #[must_use]
    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.inner.lock().capacity
    }

    /// Removes every cached call site. Statistics are kept.
    pub fn clear(&self) {
        self.inner.lock().sites.clear();
    }

    /// Returns cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            entries: inner.sites.len(),
            capacity: inner.capacity.map(NonZeroUsize::get),
            hits: inner.hits,
            misses: inner.misses,
        }
    }
}

impl Default for ArgumentCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ArgumentCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentCache")
            .field("stats", &self.stats())
            .finish()
    }
}

// ============================================================================
// STATS
// ============================================================================

/// Statistics about an [`ArgumentCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// The number of call sites currently cached.
    pub entries: usize,
    /// The maximum number of call sites, `None` when unbounded.
    pub capacity: Option<usize>,
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to resolve a new call site.
    pub misses: u64,
}

impl CacheStats {
    /// Returns the fraction of lookups served from the cache (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: CallSiteKey = CallSiteKey::new("cache.rs", 10, 4);
    const OTHER: CallSiteKey = CallSiteKey::new("cache.rs", 11, 4);

    #[test]
    fn test_first_resolve_is_miss() {
        let cache = ArgumentCache::new();
        let site = cache.resolve::<str>(KEY, "value");

        assert_eq!(site.name(), "value");
        assert_eq!(site.key(), KEY);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_second_resolve_is_hit() {
        let cache = ArgumentCache::new();
        let first = cache.resolve::<str>(KEY, "value");
        let second = cache.resolve::<str>(KEY, String::from("value"));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_names_at_one_key_never_share_an_entry() {
        let cache = ArgumentCache::new();
        let width = cache.resolve::<Option<i32>>(KEY, "width");
        let height = cache.resolve::<Option<i32>>(KEY, "height");

        assert_eq!(width.name(), "width");
        assert_eq!(height.name(), "height");
        assert_eq!(cache.len(), 2);
        assert_eq!(
            cache.peek::<Option<i32>>(KEY, "height").map(|s| s.name().to_owned()),
            Some("height".to_owned())
        );
    }

    #[test]
    fn test_keys_never_collide() {
        let cache = ArgumentCache::new();
        let first = cache.resolve::<str>(KEY, "first");
        let second = cache.resolve::<str>(OTHER, "second");

        assert_ne!(first.key(), second.key());
        assert_eq!(second.name(), "second");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_types_never_share_an_entry() {
        let cache = ArgumentCache::new();
        let text = cache.resolve::<str>(KEY, "value");
        let number = cache.resolve::<i32>(KEY, "value");

        assert!(!Arc::ptr_eq(&text, &number));
        assert_eq!(number.type_name(), "i32");
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.peek::<str>(KEY, "value").map(|s| s.type_name()), Some("str"));
        assert!(cache.peek::<u8>(KEY, "value").is_none());
    }

    #[test]
    fn test_bounded_cache_evicts_least_recent() {
        let cache = ArgumentCache::with_capacity(NonZeroUsize::new(1).unwrap());
        cache.resolve::<str>(KEY, "first");
        cache.resolve::<str>(OTHER, "second");

        assert_eq!(cache.len(), 1);
        assert!(cache.peek::<str>(KEY, "first").is_none());
        assert_eq!(cache.capacity().map(NonZeroUsize::get), Some(1));
        assert_eq!(cache.stats().capacity, Some(1));
    }

    #[test]
    fn test_clear() {
        let cache = ArgumentCache::new();
        cache.resolve::<str>(KEY, "value");
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_clone_shares_entries() {
        let cache = ArgumentCache::new();
        let handle = cache.clone();
        handle.resolve::<str>(KEY, "value");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_hit_rate() {
        let cache = ArgumentCache::new();
        assert_eq!(cache.stats().hit_rate(), 0.0);
        cache.resolve::<str>(KEY, "value");
        cache.resolve::<str>(KEY, "value");
        assert_eq!(cache.stats().hit_rate(), 0.5);
        assert_eq!(cache.stats().capacity, None);
    }
}
