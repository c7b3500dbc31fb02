//! Memoization of highlight merges.
//!
//! Rendering the same text with the same highlights happens on every frame,
//! so [`MergeCache`] keeps recent merge results keyed by the full range list.
//! Keys compare by value (`Eq + Hash` on every range, id and correction
//! included), never by identity, so two different lists that happen to sort
//! the same way never share an entry.

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;

use crate::highlight::merge::merge_highlights;
use crate::highlight::range::HighlightRange;

/// Default number of distinct range lists kept by [`CachePolicy::default`].
pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(n) => n,
    None => unreachable!(),
};

/// Eviction policy for [`MergeCache`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CachePolicy {
    /// Always recompute.
    Disabled,
    /// Keep at most this many entries, evicting the least recently used.
    Bounded(NonZeroUsize),
    /// Keep every entry ever seen.
    Unbounded,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::Bounded(DEFAULT_CACHE_CAPACITY)
    }
}

/// Cache statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// LRU cache of merged highlight lists.
pub struct MergeCache<Id: Hash + Eq> {
    entries: Option<LruCache<Vec<HighlightRange<Id>>, Arc<[HighlightRange<Id>]>>>,
    policy: CachePolicy,
    hits: u64,
    misses: u64,
}

impl<Id: Clone + Hash + Eq> MergeCache<Id> {
    /// Create a cache with the given policy.
    #[must_use]
    pub fn new(policy: CachePolicy) -> Self {
        let entries = match policy {
            CachePolicy::Disabled => None,
            CachePolicy::Bounded(capacity) => Some(LruCache::new(capacity)),
            CachePolicy::Unbounded => Some(LruCache::unbounded()),
        };
        Self {
            entries,
            policy,
            hits: 0,
            misses: 0,
        }
    }

    /// Create a cache that never stores anything.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(CachePolicy::Disabled)
    }

    /// The policy this cache was built with.
    #[must_use]
    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Merge `ranges`, reusing a previous result for an equal list.
    pub fn merge(&mut self, ranges: &[HighlightRange<Id>]) -> Arc<[HighlightRange<Id>]> {
        let Some(entries) = self.entries.as_mut() else {
            self.misses += 1;
            return merge_highlights(ranges).into();
        };

        if let Some(merged) = entries.get(ranges) {
            self.hits += 1;
            tracing::trace!(ranges = ranges.len(), "merge cache hit");
            return Arc::clone(merged);
        }

        self.misses += 1;
        let merged: Arc<[HighlightRange<Id>]> = merge_highlights(ranges).into();
        if let Some((_, evicted)) = entries.push(ranges.to_vec(), Arc::clone(&merged)) {
            tracing::debug!(evicted = evicted.len(), "merge cache evicted entry");
        }
        tracing::trace!(
            ranges = ranges.len(),
            merged = merged.len(),
            "merge cache miss"
        );
        merged
    }

    /// Drop every entry and reset statistics.
    pub fn clear(&mut self) {
        if let Some(entries) = self.entries.as_mut() {
            entries.clear();
        }
        self.hits = 0;
        self.misses = 0;
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, LruCache::len)
    }

    /// Check if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.len(),
        }
    }
}

impl<Id: Clone + Hash + Eq> Default for MergeCache<Id> {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}

impl<Id: Hash + Eq> std::fmt::Debug for MergeCache<Id> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergeCache")
            .field("policy", &self.policy)
            .field("entries", &self.entries.as_ref().map_or(0, LruCache::len))
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}
