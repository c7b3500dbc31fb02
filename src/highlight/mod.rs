//! Highlight ranges, merging and merge memoization.
//!
//! Key types:
//!
//! - [`HighlightRange`]: `[start, end)` over text offsets, tagged with an id
//! - [`merge_highlights`]: coalesces overlapping and touching ranges
//! - [`MergeCache`]: LRU memoization of merges keyed by the range list

mod cache;
mod merge;
mod range;

pub use cache::{CachePolicy, CacheStats, DEFAULT_CACHE_CAPACITY, MergeCache};
pub use merge::{is_merged, merge_highlights};
pub use range::{HighlightRange, OffsetCorrection, RangePolicy, normalize_ranges};
