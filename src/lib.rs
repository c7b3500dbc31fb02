//! `selectable_text` - Highlight merging and segmentation for selectable text views
//!
//! Turns a display string and a set of possibly-overlapping highlight ranges
//! into styled text runs for a host text-selection view, and resolves the
//! host's press and selection events back to highlights and callbacks.
//!
//! The pieces, bottom up:
//!
//! - [`highlight`]: ranges, the merge fold and its LRU memoization
//! - [`text`]: segmentation into plain/highlight runs and `<b>` markup
//! - [`press`]: press-to-highlight resolution per platform
//! - [`SelectableText`]: the view tying it together
//!
//! ```
//! use selectable_text::{HighlightRange, merge_highlights};
//!
//! let merged = merge_highlights(&[
//!     HighlightRange::new(0, 5, "a"),
//!     HighlightRange::new(5, 10, "b"),
//! ]);
//! assert_eq!(merged, vec![HighlightRange::new(0, 10, "b")]);
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow HighlightRange in highlight::range
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Not every accessor needs the attribute
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types

pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod highlight;
pub mod press;
pub mod style;
pub mod text;
pub mod unicode;
pub mod view;

// Re-export core types at crate root
pub use color::Rgba;
pub use config::{Platform, SelectableTextOptions};
pub use error::{Error, Result};
pub use event::{HighlightPress, NativePressEvent, SelectionEvent};
pub use highlight::{CachePolicy, HighlightRange, MergeCache, RangePolicy, merge_highlights};
pub use press::PressStrategy;
pub use style::{RunStyle, TextAttributes};
pub use text::{Segment, SegmentKind, segment};
pub use unicode::OffsetUnit;
pub use view::{PressTarget, SelectableText, TextRun, TextTree};
