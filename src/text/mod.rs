//! Segmentation of display text into plain, highlighted and bold pieces.
//!
//! # Examples
//!
//! ```
//! use selectable_text::highlight::HighlightRange;
//! use selectable_text::text::{Segment, segment};
//!
//! let segments = segment(
//!     "the quick fox",
//!     &[HighlightRange::new(4, 7, 1), HighlightRange::new(6, 9, 2)],
//! );
//! assert_eq!(
//!     segments,
//!     vec![
//!         Segment::plain("the "),
//!         Segment::highlight("quick", 4, 9),
//!         Segment::plain(" fox"),
//!     ]
//! );
//! ```

mod markup;
mod segment;

pub use markup::{MarkupRun, has_bold_markup, split_bold};
pub use segment::{Segment, SegmentKind, segment, segment_merged};
