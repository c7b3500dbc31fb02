//! Partitioning of a string into plain and highlighted segments.

use crate::highlight::{HighlightRange, RangePolicy, merge_highlights};
use crate::unicode::{OffsetIndex, OffsetUnit};

/// Whether a segment is plain text or part of a merged highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SegmentKind {
    Plain,
    /// Carries the bounds of the merged range, in offset units.
    Highlight { start: usize, end: usize },
}

/// A contiguous, non-empty run of the source string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment<'a> {
    pub text: &'a str,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: SegmentKind,
}

impl<'a> Segment<'a> {
    /// Create a plain segment.
    #[must_use]
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            kind: SegmentKind::Plain,
        }
    }

    /// Create a highlight segment for the merged range `[start, end)`.
    #[must_use]
    pub fn highlight(text: &'a str, start: usize, end: usize) -> Self {
        Self {
            text,
            kind: SegmentKind::Highlight { start, end },
        }
    }

    #[must_use]
    pub fn is_highlight(&self) -> bool {
        matches!(self.kind, SegmentKind::Highlight { .. })
    }

    /// Merged range bounds, for highlight segments.
    #[must_use]
    pub fn bounds(&self) -> Option<(usize, usize)> {
        match self.kind {
            SegmentKind::Highlight { start, end } => Some((start, end)),
            SegmentKind::Plain => None,
        }
    }
}

/// Segment `value` against raw (unmerged) ranges counted in UTF-16 units.
///
/// Ranges are clamped to the text and reversed bounds are swapped before
/// merging, so the segments always tile `value`.
///
/// # Examples
///
/// ```
/// use selectable_text::highlight::HighlightRange;
/// use selectable_text::text::{Segment, segment};
///
/// let segments = segment("hello world", &[HighlightRange::new(0, 5, 1)]);
/// assert_eq!(
///     segments,
///     vec![Segment::highlight("hello", 0, 5), Segment::plain(" world")]
/// );
/// ```
#[must_use]
pub fn segment<'a, Id: Clone>(value: &'a str, ranges: &[HighlightRange<Id>]) -> Vec<Segment<'a>> {
    let index = OffsetIndex::new(value, OffsetUnit::default());
    let len = index.len();
    let clamped: Vec<_> = ranges
        .iter()
        .cloned()
        .filter_map(|range| range.normalize(len, RangePolicy::Clamp).ok())
        .collect();
    segment_merged(&index, &merge_highlights(&clamped))
}

/// Segment the indexed text against ranges already produced by the merger.
///
/// `merged` should be sorted and non-overlapping. Slicing follows a cursor
/// that only moves forward, so even malformed input yields segments that
/// are non-empty and tile the text exactly.
#[must_use]
pub fn segment_merged<'a, Id>(
    index: &OffsetIndex<'a>,
    merged: &[HighlightRange<Id>],
) -> Vec<Segment<'a>> {
    let mut segments = Vec::with_capacity(merged.len() * 2 + 1);
    let mut cursor = 0;
    for range in merged {
        let start = range.start.max(cursor);
        let end = range.end.max(start);
        segments.push(Segment::plain(index.slice(cursor, start)));
        segments.push(Segment::highlight(
            index.slice(start, end),
            range.start,
            range.end,
        ));
        cursor = end;
    }
    segments.push(Segment::plain(index.slice(cursor, index.len())));

    non_empty(segments)
}

fn non_empty<'a>(segments: impl IntoIterator<Item = Segment<'a>>) -> Vec<Segment<'a>> {
    segments.into_iter().filter(|s| !s.text.is_empty()).collect()
}
