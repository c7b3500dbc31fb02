//! Coalescing of overlapping and touching highlight ranges.

use crate::highlight::range::{HighlightRange, OffsetCorrection};

/// Merge ranges into a sorted list of non-overlapping, non-touching ranges.
///
/// Ranges are sorted by `start`, then `end` (stably, so equal ranges keep
/// their input order), and folded left to right. A range whose `start` is
/// at or before the previous merged `end` is absorbed into it.
///
/// When two ranges merge, the later range's `id` replaces the earlier one.
/// This holds even when the later range is fully nested inside the earlier
/// one, so a highlight's id can change as other highlights are added.
///
/// The merged start keeps the earlier range's start correction. The end
/// correction follows whichever range supplied the merged `end`.
///
/// # Examples
///
/// ```
/// use selectable_text::highlight::{HighlightRange, merge_highlights};
///
/// let merged = merge_highlights(&[
///     HighlightRange::new(0, 5, "a"),
///     HighlightRange::new(3, 8, "b"),
///     HighlightRange::new(10, 12, "c"),
/// ]);
/// assert_eq!(
///     merged,
///     vec![HighlightRange::new(0, 8, "b"), HighlightRange::new(10, 12, "c")]
/// );
/// ```
#[must_use]
pub fn merge_highlights<Id: Clone>(ranges: &[HighlightRange<Id>]) -> Vec<HighlightRange<Id>> {
    let mut sorted: Vec<&HighlightRange<Id>> = ranges.iter().collect();
    sorted.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

    let mut merged: Vec<HighlightRange<Id>> = Vec::with_capacity(sorted.len());
    for next in sorted {
        match merged.last_mut() {
            Some(last) if last.end >= next.start => {
                let end_correction = if next.end >= last.end {
                    next.correction
                } else {
                    last.correction
                };
                last.correction = combine_corrections(last.correction, end_correction);
                last.end = last.end.max(next.end);
                last.id = next.id.clone();
            }
            _ => merged.push(next.clone()),
        }
    }
    merged
}

fn combine_corrections(
    start_from: Option<OffsetCorrection>,
    end_from: Option<OffsetCorrection>,
) -> Option<OffsetCorrection> {
    match (start_from, end_from) {
        (None, None) => None,
        (start, end) => Some(OffsetCorrection::new(
            start.unwrap_or_default().start,
            end.unwrap_or_default().end,
        )),
    }
}

/// Check that `ranges` is sorted with strictly separated neighbours.
#[must_use]
pub fn is_merged<Id>(ranges: &[HighlightRange<Id>]) -> bool {
    ranges.iter().all(|r| r.start <= r.end) && ranges.windows(2).all(|w| w[0].end < w[1].start)
}
