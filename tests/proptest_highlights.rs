//! Property-based tests for highlight merging and segmentation.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use selectable_text::highlight::{HighlightRange, is_merged, merge_highlights};
use selectable_text::text::{SegmentKind, segment, segment_merged};
use selectable_text::unicode::{OffsetIndex, OffsetUnit};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Short ASCII text, so every UTF-16 offset is a byte offset.
fn ascii_text() -> impl Strategy<Value = String> {
    "[a-z ]{0,60}"
}

/// Text mixing ASCII, accents, CJK and astral emoji.
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "b", " ", "é", "中", "😀", "e\u{301}", "👨‍👩‍👧",
        ]),
        0..30,
    )
    .prop_map(|parts| parts.concat())
}

/// Ranges with `start <= end <= max`.
fn ranges(max: usize) -> impl Strategy<Value = Vec<HighlightRange<u8>>> {
    prop::collection::vec((0..=max, 0..=max, any::<u8>()), 0..12).prop_map(|raw| {
        raw.into_iter()
            .map(|(a, b, id)| HighlightRange::new(a.min(b), a.max(b), id))
            .collect()
    })
}

/// Ranges straight from the host: bounds may be reversed or past the end.
fn raw_ranges(max: usize) -> impl Strategy<Value = Vec<HighlightRange<u8>>> {
    prop::collection::vec((0..=max, 0..=max, any::<u8>()), 0..12).prop_map(|raw| {
        raw.into_iter()
            .map(|(a, b, id)| HighlightRange::new(a, b, id))
            .collect()
    })
}

fn text_and_ranges() -> impl Strategy<Value = (String, Vec<HighlightRange<u8>>)> {
    ascii_text().prop_flat_map(|text| {
        let len = text.len();
        (Just(text), ranges(len))
    })
}

// ============================================================================
// Merge Properties
// ============================================================================

proptest! {
    /// Merged output is sorted with a gap between every pair of neighbours.
    #[test]
    fn merge_output_is_separated(input in ranges(100)) {
        let merged = merge_highlights(&input);
        prop_assert!(is_merged(&merged), "not merged: {:?}", merged);
    }

    /// Re-merging merged output changes nothing.
    #[test]
    fn merge_is_idempotent(input in ranges(100)) {
        let once = merge_highlights(&input);
        let twice = merge_highlights(&once);
        prop_assert_eq!(once, twice);
    }

    /// Every input offset covered by some range is covered by the merge, and
    /// merged ranges never reach beyond the input's extent.
    #[test]
    fn merge_preserves_coverage(input in ranges(60)) {
        let merged = merge_highlights(&input);
        for range in &input {
            for pos in range.start..range.end {
                prop_assert!(
                    merged.iter().any(|m| m.start <= pos && pos < m.end),
                    "offset {} lost", pos
                );
            }
        }
        for m in &merged {
            prop_assert!(input.iter().any(|r| r.start == m.start));
            prop_assert!(input.iter().any(|r| r.end == m.end));
        }
    }

    /// Merging never invents ids.
    #[test]
    fn merge_ids_come_from_input(input in ranges(60)) {
        for m in merge_highlights(&input) {
            prop_assert!(input.iter().any(|r| r.id == m.id));
        }
    }

    /// Merging is insensitive to input order when all ids are equal.
    #[test]
    fn merge_order_independent_spans(mut input in ranges(60)) {
        for r in &mut input {
            r.id = 0;
        }
        let forward = merge_highlights(&input);
        input.reverse();
        prop_assert_eq!(forward, merge_highlights(&input));
    }
}

// ============================================================================
// Segmentation Properties
// ============================================================================

proptest! {
    /// Segments tile the text exactly.
    #[test]
    fn segments_tile_text((text, input) in text_and_ranges()) {
        let joined: String = segment(&text, &input).iter().map(|s| s.text).collect();
        prop_assert_eq!(joined, text);
    }

    /// No segment is empty.
    #[test]
    fn segments_are_nonempty((text, input) in text_and_ranges()) {
        for s in segment(&text, &input) {
            prop_assert!(!s.text.is_empty());
        }
    }

    /// Highlight segments are disjoint, ordered, and match their bounds.
    #[test]
    fn highlight_segments_do_not_overlap((text, input) in text_and_ranges()) {
        let segments = segment(&text, &input);
        let mut last_end = None;
        for s in &segments {
            if let SegmentKind::Highlight { start, end } = s.kind {
                prop_assert_eq!(s.text, &text[start..end]);
                if let Some(prev) = last_end {
                    prop_assert!(prev < start, "{} !< {}", prev, start);
                }
                last_end = Some(end);
            }
        }
    }

    /// Two plain segments are never adjacent unless a zero-width highlight sat
    /// between them.
    #[test]
    fn plain_segments_alternate((text, input) in text_and_ranges()) {
        let has_zero_width = merge_highlights(&input).iter().any(HighlightRange::is_empty);
        let segments = segment(&text, &input);
        if !has_zero_width {
            for pair in segments.windows(2) {
                prop_assert!(pair[0].is_highlight() || pair[1].is_highlight());
            }
        }
    }

    /// Tiling holds for every offset unit over non-ASCII text.
    #[test]
    fn segments_tile_mixed_text(text in mixed_text(), raw in ranges(80)) {
        for unit in [OffsetUnit::Utf16, OffsetUnit::Char, OffsetUnit::Byte, OffsetUnit::Grapheme] {
            let index = OffsetIndex::new(&text, unit);
            let merged = merge_highlights(&raw);
            let joined: String = segment_merged(&index, &merged).iter().map(|s| s.text).collect();
            prop_assert_eq!(&joined, &text, "unit {:?}", unit);
        }
    }

    /// Reversed and out-of-bounds ranges never duplicate or drop text.
    #[test]
    fn segments_tile_raw_ranges(text in mixed_text(), raw in raw_ranges(120)) {
        let joined: String = segment(&text, &raw).iter().map(|s| s.text).collect();
        prop_assert_eq!(&joined, &text);

        for unit in [OffsetUnit::Utf16, OffsetUnit::Char, OffsetUnit::Byte, OffsetUnit::Grapheme] {
            let index = OffsetIndex::new(&text, unit);
            let segments = segment_merged(&index, &raw);
            prop_assert!(segments.iter().all(|s| !s.text.is_empty()));
            let joined: String = segments.iter().map(|s| s.text).collect();
            prop_assert_eq!(&joined, &text, "unit {:?}", unit);
        }
    }
}
