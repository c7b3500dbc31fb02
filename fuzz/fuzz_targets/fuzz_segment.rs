//! Fuzz target for segmentation.
//!
//! Arbitrary text, ranges and offset units must never panic, and segments
//! must tile the text even for reversed or out-of-bounds ranges.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use selectable_text::highlight::{HighlightRange, merge_highlights};
use selectable_text::text::{segment, segment_merged};
use selectable_text::unicode::{OffsetIndex, OffsetUnit};
use selectable_text::{NativePressEvent, Platform, SelectableText, SelectableTextOptions};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    ranges: Vec<(u16, u16, u8)>,
    unit: u8,
    press: (u16, u16),
    bold: bool,
}

fuzz_target!(|input: Input| {
    let unit = match input.unit % 4 {
        0 => OffsetUnit::Utf16,
        1 => OffsetUnit::Char,
        2 => OffsetUnit::Byte,
        _ => OffsetUnit::Grapheme,
    };
    let ranges: Vec<HighlightRange<u8>> = input
        .ranges
        .iter()
        .map(|&(a, b, id)| HighlightRange::new(usize::from(a), usize::from(b), id))
        .collect();

    // Raw ranges, reversed ones included, straight into the segmenter.
    let index = OffsetIndex::new(&input.text, unit);
    for segments in [
        segment_merged(&index, &merge_highlights(&ranges)),
        segment_merged(&index, &ranges),
        segment(&input.text, &ranges),
    ] {
        assert!(segments.iter().all(|s| !s.text.is_empty()));
        let joined: String = segments.iter().map(|s| s.text).collect();
        assert_eq!(joined, input.text);
    }

    let mut options = SelectableTextOptions::default()
        .with_platform(Platform::Ios)
        .with_offset_unit(unit);
    if input.bold {
        options = options.with_bold_font("Bold");
    }
    let mut view = SelectableText::with_options(input.text.clone(), options)
        .with_highlights(ranges)
        .on_highlight_press(|_| {});
    if let Ok(tree) = view.render() {
        if !input.bold {
            assert_eq!(tree.text(), input.text);
        }
    }
    let _ = view.handle_press(NativePressEvent::new(
        usize::from(input.press.0),
        usize::from(input.press.1),
    ));
});
