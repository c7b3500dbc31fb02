//! Offset units and offset-to-byte translation.
//!
//! Highlight ranges and native events count positions in whatever unit the
//! host text system uses. React Native text views report UTF-16 code units,
//! other hosts count chars, bytes or grapheme clusters. [`OffsetIndex`]
//! translates any of these into byte positions that can slice a `&str`.
//!
//! Translation is monotonic: an offset that lands inside a code point (a lone
//! surrogate half in UTF-16, a continuation byte in UTF-8) rounds down to the
//! start of that code point, and offsets past the end map to the end of the
//! text. Slicing consecutive translated offsets therefore always tiles the
//! string.

use unicode_segmentation::UnicodeSegmentation;

/// Unit in which text offsets are counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OffsetUnit {
    /// UTF-16 code units (JavaScript string indices).
    #[default]
    Utf16,
    /// Unicode scalar values.
    Char,
    /// UTF-8 bytes.
    Byte,
    /// Extended grapheme clusters.
    Grapheme,
}

impl OffsetUnit {
    /// Length of `text` measured in this unit.
    #[must_use]
    pub fn len_of(self, text: &str) -> usize {
        match self {
            Self::Utf16 => text.encode_utf16().count(),
            Self::Char => text.chars().count(),
            Self::Byte => text.len(),
            Self::Grapheme => text.graphemes(true).count(),
        }
    }
}

/// Precomputed offset table for one string.
///
/// Building the table is linear in the text length; lookups are O(1).
#[derive(Clone, Debug)]
pub struct OffsetIndex<'a> {
    text: &'a str,
    unit: OffsetUnit,
    /// Byte position of every offset `0..=len`. Empty for [`OffsetUnit::Byte`].
    boundaries: Vec<usize>,
}

impl<'a> OffsetIndex<'a> {
    /// Build the offset table for `text`.
    #[must_use]
    pub fn new(text: &'a str, unit: OffsetUnit) -> Self {
        let mut boundaries = Vec::new();
        match unit {
            OffsetUnit::Byte => {}
            OffsetUnit::Utf16 => {
                for (byte, ch) in text.char_indices() {
                    // Both halves of a surrogate pair map to the char start.
                    for _ in 0..ch.len_utf16() {
                        boundaries.push(byte);
                    }
                }
                boundaries.push(text.len());
            }
            OffsetUnit::Char => {
                boundaries.extend(text.char_indices().map(|(byte, _)| byte));
                boundaries.push(text.len());
            }
            OffsetUnit::Grapheme => {
                boundaries.extend(text.grapheme_indices(true).map(|(byte, _)| byte));
                boundaries.push(text.len());
            }
        }
        Self {
            text,
            unit,
            boundaries,
        }
    }

    /// The indexed text.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The unit offsets are counted in.
    #[must_use]
    pub fn unit(&self) -> OffsetUnit {
        self.unit
    }

    /// Length of the text in offset units.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.unit {
            OffsetUnit::Byte => self.text.len(),
            _ => self.boundaries.len().saturating_sub(1),
        }
    }

    /// Check if the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Translate an offset into a byte position on a char boundary.
    #[must_use]
    pub fn byte_offset(&self, offset: usize) -> usize {
        match self.unit {
            OffsetUnit::Byte => {
                let mut pos = offset.min(self.text.len());
                while !self.text.is_char_boundary(pos) {
                    pos -= 1;
                }
                pos
            }
            _ => self
                .boundaries
                .get(offset)
                .copied()
                .unwrap_or(self.text.len()),
        }
    }

    /// Slice the text between two offsets.
    ///
    /// Reversed offsets yield an empty slice.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let start = self.byte_offset(start);
        let end = self.byte_offset(end).max(start);
        &self.text[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_per_unit() {
        let s = "a😀é";
        assert_eq!(OffsetUnit::Utf16.len_of(s), 4);
        assert_eq!(OffsetUnit::Char.len_of(s), 3);
        assert_eq!(OffsetUnit::Byte.len_of(s), 1 + 4 + 2);
        assert_eq!(OffsetUnit::Grapheme.len_of(s), 3);
    }

    #[test]
    fn test_index_len_matches_unit_len() {
        let s = "héllo 👨‍👩‍👧 wörld";
        for unit in [
            OffsetUnit::Utf16,
            OffsetUnit::Char,
            OffsetUnit::Byte,
            OffsetUnit::Grapheme,
        ] {
            assert_eq!(OffsetIndex::new(s, unit).len(), unit.len_of(s), "{unit:?}");
        }
    }

    #[test]
    fn test_utf16_slice_astral() {
        let index = OffsetIndex::new("a😀b", OffsetUnit::Utf16);
        assert_eq!(index.slice(0, 1), "a");
        assert_eq!(index.slice(1, 3), "😀");
        assert_eq!(index.slice(3, 4), "b");
    }

    #[test]
    fn test_utf16_mid_surrogate_rounds_down() {
        let index = OffsetIndex::new("a😀b", OffsetUnit::Utf16);
        assert_eq!(index.byte_offset(2), 1);
        assert_eq!(index.slice(0, 2), "a");
        assert_eq!(index.slice(2, 4), "😀b");
    }

    #[test]
    fn test_byte_offset_inside_char_rounds_down() {
        let index = OffsetIndex::new("é", OffsetUnit::Byte);
        assert_eq!(index.byte_offset(1), 0);
        assert_eq!(index.byte_offset(2), 2);
    }

    #[test]
    fn test_past_end_clamps() {
        let index = OffsetIndex::new("abc", OffsetUnit::Char);
        assert_eq!(index.byte_offset(99), 3);
        assert_eq!(index.slice(1, 99), "bc");
    }

    #[test]
    fn test_reversed_slice_is_empty() {
        let index = OffsetIndex::new("abc", OffsetUnit::Char);
        assert_eq!(index.slice(2, 1), "");
    }

    #[test]
    fn test_grapheme_offsets() {
        let index = OffsetIndex::new("e\u{301}x", OffsetUnit::Grapheme);
        assert_eq!(index.len(), 2);
        assert_eq!(index.slice(0, 1), "e\u{301}");
        assert_eq!(index.slice(1, 2), "x");
    }

    #[test]
    fn test_empty_text() {
        let index = OffsetIndex::new("", OffsetUnit::Utf16);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.slice(0, 5), "");
    }
}
