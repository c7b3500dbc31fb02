//! Highlight ranges over a display string.

use crate::error::{Error, Result};

/// Shift between logical offsets and the offsets reported by the host view.
///
/// Hosts that render extra characters (line breaks substituted for markup,
/// for instance) report press positions shifted by the number of characters
/// inserted ahead of a highlight. `start` applies to the highlight's start
/// bound and `end` to its end bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetCorrection {
    pub start: usize,
    pub end: usize,
}

impl OffsetCorrection {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A half-open interval `[start, end)` over text offsets, tagged with an id.
///
/// Offsets are counted in the [`OffsetUnit`](crate::unicode::OffsetUnit)
/// configured by the caller. Ranges may overlap and may share ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightRange<Id> {
    pub start: usize,
    pub end: usize,
    pub id: Id,
    #[cfg_attr(feature = "serde", serde(default))]
    pub correction: Option<OffsetCorrection>,
}

impl<Id> HighlightRange<Id> {
    /// Create a new range.
    #[must_use]
    pub fn new(start: usize, end: usize, id: Id) -> Self {
        Self {
            start,
            end,
            id,
            correction: None,
        }
    }

    /// Attach a host offset correction.
    #[must_use]
    pub fn with_correction(mut self, start: usize, end: usize) -> Self {
        self.correction = Some(OffsetCorrection::new(start, end));
        self
    }

    /// Width of the range in offset units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the range covers no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if this range overlaps or touches another.
    ///
    /// Touching ranges (`a.end == b.start`) count, since the merger coalesces
    /// them.
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Correction to apply, defaulting to none.
    #[must_use]
    pub fn correction(&self) -> OffsetCorrection {
        self.correction.unwrap_or_default()
    }

    /// Bring the range inside `[0, len]` according to `policy`.
    pub fn normalize(self, len: usize, policy: RangePolicy) -> Result<Self> {
        match policy {
            RangePolicy::Reject => {
                if self.start > self.end || self.end > len {
                    return Err(Error::InvalidRange {
                        start: self.start,
                        end: self.end,
                        len,
                    });
                }
                Ok(self)
            }
            RangePolicy::Clamp => {
                let start = self.start.min(len);
                let end = self.end.min(len);
                if (start, end) != (self.start, self.end) || start > end {
                    tracing::trace!(
                        start = self.start,
                        end = self.end,
                        len,
                        "clamping highlight range"
                    );
                }
                Ok(Self {
                    start: start.min(end),
                    end: start.max(end),
                    ..self
                })
            }
        }
    }
}

/// How malformed ranges (reversed, or past the end of the text) are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RangePolicy {
    /// Clamp both offsets to `[0, len]` and swap reversed bounds.
    #[default]
    Clamp,
    /// Fail with [`Error::InvalidRange`].
    Reject,
}

/// Normalize every range in `ranges` against a text of length `len`.
pub fn normalize_ranges<Id: Clone>(
    ranges: &[HighlightRange<Id>],
    len: usize,
    policy: RangePolicy,
) -> Result<Vec<HighlightRange<Id>>> {
    ranges
        .iter()
        .cloned()
        .map(|range| range.normalize(len, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches() {
        let a = HighlightRange::new(0, 5, 'a');
        let b = HighlightRange::new(5, 10, 'b');
        let c = HighlightRange::new(6, 10, 'c');

        assert!(a.touches(&b));
        assert!(b.touches(&a));
        assert!(!a.touches(&c));
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(HighlightRange::new(2, 7, ()).len(), 5);
        assert!(HighlightRange::new(3, 3, ()).is_empty());
        assert_eq!(HighlightRange::new(7, 2, ()).len(), 0);
    }

    #[test]
    fn test_clamp_past_end() {
        let range = HighlightRange::new(3, 40, 1)
            .normalize(10, RangePolicy::Clamp)
            .unwrap();
        assert_eq!((range.start, range.end), (3, 10));

        let range = HighlightRange::new(30, 40, 1)
            .normalize(10, RangePolicy::Clamp)
            .unwrap();
        assert_eq!((range.start, range.end), (10, 10));
    }

    #[test]
    fn test_clamp_swaps_reversed() {
        let range = HighlightRange::new(8, 2, 1)
            .normalize(10, RangePolicy::Clamp)
            .unwrap();
        assert_eq!((range.start, range.end), (2, 8));
    }

    #[test]
    fn test_reject() {
        let err = HighlightRange::new(8, 2, 1)
            .normalize(10, RangePolicy::Reject)
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidRange {
                start: 8,
                end: 2,
                len: 10
            }
        );
        assert!(
            HighlightRange::new(0, 11, 1)
                .normalize(10, RangePolicy::Reject)
                .is_err()
        );
        assert!(
            HighlightRange::new(0, 10, 1)
                .normalize(10, RangePolicy::Reject)
                .is_ok()
        );
    }

    #[test]
    fn test_normalize_keeps_correction() {
        let range = HighlightRange::new(0, 20, "x")
            .with_correction(1, 2)
            .normalize(5, RangePolicy::Clamp)
            .unwrap();
        assert_eq!(range.correction, Some(OffsetCorrection::new(1, 2)));
    }

    #[test]
    fn test_normalize_ranges_stops_at_first_error() {
        let ranges = [HighlightRange::new(0, 2, 1), HighlightRange::new(0, 9, 2)];
        assert!(normalize_ranges(&ranges, 5, RangePolicy::Reject).is_err());
        let clamped = normalize_ranges(&ranges, 5, RangePolicy::Clamp).unwrap();
        assert_eq!(clamped[1].end, 5);
    }
}
