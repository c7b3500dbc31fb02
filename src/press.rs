//! Resolution of host press events to highlights.
//!
//! Some hosts report a press as a raw character range and leave it to the
//! caller to work out which highlight was hit; others resolve the press
//! natively. [`PressStrategy`] captures the difference and is chosen once per
//! platform, not per event.

use crate::config::Platform;
use crate::event::{HighlightPress, NativePressEvent};
use crate::highlight::HighlightRange;

/// Characters of slack allowed on each side of a highlight when matching.
///
/// Hosts round press positions to the nearest glyph boundary, which can land
/// one character outside the highlight that was visibly hit.
pub const DEFAULT_PRESS_TOLERANCE: usize = 1;

/// How host press events are turned into [`HighlightPress`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PressStrategy {
    /// Match the pressed range against merged highlights.
    Resolve { tolerance: usize },
    /// Pass the host's event through unchanged.
    Forward,
}

impl PressStrategy {
    /// Strategy used by a platform's host view.
    #[must_use]
    pub const fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Ios => Self::Resolve {
                tolerance: DEFAULT_PRESS_TOLERANCE,
            },
            Platform::Android | Platform::Other => Self::Forward,
        }
    }

    /// Turn a host press into a caller-facing press.
    ///
    /// `merged` must already be merged. Returns `None` when a resolving
    /// strategy finds no highlight under the press.
    pub fn apply<Id: Clone>(
        self,
        merged: &[HighlightRange<Id>],
        event: NativePressEvent,
    ) -> Option<HighlightPress<Id>> {
        match self {
            Self::Forward => Some(HighlightPress::Forwarded(event)),
            Self::Resolve { tolerance } => {
                let hit = find_pressed(
                    merged,
                    event.clicked_range_start,
                    event.clicked_range_end,
                    tolerance,
                )?;
                Some(HighlightPress::Resolved {
                    id: hit.id.clone(),
                    clicked_start: event.clicked_range_start,
                    clicked_end: event.clicked_range_end,
                })
            }
        }
    }
}

impl Default for PressStrategy {
    fn default() -> Self {
        Self::for_platform(Platform::default())
    }
}

/// Find the first merged highlight containing `[clicked_start, clicked_end]`.
///
/// Each highlight's bounds are shifted by its offset correction and widened
/// by `tolerance` on both sides. The scan is linear and the first match wins.
#[must_use]
pub fn find_pressed<Id>(
    merged: &[HighlightRange<Id>],
    clicked_start: usize,
    clicked_end: usize,
    tolerance: usize,
) -> Option<&HighlightRange<Id>> {
    merged.iter().find(|range| {
        let correction = range.correction();
        let lo = range
            .start
            .saturating_add(correction.start)
            .saturating_sub(tolerance);
        let hi = range
            .end
            .saturating_add(correction.end)
            .saturating_add(tolerance);
        clicked_start >= lo && clicked_end <= hi
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merged() -> Vec<HighlightRange<&'static str>> {
        vec![
            HighlightRange::new(5, 10, "first"),
            HighlightRange::new(20, 30, "second"),
        ]
    }

    #[test]
    fn test_exact_hit() {
        let hit = find_pressed(&merged(), 6, 8, 1).map(|r| r.id);
        assert_eq!(hit, Some("first"));
    }

    #[test]
    fn test_tolerance_edges() {
        let merged = merged();
        assert_eq!(find_pressed(&merged, 4, 11, 1).map(|r| r.id), Some("first"));
        assert_eq!(find_pressed(&merged, 3, 6, 1).map(|r| r.id), None);
        assert_eq!(find_pressed(&merged, 9, 12, 1).map(|r| r.id), None);
        assert_eq!(find_pressed(&merged, 3, 6, 2).map(|r| r.id), Some("first"));
    }

    #[test]
    fn test_zero_tolerance() {
        let merged = merged();
        assert_eq!(find_pressed(&merged, 4, 6, 0).map(|r| r.id), None);
        assert_eq!(find_pressed(&merged, 5, 10, 0).map(|r| r.id), Some("first"));
    }

    #[test]
    fn test_miss_between_highlights() {
        assert!(find_pressed(&merged(), 12, 15, 1).is_none());
    }

    #[test]
    fn test_tolerance_at_text_start() {
        let merged = [HighlightRange::new(0, 3, 'a')];
        assert!(find_pressed(&merged, 0, 1, 1).is_some());
    }

    #[test]
    fn test_first_match_wins() {
        // Tolerance makes both candidates match a press between them.
        let merged = [HighlightRange::new(0, 4, 'a'), HighlightRange::new(6, 9, 'b')];
        assert_eq!(find_pressed(&merged, 5, 5, 1).map(|r| r.id), Some('a'));
    }

    #[test]
    fn test_correction_shifts_window() {
        let merged = [HighlightRange::new(5, 10, 'a').with_correction(3, 3)];
        assert!(find_pressed(&merged, 9, 12, 0).is_some());
        assert!(find_pressed(&merged, 5, 6, 0).is_none());
    }

    #[test]
    fn test_huge_correction_saturates() {
        let merged = [HighlightRange::new(0, 3, 1u8).with_correction(0, usize::MAX)];
        assert!(find_pressed(&merged, 0, 1, 1).is_some());
        assert!(find_pressed(&merged, 0, usize::MAX, 1).is_some());

        let merged = [HighlightRange::new(usize::MAX, usize::MAX, 2u8)
            .with_correction(usize::MAX, usize::MAX)];
        assert!(find_pressed(&merged, usize::MAX - 1, usize::MAX, 1).is_some());
        assert!(find_pressed(&merged, 0, 1, 1).is_none());
    }

    #[test]
    fn test_platform_strategy() {
        assert_eq!(
            PressStrategy::for_platform(Platform::Ios),
            PressStrategy::Resolve { tolerance: 1 }
        );
        assert_eq!(
            PressStrategy::for_platform(Platform::Android),
            PressStrategy::Forward
        );
    }

    #[test]
    fn test_apply_resolve() {
        let strategy = PressStrategy::Resolve { tolerance: 1 };
        let press = strategy.apply(&merged(), NativePressEvent::new(21, 22));
        assert_eq!(
            press,
            Some(HighlightPress::Resolved {
                id: "second",
                clicked_start: 21,
                clicked_end: 22
            })
        );
        assert_eq!(strategy.apply(&merged(), NativePressEvent::new(0, 1)), None);
    }

    #[test]
    fn test_apply_forward_ignores_highlights() {
        let event = NativePressEvent::new(100, 101);
        assert_eq!(
            PressStrategy::Forward.apply::<u8>(&[], event),
            Some(HighlightPress::Forwarded(event))
        );
    }
}
