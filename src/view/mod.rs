//! Selectable, highlightable text view.
//!
//! [`SelectableText`] owns the display string, the highlight ranges and the
//! caller's callbacks. [`render`](SelectableText::render) produces a
//! [`TextTree`] for the host view; host events come back through
//! [`handle_selection`](SelectableText::handle_selection) and
//! [`handle_press`](SelectableText::handle_press).
//!
//! # Examples
//!
//! ```
//! use selectable_text::{HighlightRange, Platform, SelectableText, SelectableTextOptions};
//!
//! let options = SelectableTextOptions::default().with_platform(Platform::Ios);
//! let mut view = SelectableText::with_options("hello world", options)
//!     .with_highlights(vec![HighlightRange::new(0, 5, "greeting")]);
//!
//! let tree = view.render().unwrap();
//! assert_eq!(tree.runs.len(), 2);
//! assert!(tree.runs[0].highlight);
//! assert_eq!(tree.text(), "hello world");
//! ```

mod tree;

pub use tree::{PressTarget, TextRun, TextTree};

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::config::SelectableTextOptions;
use crate::error::Result;
use crate::event::{
    HighlightPress, NativePressEvent, PressCallback, SelectionCallback, SelectionEvent,
};
use crate::highlight::{HighlightRange, MergeCache, normalize_ranges};
use crate::press::PressStrategy;
use crate::style::{RunStyle, TextAttributes};
use crate::text::{Segment, SegmentKind, segment_merged, split_bold};
use crate::unicode::OffsetIndex;

/// Selectable text with merged highlights.
///
/// Highlight offsets are counted in the configured
/// [`OffsetUnit`](crate::unicode::OffsetUnit) over the display string as
/// given, bold markup tags included.
pub struct SelectableText<Id: Hash + Eq> {
    value: String,
    highlights: Vec<HighlightRange<Id>>,
    options: SelectableTextOptions,
    press_strategy: PressStrategy,
    style: RunStyle,
    appended: Vec<TextRun>,
    cache: MergeCache<Id>,
    on_selection: Option<SelectionCallback>,
    on_highlight_press: Option<PressCallback<Id>>,
}

impl<Id: Clone + Hash + Eq> SelectableText<Id> {
    /// Create a view with default options.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_options(value, SelectableTextOptions::default())
    }

    /// Create a view with custom options.
    ///
    /// The press strategy and merge cache are fixed here.
    #[must_use]
    pub fn with_options(value: impl Into<String>, options: SelectableTextOptions) -> Self {
        let press_strategy = options.effective_press_strategy();
        let cache = MergeCache::new(options.cache_policy);
        Self {
            value: value.into(),
            highlights: Vec::new(),
            options,
            press_strategy,
            style: RunStyle::NONE,
            appended: Vec::new(),
            cache,
            on_selection: None,
            on_highlight_press: None,
        }
    }

    #[must_use]
    pub fn with_highlights(mut self, highlights: Vec<HighlightRange<Id>>) -> Self {
        self.highlights = highlights;
        self
    }

    /// Base style of the outer text node.
    #[must_use]
    pub fn with_style(mut self, style: RunStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a run after the text, outside of any highlight.
    #[must_use]
    pub fn with_appended(mut self, run: TextRun) -> Self {
        self.appended.push(run);
        self
    }

    /// Replace the merge cache, e.g. to share one between views.
    #[must_use]
    pub fn with_cache(mut self, cache: MergeCache<Id>) -> Self {
        self.cache = cache;
        self
    }

    #[must_use]
    pub fn on_selection<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&SelectionEvent) + 'static,
    {
        self.on_selection = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_highlight_press<F>(mut self, callback: F) -> Self
    where
        F: FnMut(HighlightPress<Id>) + 'static,
    {
        self.on_highlight_press = Some(Box::new(callback));
        self
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_highlights(&mut self, highlights: Vec<HighlightRange<Id>>) {
        self.highlights = highlights;
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn highlights(&self) -> &[HighlightRange<Id>] {
        &self.highlights
    }

    #[must_use]
    pub fn options(&self) -> &SelectableTextOptions {
        &self.options
    }

    #[must_use]
    pub fn press_strategy(&self) -> PressStrategy {
        self.press_strategy
    }

    #[must_use]
    pub fn cache(&self) -> &MergeCache<Id> {
        &self.cache
    }

    /// Current highlights, normalized and merged.
    pub fn merged_highlights(&mut self) -> Result<Arc<[HighlightRange<Id>]>> {
        if self.highlights.is_empty() {
            return Ok(Arc::from([]));
        }
        let len = self.options.offset_unit.len_of(&self.value);
        let ranges = normalize_ranges(&self.highlights, len, self.options.range_policy)?;
        Ok(self.cache.merge(&ranges))
    }

    /// Current text split into plain and highlight segments.
    pub fn segments(&mut self) -> Result<Vec<Segment<'_>>> {
        let merged = self.merged_highlights()?;
        let index = OffsetIndex::new(&self.value, self.options.offset_unit);
        Ok(segment_merged(&index, &merged))
    }

    /// Build the render tree for the host view.
    pub fn render(&mut self) -> Result<TextTree> {
        let merged = self.merged_highlights()?;
        let index = OffsetIndex::new(&self.value, self.options.offset_unit);
        let segments = segment_merged(&index, &merged);

        let highlight_style = self
            .options
            .highlight_color
            .map_or(RunStyle::NONE, RunStyle::background);
        let plain_style = RunStyle::NONE;
        let bold_font = self.options.bold_font.as_deref();
        let selectable = self.options.selectable;

        let mut runs = Vec::with_capacity(segments.len() + self.appended.len());
        for segment in &segments {
            let (style, press) = match segment.kind {
                SegmentKind::Highlight { start, end } => (
                    &highlight_style,
                    selectable.then_some(PressTarget { start, end }),
                ),
                SegmentKind::Plain => (&plain_style, None),
            };
            push_runs(
                &mut runs,
                segment.text,
                style,
                segment.is_highlight(),
                press,
                bold_font,
            );
        }
        runs.extend(self.appended.iter().cloned());

        tracing::trace!(
            segments = segments.len(),
            runs = runs.len(),
            highlights = merged.len(),
            "rendered selectable text"
        );
        Ok(TextTree {
            selectable,
            style: self.style.clone(),
            runs,
        })
    }

    /// Forward a host selection change to the selection callback.
    ///
    /// Returns whether a callback received it.
    pub fn handle_selection(&mut self, event: &SelectionEvent) -> bool {
        if !self.options.selectable {
            return false;
        }
        match self.on_selection.as_mut() {
            Some(callback) => {
                callback(event);
                true
            }
            None => false,
        }
    }

    /// Resolve a host press and deliver it to the press callback.
    ///
    /// Returns whether a callback received a press. Presses are ignored when
    /// the view is not selectable, no callback is set, or a resolving
    /// strategy finds no highlight under the press.
    pub fn handle_press(&mut self, event: NativePressEvent) -> Result<bool> {
        if !self.options.selectable || self.on_highlight_press.is_none() {
            return Ok(false);
        }
        let press = match self.press_strategy {
            PressStrategy::Forward => PressStrategy::Forward.apply(&[], event),
            strategy @ PressStrategy::Resolve { .. } => {
                let merged = self.merged_highlights()?;
                strategy.apply(&merged, event)
            }
        };
        let Some(press) = press else {
            tracing::debug!(
                start = event.clicked_range_start,
                end = event.clicked_range_end,
                "press outside highlights ignored"
            );
            return Ok(false);
        };
        Ok(self.deliver(press))
    }

    /// Press a highlight run directly, as the host does for a tapped run.
    pub fn press_target(&mut self, target: PressTarget) -> bool {
        if !self.options.selectable {
            return false;
        }
        self.deliver(HighlightPress::Span {
            start: target.start,
            end: target.end,
        })
    }

    fn deliver(&mut self, press: HighlightPress<Id>) -> bool {
        match self.on_highlight_press.as_mut() {
            Some(callback) => {
                callback(press);
                true
            }
            None => false,
        }
    }
}

/// Push the runs for one segment, splitting bold markup when a bold font is set.
fn push_runs(
    runs: &mut Vec<TextRun>,
    text: &str,
    style: &RunStyle,
    highlight: bool,
    press: Option<PressTarget>,
    bold_font: Option<&str>,
) {
    let Some(bold_font) = bold_font else {
        runs.push(TextRun {
            text: text.to_string(),
            style: style.clone(),
            highlight,
            press,
        });
        return;
    };

    for piece in split_bold(text) {
        let style = if piece.bold {
            style
                .clone()
                .with_font(bold_font)
                .with_attributes(TextAttributes::BOLD)
        } else {
            style.clone()
        };
        runs.push(TextRun {
            text: piece.text.to_string(),
            style,
            highlight,
            press,
        });
    }
}

impl<Id: Hash + Eq + fmt::Debug> fmt::Debug for SelectableText<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectableText")
            .field("value", &self.value)
            .field("highlights", &self.highlights)
            .field("options", &self.options)
            .field("press_strategy", &self.press_strategy)
            .field("cache", &self.cache)
            .field("on_selection", &self.on_selection.is_some())
            .field("on_highlight_press", &self.on_highlight_press.is_some())
            .finish_non_exhaustive()
    }
}
