//! Render tree handed to the host view.

use crate::style::RunStyle;

/// Press handler attached to a highlight run: the merged range it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PressTarget {
    pub start: usize,
    pub end: usize,
}

/// One styled run of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub style: RunStyle,
    pub highlight: bool,
    pub press: Option<PressTarget>,
}

impl TextRun {
    /// An unstyled, non-interactive run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::NONE,
            highlight: false,
            press: None,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: RunStyle) -> Self {
        self.style = style;
        self
    }
}

/// Text node with its child runs, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextTree {
    pub selectable: bool,
    pub style: RunStyle,
    pub runs: Vec<TextRun>,
}

impl TextTree {
    /// Displayed text: every run concatenated.
    #[must_use]
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Runs that belong to a highlight.
    pub fn highlight_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.runs.iter().filter(|run| run.highlight)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
