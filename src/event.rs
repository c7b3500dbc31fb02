//! Events exchanged with the host text view.
//!
//! The host reports selection changes and presses as [`SelectionEvent`] and
//! [`NativePressEvent`]. After resolution, presses reach the caller as a
//! [`HighlightPress`].

/// Selection change reported by the host view.
///
/// `event_type` is the host's menu action or selection kind (for example
/// `"Copy"` or a custom menu item) and is passed through untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SelectionEvent {
    pub content: String,
    pub event_type: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

impl SelectionEvent {
    #[must_use]
    pub fn new(
        content: impl Into<String>,
        event_type: impl Into<String>,
        selection_start: usize,
        selection_end: usize,
    ) -> Self {
        Self {
            content: content.into(),
            event_type: event_type.into(),
            selection_start,
            selection_end,
        }
    }

    /// Check if the selection covers no text.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.selection_start >= self.selection_end
    }
}

/// Press on the text reported by the host view, in host offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NativePressEvent {
    pub clicked_range_start: usize,
    pub clicked_range_end: usize,
}

impl NativePressEvent {
    #[must_use]
    pub const fn new(clicked_range_start: usize, clicked_range_end: usize) -> Self {
        Self {
            clicked_range_start,
            clicked_range_end,
        }
    }
}

/// A press on a highlight, as delivered to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HighlightPress<Id> {
    /// The press was matched to a merged highlight.
    Resolved {
        id: Id,
        clicked_start: usize,
        clicked_end: usize,
    },
    /// A highlight run was pressed directly; bounds of its merged range.
    Span { start: usize, end: usize },
    /// The host resolved the press itself; its event is passed on as is.
    Forwarded(NativePressEvent),
}

impl<Id> HighlightPress<Id> {
    /// The resolved highlight id, if the press was resolved.
    #[must_use]
    pub fn id(&self) -> Option<&Id> {
        match self {
            Self::Resolved { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// Callback for selection changes.
pub type SelectionCallback = Box<dyn FnMut(&SelectionEvent)>;

/// Callback for highlight presses.
pub type PressCallback<Id> = Box<dyn FnMut(HighlightPress<Id>)>;
