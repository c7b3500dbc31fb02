//! Inline `<b>…</b>` bold markup.
//!
//! Display strings may carry bold markup that the host renders with a
//! dedicated bold font family. [`split_bold`] strips the tags and returns the
//! pieces in order with their weight.

const OPEN: &str = "<b>";
const CLOSE: &str = "</b>";

/// A piece of marked-up text with the tags removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkupRun<'a> {
    pub text: &'a str,
    pub bold: bool,
}

impl<'a> MarkupRun<'a> {
    #[must_use]
    pub fn regular(text: &'a str) -> Self {
        Self { text, bold: false }
    }

    #[must_use]
    pub fn bold(text: &'a str) -> Self {
        Self { text, bold: true }
    }
}

/// Split `text` on `<b>` and `</b>` tags.
///
/// Tags do not nest: a second `<b>` inside a bold span is dropped, as is a
/// `</b>` outside one. An unclosed `<b>` runs to the end of the text. Empty
/// pieces are omitted.
///
/// # Examples
///
/// ```
/// use selectable_text::text::{MarkupRun, split_bold};
///
/// assert_eq!(
///     split_bold("a <b>bold</b> move"),
///     vec![
///         MarkupRun::regular("a "),
///         MarkupRun::bold("bold"),
///         MarkupRun::regular(" move"),
///     ]
/// );
/// ```
#[must_use]
pub fn split_bold(text: &str) -> Vec<MarkupRun<'_>> {
    let mut runs = Vec::new();
    let mut rest = text;
    let mut bold = false;

    while let Some((tag_at, tag_len, opens)) = next_tag(rest) {
        push_run(&mut runs, &rest[..tag_at], bold);
        bold = opens;
        rest = &rest[tag_at + tag_len..];
    }
    push_run(&mut runs, rest, bold);
    runs
}

/// Check if `text` contains any bold tag.
#[must_use]
pub fn has_bold_markup(text: &str) -> bool {
    text.contains(OPEN) || text.contains(CLOSE)
}

/// Earliest tag in `text`: byte position, tag length, whether it opens.
fn next_tag(text: &str) -> Option<(usize, usize, bool)> {
    let open = text.find(OPEN).map(|at| (at, OPEN.len(), true));
    let close = text.find(CLOSE).map(|at| (at, CLOSE.len(), false));
    match (open, close) {
        (Some(o), Some(c)) => Some(if o.0 < c.0 { o } else { c }),
        (found, None) | (None, found) => found,
    }
}

fn push_run<'a>(runs: &mut Vec<MarkupRun<'a>>, text: &'a str, bold: bool) {
    // Pieces of equal weight around a dropped tag stay separate runs.
    if !text.is_empty() {
        runs.push(MarkupRun { text, bold });
    }
}
