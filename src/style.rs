//! Styling of rendered text runs.
//!
//! - [`TextAttributes`]: Bitflags for bold, italic, underline
//! - [`RunStyle`]: Background color, font family override and attributes
//!
//! # Examples
//!
//! ```
//! use selectable_text::{Rgba, RunStyle, TextAttributes};
//!
//! let highlight = RunStyle::background(Rgba::YELLOW);
//! let bold = RunStyle::font("Inter-Bold").with_attributes(TextAttributes::BOLD);
//!
//! // Overlay takes precedence where it sets a value
//! let combined = highlight.merge(&bold);
//! assert_eq!(combined.background, Some(Rgba::YELLOW));
//! assert_eq!(combined.font_family.as_deref(), Some("Inter-Bold"));
//! ```

use crate::color::Rgba;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        const BOLD          = 0x01;
        const ITALIC        = 0x02;
        const UNDERLINE     = 0x04;
        const STRIKETHROUGH = 0x08;
    }
}

/// Style of one run in the render tree.
///
/// `None` fields inherit from the enclosing text node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RunStyle {
    pub background: Option<Rgba>,
    pub font_family: Option<String>,
    pub attributes: TextAttributes,
}

impl RunStyle {
    /// Style with no overrides.
    pub const NONE: Self = Self {
        background: None,
        font_family: None,
        attributes: TextAttributes::empty(),
    };

    /// Style with only a background color.
    #[must_use]
    pub fn background(color: Rgba) -> Self {
        Self {
            background: Some(color),
            ..Self::NONE
        }
    }

    /// Style with only a font family override.
    #[must_use]
    pub fn font(family: impl Into<String>) -> Self {
        Self {
            font_family: Some(family.into()),
            ..Self::NONE
        }
    }

    #[must_use]
    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn with_font(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: TextAttributes) -> Self {
        self.attributes |= attributes;
        self
    }

    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.attributes.contains(TextAttributes::BOLD)
    }

    /// Check if the style overrides nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Overlay `other` on top of `self`; attributes are combined.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            background: other.background.or(self.background),
            font_family: other
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            attributes: self.attributes | other.attributes,
        }
    }
}
