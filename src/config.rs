//! Options for [`SelectableText`](crate::SelectableText).

use crate::color::Rgba;
use crate::highlight::{CachePolicy, RangePolicy};
use crate::press::PressStrategy;
use crate::unicode::OffsetUnit;

/// Host platform, which decides how presses are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Platform {
    Ios,
    Android,
    Other,
}

impl Platform {
    /// Platform of the compilation target.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "android") {
            Self::Android
        } else {
            Self::Other
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// Configuration for a selectable text view.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectableTextOptions {
    /// Host platform.
    pub platform: Platform,
    /// Press handling; `None` picks the platform's strategy.
    pub press_strategy: Option<PressStrategy>,
    /// Whether the host view allows selection and highlight presses.
    pub selectable: bool,
    /// Background color of highlight runs.
    pub highlight_color: Option<Rgba>,
    /// Font family for `<b>` markup; markup is left as text when unset.
    pub bold_font: Option<String>,
    /// Unit of highlight and event offsets.
    pub offset_unit: OffsetUnit,
    /// Handling of reversed or out-of-bounds ranges.
    pub range_policy: RangePolicy,
    /// Memoization of highlight merges.
    pub cache_policy: CachePolicy,
}

impl Default for SelectableTextOptions {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            press_strategy: None,
            selectable: true,
            highlight_color: Some(Rgba::YELLOW),
            bold_font: None,
            offset_unit: OffsetUnit::default(),
            range_policy: RangePolicy::default(),
            cache_policy: CachePolicy::default(),
        }
    }
}

impl SelectableTextOptions {
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub fn with_press_strategy(mut self, strategy: PressStrategy) -> Self {
        self.press_strategy = Some(strategy);
        self
    }

    #[must_use]
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    #[must_use]
    pub fn with_highlight_color(mut self, color: Rgba) -> Self {
        self.highlight_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_bold_font(mut self, family: impl Into<String>) -> Self {
        self.bold_font = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_offset_unit(mut self, unit: OffsetUnit) -> Self {
        self.offset_unit = unit;
        self
    }

    #[must_use]
    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    #[must_use]
    pub fn with_cache_policy(mut self, policy: CachePolicy) -> Self {
        self.cache_policy = policy;
        self
    }

    /// The press strategy in effect.
    #[must_use]
    pub fn effective_press_strategy(&self) -> PressStrategy {
        self.press_strategy
            .unwrap_or_else(|| PressStrategy::for_platform(self.platform))
    }
}
