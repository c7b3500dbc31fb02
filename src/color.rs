//! RGBA colors for highlight backgrounds.
//!
//! Host views take colors as CSS-style strings (`"#ffeb3b"`, `"yellow"`).
//! [`Rgba`] parses the hex forms and a small set of named colors, and formats
//! back to `#RRGGBB` / `#RRGGBBAA`.
//!
//! # Examples
//!
//! ```
//! use selectable_text::Rgba;
//!
//! let marker: Rgba = "#FFEB3B".parse().unwrap();
//! assert_eq!(marker, Rgba::from_rgb_u8(0xFF, 0xEB, 0x3B));
//! assert_eq!(marker.to_string(), "#FFEB3B");
//!
//! let named: Rgba = "yellow".parse().unwrap();
//! assert_eq!(named, Rgba::YELLOW);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// RGBA color with 8-bit components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb_u8(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb_u8(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::from_rgb_u8(255, 0, 0);
    /// Opaque green (CSS `lime`).
    pub const GREEN: Self = Self::from_rgb_u8(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::from_rgb_u8(0, 0, 255);
    /// Opaque yellow, the usual marker color.
    pub const YELLOW: Self = Self::from_rgb_u8(255, 255, 0);

    /// Create a color from u8 RGBA components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from u8 RGB components.
    #[must_use]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Return the color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self::from_rgb_u8(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Some(Self::new(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Self::from_rgb_u8(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Look up a CSS color keyword (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "transparent" => Self::TRANSPARENT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "lime" => Self::GREEN,
            "green" => Self::from_rgb_u8(0, 128, 0),
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "orange" => Self::from_rgb_u8(255, 165, 0),
            "pink" => Self::from_rgb_u8(255, 192, 203),
            "cyan" | "aqua" => Self::from_rgb_u8(0, 255, 255),
            "magenta" | "fuchsia" => Self::from_rgb_u8(255, 0, 255),
            "gray" | "grey" => Self::from_rgb_u8(128, 128, 128),
            "lightblue" => Self::from_rgb_u8(173, 216, 230),
            "lightgreen" => Self::from_rgb_u8(144, 238, 144),
            "lightyellow" => Self::from_rgb_u8(255, 255, 224),
            _ => return None,
        };
        Some(color)
    }

    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = if trimmed.starts_with('#') {
            Self::from_hex(trimmed)
        } else {
            Self::from_name(trimmed).or_else(|| Self::from_hex(trimmed))
        };
        parsed.ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, a } = *self;
        if a == 255 {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgba {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgba {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
