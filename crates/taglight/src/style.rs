//! Display attributes: colors, fonts and paragraph spacing.
//!
//! These are plain values. The engine never measures or draws text; a renderer maps them onto
//! whatever its toolkit uses.

use crate::error::AnnotateError;
use crate::token::TokenKind;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(input: &str) -> Result<Self, AnnotateError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || AnnotateError::InvalidColor(input.to_string());

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                // #RGB expands each nibble: `f` -> `ff`.
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }
}

/// A font request. The renderer resolves it to an actual face.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSpec {
    /// Font family name. `"system"` asks for the platform UI font.
    pub family: String,
    /// Point size.
    pub size: f32,
}

impl FontSpec {
    /// Create a font request for a named family.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// The platform UI font at the given size.
    pub fn system(size: f32) -> Self {
        Self::new("system", size)
    }

    /// The platform body text style (system font, 17pt).
    pub fn body() -> Self {
        Self::system(17.0)
    }
}

/// Uniform paragraph spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    /// Minimum line height in points.
    pub min_line_height: f32,
    /// Maximum line height in points.
    pub max_line_height: f32,
}

impl ParagraphStyle {
    /// Pin every line to exactly `line_height` points.
    pub fn uniform(line_height: f32) -> Self {
        Self {
            min_line_height: line_height,
            max_line_height: line_height,
        }
    }
}

/// Attributes applied to the whole text before any token styling.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BaseAttributes {
    /// Base font.
    pub font: Option<FontSpec>,
    /// Base foreground color.
    pub foreground: Option<Color>,
    /// Paragraph spacing.
    pub paragraph: Option<ParagraphStyle>,
}

/// Identity of the token that covers a styled span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenTag {
    /// Token kind.
    pub kind: TokenKind,
    /// The token's per-kind display index.
    pub display_index: usize,
}

/// Resolved attributes for one segment of text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextAttributes {
    /// Font.
    pub font: Option<FontSpec>,
    /// Effective foreground color (token color wins over the base color).
    pub foreground: Option<Color>,
    /// Paragraph spacing.
    pub paragraph: Option<ParagraphStyle>,
    /// The token covering this segment, if any.
    pub token: Option<TokenTag>,
}

impl TextAttributes {
    /// Attributes for plain (untokenized) text.
    pub fn from_base(base: &BaseAttributes) -> Self {
        Self {
            font: base.font.clone(),
            foreground: base.foreground,
            paragraph: base.paragraph,
            token: None,
        }
    }
}
