//! Annotator configuration.

use crate::offsets::OffsetEncoding;
use crate::style::{BaseAttributes, Color, FontSpec, ParagraphStyle};

/// How a pass looks for tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode<'a> {
    /// Scan the whole text for `#` and `@` tokens.
    Markers,
    /// Only check whether the text starts with this literal prefix.
    RestrictedPrefix(&'a str),
}

/// Styling and filtering rules for one annotation pass.
///
/// Built with the `with_*` methods:
///
/// ```rust
/// use taglight::{AnnotatorConfig, Color, FontSpec};
///
/// let config = AnnotatorConfig::new()
///     .with_font(FontSpec::body())
///     .with_hashtag_color(Color::rgb(0x1d, 0xa1, 0xf2))
///     .with_mention_color(Color::rgb(0x7b, 0x61, 0xff));
/// assert!(config.restricted_prefix.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnotatorConfig {
    /// Base font for the whole text.
    pub font: Option<FontSpec>,
    /// Base foreground color for the whole text.
    pub base_color: Option<Color>,
    /// Uniform line height in points.
    pub line_height: Option<f32>,
    /// Foreground color for hashtags. Hashtags are still detected when this is `None`.
    pub hashtag_color: Option<Color>,
    /// Foreground color for mentions (and for the restricted prefix).
    pub mention_color: Option<Color>,
    /// When set, marker scanning is skipped and only this leading literal is detected.
    pub restricted_prefix: Option<String>,
    /// Code-unit scheme for every produced range and accepted offset.
    pub encoding: OffsetEncoding,
}

impl AnnotatorConfig {
    /// An empty configuration: marker mode, no styling, char offsets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base font.
    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the base foreground color.
    pub fn with_base_color(mut self, color: Color) -> Self {
        self.base_color = Some(color);
        self
    }

    /// Pin every line to `line_height` points.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Color hashtags.
    pub fn with_hashtag_color(mut self, color: Color) -> Self {
        self.hashtag_color = Some(color);
        self
    }

    /// Color mentions (and the restricted prefix).
    pub fn with_mention_color(mut self, color: Color) -> Self {
        self.mention_color = Some(color);
        self
    }

    /// Switch to restricted mode with the given leading literal.
    pub fn with_restricted_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.restricted_prefix = Some(prefix.into());
        self
    }

    /// Choose the offset encoding.
    pub fn with_encoding(mut self, encoding: OffsetEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// The scan mode implied by this configuration.
    ///
    /// A restricted prefix always wins; hashtag settings are then ignored.
    pub fn mode(&self) -> ScanMode<'_> {
        match self.restricted_prefix.as_deref() {
            Some(prefix) => ScanMode::RestrictedPrefix(prefix),
            None => ScanMode::Markers,
        }
    }

    /// Attributes applied to the whole text.
    pub fn base_attributes(&self) -> BaseAttributes {
        BaseAttributes {
            font: self.font.clone(),
            foreground: self.base_color,
            paragraph: self.line_height.map(ParagraphStyle::uniform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restricted_prefix_selects_mode() {
        let config = AnnotatorConfig::new().with_hashtag_color(Color::BLACK);
        assert_eq!(config.mode(), ScanMode::Markers);

        let config = config.with_restricted_prefix("@team");
        assert_eq!(config.mode(), ScanMode::RestrictedPrefix("@team"));
    }

    #[test]
    fn test_base_attributes_from_config() {
        let config = AnnotatorConfig::new()
            .with_font(FontSpec::body())
            .with_base_color(Color::BLACK)
            .with_line_height(20.0);
        let base = config.base_attributes();
        assert_eq!(base.font, Some(FontSpec::system(17.0)));
        assert_eq!(base.foreground, Some(Color::BLACK));
        assert_eq!(base.paragraph, Some(ParagraphStyle::uniform(20.0)));

        assert_eq!(AnnotatorConfig::new().base_attributes(), BaseAttributes::default());
    }
}
