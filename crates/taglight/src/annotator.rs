//! The annotation pass and its result.
//!
//! # Overview
//!
//! [`annotate`] takes the current text and an [`AnnotatorConfig`] and produces a fresh
//! [`AnnotationResult`]: styled output for the renderer, the ordered hashtag and mention lists,
//! and a reverse lookup from an offset to the enclosing token.
//!
//! Every call starts from scratch. Nothing is cached between calls and a result is never mutated
//! after it is returned, so a host can keep the last one around as long as it likes.
//!
//! # Modes
//!
//! - **Markers** (default): `#word` and `@word` are scanned independently over the original
//!   text. Each kind is recolored only if its color is configured.
//! - **Restricted prefix**: the text is only checked for a leading literal. At most one token is
//!   produced and no marker scanning runs, whatever else the configuration says.
//!
//! # Example
//!
//! ```rust
//! use taglight::{AnnotatorConfig, Color, TokenKind, annotate};
//!
//! let config = AnnotatorConfig::new()
//!     .with_hashtag_color(Color::rgb(0x1d, 0xa1, 0xf2))
//!     .with_mention_color(Color::rgb(0x7b, 0x61, 0xff));
//! let result = annotate("@alice mentioned #bug123", &config);
//!
//! assert_eq!(result.mentions()[0].value, "alice");
//! assert_eq!(result.hashtags()[0].value, "bug123");
//!
//! let tapped = result.resolve(20).unwrap();
//! assert_eq!(tapped.kind, TokenKind::Hashtag);
//! assert!(result.resolve(8).is_none());
//! ```

use crate::config::{AnnotatorConfig, ScanMode};
use crate::error::AnnotateError;
use crate::offsets::{OffsetEncoding, TextIndex};
use crate::pattern;
use crate::style::{BaseAttributes, Color, TokenTag};
use crate::styled::{StyleRun, StyledText};
use crate::token::{Token, TokenKind, TokenRange};

/// The output of one annotation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationResult {
    encoding: OffsetEncoding,
    styled: StyledText,
    hashtags: Vec<Token>,
    mentions: Vec<Token>,
    restricted: Option<Token>,
}

impl AnnotationResult {
    /// A result with base styling and no tokens.
    pub fn plain(len: usize, base: BaseAttributes, encoding: OffsetEncoding) -> Self {
        Self {
            encoding,
            styled: StyledText::plain(len, base),
            hashtags: Vec::new(),
            mentions: Vec::new(),
            restricted: None,
        }
    }

    /// Styled output for rendering.
    pub fn styled(&self) -> &StyledText {
        &self.styled
    }

    /// Hashtags in text order; `hashtags()[i].display_index == i`.
    pub fn hashtags(&self) -> &[Token] {
        &self.hashtags
    }

    /// Mentions in text order; `mentions()[i].display_index == i`.
    pub fn mentions(&self) -> &[Token] {
        &self.mentions
    }

    /// The restricted-prefix token, when restricted mode matched.
    pub fn restricted_prefix(&self) -> Option<&Token> {
        self.restricted.as_ref()
    }

    /// Hashtag by display index.
    pub fn hashtag(&self, display_index: usize) -> Option<&Token> {
        self.hashtags.get(display_index)
    }

    /// Mention by display index.
    pub fn mention(&self, display_index: usize) -> Option<&Token> {
        self.mentions.get(display_index)
    }

    /// Every token, ordered by position in the text.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        let mut all: Vec<&Token> = self
            .restricted
            .iter()
            .chain(&self.hashtags)
            .chain(&self.mentions)
            .collect();
        all.sort_by_key(|token| token.range.start);
        all.into_iter()
    }

    /// Total number of tokens of all kinds.
    pub fn token_count(&self) -> usize {
        self.hashtags.len() + self.mentions.len() + usize::from(self.restricted.is_some())
    }

    /// Returns `true` if at least one token was detected.
    pub fn has_tokens(&self) -> bool {
        self.token_count() > 0
    }

    /// Returns `true` if the annotated text is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the annotated text in encoded units.
    pub fn len(&self) -> usize {
        self.styled.len()
    }

    /// Encoding of every range in this result.
    pub fn encoding(&self) -> OffsetEncoding {
        self.encoding
    }

    /// The token whose range contains `offset`.
    ///
    /// Offsets outside the text (for example from a gesture that raced an edit) resolve to
    /// `None`, as does plain text.
    pub fn resolve(&self, offset: usize) -> Option<&Token> {
        if let Some(token) = self.restricted.as_ref().filter(|t| t.range.contains(offset)) {
            return Some(token);
        }
        find_containing(&self.hashtags, offset).or_else(|| find_containing(&self.mentions, offset))
    }
}

/// Binary search in a start-sorted, non-overlapping token list.
fn find_containing(tokens: &[Token], offset: usize) -> Option<&Token> {
    let idx = tokens.partition_point(|token| token.range.start <= offset);
    let token = tokens.get(idx.checked_sub(1)?)?;
    token.range.contains(offset).then_some(token)
}

/// Runs annotation passes for a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    config: AnnotatorConfig,
}

impl Annotator {
    /// Create an annotator for `config`.
    pub fn new(config: AnnotatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Annotate `text`, degrading to base styling if the marker patterns are unusable.
    pub fn annotate(&self, text: &str) -> AnnotationResult {
        annotate(text, &self.config)
    }

    /// Annotate `text`, surfacing internal failures.
    pub fn try_annotate(&self, text: &str) -> Result<AnnotationResult, AnnotateError> {
        try_annotate(text, &self.config)
    }
}

/// Annotate `text` with `config`.
///
/// Never fails: if the fixed marker patterns cannot be compiled the error is logged and the
/// result carries base styling with no tokens.
pub fn annotate(text: &str, config: &AnnotatorConfig) -> AnnotationResult {
    match try_annotate(text, config) {
        Ok(result) => result,
        Err(err) => {
            tracing::error!(error = %err, "token annotation failed; using base styling only");
            AnnotationResult::plain(
                config.encoding.measure(text),
                config.base_attributes(),
                config.encoding,
            )
        }
    }
}

/// Annotate `text` with `config`, returning pattern failures to the caller.
pub fn try_annotate(
    text: &str,
    config: &AnnotatorConfig,
) -> Result<AnnotationResult, AnnotateError> {
    let index = TextIndex::new(text, config.encoding);
    let base = config.base_attributes();

    let result = match config.mode() {
        ScanMode::RestrictedPrefix(prefix) => {
            annotate_restricted(text, &index, base, prefix, config.mention_color)
        }
        ScanMode::Markers => {
            let hashtags = pattern::scan(text, &index, TokenKind::Hashtag)?;
            let mentions = pattern::scan(text, &index, TokenKind::Mention)?;

            let runs = hashtags
                .iter()
                .map(|token| style_run(token, config.hashtag_color))
                .chain(
                    mentions
                        .iter()
                        .map(|token| style_run(token, config.mention_color)),
                )
                .collect();

            AnnotationResult {
                encoding: config.encoding,
                styled: StyledText::with_runs(index.len(), base, runs),
                hashtags,
                mentions,
                restricted: None,
            }
        }
    };

    tracing::debug!(
        len = result.len(),
        restricted = config.restricted_prefix.is_some(),
        hashtags = result.hashtags.len(),
        mentions = result.mentions.len(),
        prefix_matched = result.restricted.is_some(),
        "annotated text"
    );
    Ok(result)
}

fn annotate_restricted(
    text: &str,
    index: &TextIndex,
    base: BaseAttributes,
    prefix: &str,
    color: Option<Color>,
) -> AnnotationResult {
    let mut result = AnnotationResult::plain(index.len(), base.clone(), index.encoding());

    // An empty prefix would produce an empty range that no offset can resolve to.
    if prefix.is_empty() || !text.starts_with(prefix) {
        return result;
    }

    let token = Token::new(
        TokenKind::RestrictedPrefix,
        TokenRange::new(0, index.measure(prefix)),
        prefix,
        0,
    );
    result.styled = StyledText::with_runs(index.len(), base, vec![style_run(&token, color)]);
    result.restricted = Some(token);
    result
}

fn style_run(token: &Token, foreground: Option<Color>) -> StyleRun {
    StyleRun {
        range: token.range,
        tag: TokenTag {
            kind: token.kind,
            display_index: token.display_index,
        },
        foreground,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FontSpec;

    const TAG: Color = Color::rgb(0x1d, 0xa1, 0xf2);
    const AT: Color = Color::rgb(0x7b, 0x61, 0xff);

    #[test]
    fn test_repeated_hashtag_gets_separate_indices_and_colors() {
        let config = AnnotatorConfig::new().with_hashtag_color(TAG);
        let result = annotate("hello #world and #world again", &config);

        assert_eq!(result.hashtags().len(), 2);
        for (i, token) in result.hashtags().iter().enumerate() {
            assert_eq!(token.value, "world");
            assert_eq!(token.display_index, i);
        }
        let colored: Vec<TokenRange> = result.styled().colored_runs().map(|r| r.range).collect();
        assert_eq!(colored, vec![TokenRange::new(6, 12), TokenRange::new(17, 23)]);
    }

    #[test]
    fn test_uncolored_kind_is_still_detected() {
        let result = annotate("#a @b", &AnnotatorConfig::new());
        assert_eq!(result.hashtags().len(), 1);
        assert_eq!(result.mentions().len(), 1);
        assert_eq!(result.styled().colored_runs().count(), 0);
        assert_eq!(result.resolve(0).map(|t| t.value.as_str()), Some("a"));
    }

    #[test]
    fn test_restricted_prefix_ignores_markers() {
        let config = AnnotatorConfig::new()
            .with_hashtag_color(TAG)
            .with_mention_color(AT)
            .with_restricted_prefix("@team");
        let result = annotate("@team update #later @bob", &config);

        assert!(result.hashtags().is_empty());
        assert!(result.mentions().is_empty());
        let token = result.restricted_prefix().unwrap();
        assert_eq!(token.range, TokenRange::new(0, 5));
        assert_eq!(token.value, "@team");
        assert_eq!(result.styled().colored_runs().count(), 1);
        assert!(result.resolve(15).is_none());
    }

    #[test]
    fn test_restricted_prefix_is_case_sensitive() {
        let config = AnnotatorConfig::new().with_restricted_prefix("@Team");
        assert!(!annotate("@team hi", &config).has_tokens());
        assert!(!annotate("x@Team", &config).has_tokens());
    }

    #[test]
    fn test_empty_restricted_prefix_matches_nothing() {
        let config = AnnotatorConfig::new().with_restricted_prefix("");
        let result = annotate("#tag @name", &config);
        assert!(!result.has_tokens());
    }

    #[test]
    fn test_restricted_prefix_length_uses_encoding() {
        let config = AnnotatorConfig::new()
            .with_restricted_prefix("@😀")
            .with_encoding(OffsetEncoding::Utf16);
        let result = annotate("@😀 hi", &config);
        assert_eq!(
            result.restricted_prefix().map(|t| t.range),
            Some(TokenRange::new(0, 3))
        );
    }

    #[test]
    fn test_tokens_are_ordered_by_position() {
        let result = annotate("@a #b @c #d", &AnnotatorConfig::new());
        let values: Vec<&str> = result.tokens().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["a", "b", "c", "d"]);
        assert_eq!(result.token_count(), 4);
        assert!(result.has_tokens());
        assert!(!result.is_empty());
        assert_eq!(result.mention(1).map(|t| t.value.as_str()), Some("c"));
        assert_eq!(result.hashtag(2), None);
    }

    #[test]
    fn test_plain_text_is_not_empty_but_has_no_tokens() {
        let result = annotate("hello", &AnnotatorConfig::new());
        assert_eq!(result.len(), 5);
        assert!(!result.is_empty());
        assert!(!result.has_tokens());
    }

    #[test]
    fn test_annotator_carries_config() {
        let annotator = Annotator::new(AnnotatorConfig::new().with_font(FontSpec::body()));
        let result = annotator.try_annotate("plain").unwrap();
        assert_eq!(result.styled().base().font, Some(FontSpec::body()));
        assert_eq!(result, annotator.annotate("plain"));
    }
}
