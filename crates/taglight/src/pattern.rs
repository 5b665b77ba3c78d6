//! Marker scanning.
//!
//! Each marker kind has one fixed pattern: the marker followed by one or more Unicode word
//! characters, with the word in capture group 1. Both passes run over the original text; neither
//! sees the other's output.

use crate::error::AnnotateError;
use crate::offsets::TextIndex;
use crate::token::{Token, TokenKind, TokenRange};
use regex::Regex;
use std::sync::LazyLock;

/// Hashtag pattern: `#` + word characters.
pub const HASHTAG_PATTERN: &str = r"#(\w+)";
/// Mention pattern: `@` + word characters.
pub const MENTION_PATTERN: &str = r"@(\w+)";

static HASHTAG_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(HASHTAG_PATTERN));
static MENTION_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(MENTION_PATTERN));

/// A compiled marker rule.
#[derive(Debug, Clone, Copy)]
pub struct MarkerPattern {
    kind: TokenKind,
    regex: &'static Regex,
}

impl MarkerPattern {
    /// The shared compiled pattern for a marker kind.
    ///
    /// [`TokenKind::RestrictedPrefix`] has no marker pattern and returns `Ok(None)`.
    pub fn for_kind(kind: TokenKind) -> Result<Option<Self>, AnnotateError> {
        let (pattern, compiled) = match kind {
            TokenKind::Hashtag => (HASHTAG_PATTERN, &*HASHTAG_REGEX),
            TokenKind::Mention => (MENTION_PATTERN, &*MENTION_REGEX),
            TokenKind::RestrictedPrefix => return Ok(None),
        };
        let regex = compiled
            .as_ref()
            .map_err(|err| AnnotateError::PatternCompile {
                pattern,
                message: err.to_string(),
            })?;
        Ok(Some(Self { kind, regex }))
    }

    /// Token kind produced by this pattern.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Find every token left to right, non-overlapping.
    ///
    /// `display_index` counts matches of this kind in order, repeats included.
    pub fn scan(&self, text: &str, index: &TextIndex) -> Vec<Token> {
        let mut tokens = Vec::new();
        for caps in self.regex.captures_iter(text) {
            let (Some(whole), Some(word)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let range = TokenRange::new(
                index.byte_to_offset(whole.start()),
                index.byte_to_offset(whole.end()),
            );
            if range.is_empty() {
                continue;
            }
            let display_index = tokens.len();
            tokens.push(Token::new(self.kind, range, word.as_str(), display_index));
        }
        tokens
    }
}

/// Scan `text` for tokens of one marker kind.
pub fn scan(text: &str, index: &TextIndex, kind: TokenKind) -> Result<Vec<Token>, AnnotateError> {
    Ok(MarkerPattern::for_kind(kind)?
        .map(|pattern| pattern.scan(text, index))
        .unwrap_or_default())
}
