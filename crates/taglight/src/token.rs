//! Detected tokens and their ranges.

/// What kind of token a span of text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// `#` followed by one or more word characters.
    Hashtag,
    /// `@` followed by one or more word characters.
    Mention,
    /// The configured literal prefix, detected only at the start of the text.
    RestrictedPrefix,
}

impl TokenKind {
    /// The marker character that anchors this kind, if it has one.
    pub fn marker(self) -> Option<char> {
        match self {
            Self::Hashtag => Some('#'),
            Self::Mention => Some('@'),
            Self::RestrictedPrefix => None,
        }
    }
}

/// A half-open offset range (`start..end`) in the configured
/// [`OffsetEncoding`](crate::OffsetEncoding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenRange {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl TokenRange {
    /// Create a new range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the range in encoded units.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the range is empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if the range contains an offset.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Check if two ranges overlap.
    pub fn overlaps(&self, other: &TokenRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A token detected in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Span of the token in the original text, marker included.
    pub range: TokenRange,
    /// The bare token text: the word without its marker, or the literal restricted prefix.
    pub value: String,
    /// Position among tokens of the same kind, left to right, repeats counted separately.
    pub display_index: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(
        kind: TokenKind,
        range: TokenRange,
        value: impl Into<String>,
        display_index: usize,
    ) -> Self {
        Self {
            kind,
            range,
            value: value.into(),
            display_index,
        }
    }

    /// The token as it appears in the text (`#value`, `@value`, or the prefix itself).
    pub fn surface(&self) -> String {
        match self.kind.marker() {
            Some(marker) => format!("{marker}{}", self.value),
            None => self.value.clone(),
        }
    }
}
