//! Offset encodings and byte/offset conversion.
//!
//! The regex engine reports **byte** offsets into UTF-8 text. Hosts think in other units: a
//! headless editor kernel usually counts Unicode scalar values (`char`), while `NSString`,
//! JavaScript strings and LSP count UTF-16 code units. Every range the annotator produces and
//! every offset it accepts is expressed in one [`OffsetEncoding`], chosen per configuration.

/// The code-unit scheme used for token ranges and lookup offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OffsetEncoding {
    /// Unicode scalar values (`char`).
    #[default]
    Chars,
    /// UTF-16 code units.
    Utf16,
}

impl OffsetEncoding {
    /// Length of `text` in this encoding.
    pub fn measure(self, text: &str) -> usize {
        match self {
            Self::Chars => text.chars().count(),
            Self::Utf16 => text.encode_utf16().count(),
        }
    }

    fn char_width(self, ch: char) -> usize {
        match self {
            Self::Chars => 1,
            Self::Utf16 => ch.len_utf16(),
        }
    }
}

/// Byte <-> encoded offset table for a single text.
///
/// Built once per annotation pass; lookups are `O(log n)`.
#[derive(Debug, Clone)]
pub struct TextIndex {
    encoding: OffsetEncoding,
    /// Byte offset of every char boundary, including the end of the text.
    char_to_byte: Vec<usize>,
    /// Encoded offset of every char boundary, including the end of the text.
    char_to_unit: Vec<usize>,
    text_len: usize,
}

impl TextIndex {
    /// Index `text` for the given encoding.
    pub fn new(text: &str, encoding: OffsetEncoding) -> Self {
        let mut char_to_byte = Vec::with_capacity(text.len() + 1);
        let mut char_to_unit = Vec::with_capacity(text.len() + 1);
        let mut unit = 0usize;
        for (byte, ch) in text.char_indices() {
            char_to_byte.push(byte);
            char_to_unit.push(unit);
            unit += encoding.char_width(ch);
        }
        char_to_byte.push(text.len());
        char_to_unit.push(unit);

        Self {
            encoding,
            char_to_byte,
            char_to_unit,
            text_len: text.len(),
        }
    }

    /// The encoding this index converts to.
    pub fn encoding(&self) -> OffsetEncoding {
        self.encoding
    }

    /// Length of the indexed text in encoded units.
    pub fn len(&self) -> usize {
        self.char_to_unit.last().copied().unwrap_or(0)
    }

    /// Returns `true` if the indexed text is empty.
    pub fn is_empty(&self) -> bool {
        self.text_len == 0
    }

    /// Convert a byte offset into an encoded offset.
    ///
    /// Offsets past the end clamp to [`len`](Self::len); a byte inside a multi-byte character
    /// maps to the next character boundary.
    pub fn byte_to_offset(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        let idx = match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) | Err(idx) => idx,
        };
        self.char_to_unit[idx.min(self.char_to_unit.len() - 1)]
    }

    /// Convert an encoded offset into a byte offset.
    ///
    /// Returns `None` past the end of the text, and for UTF-16 offsets that fall between the two
    /// halves of a surrogate pair.
    pub fn offset_to_byte(&self, offset: usize) -> Option<usize> {
        let idx = self.char_to_unit.binary_search(&offset).ok()?;
        self.char_to_byte.get(idx).copied()
    }

    /// Length of `text` in this index's encoding.
    pub fn measure(&self, text: &str) -> usize {
        self.encoding.measure(text)
    }
}
