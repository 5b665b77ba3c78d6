//! Styled output: base attributes plus per-token overlays.
//!
//! A [`StyledText`] is the renderer-facing half of an annotation result. It stores the base
//! attributes once and a sorted list of non-overlapping [`StyleRun`]s, and can flatten both into
//! contiguous [`StyledSegment`]s for toolkits that want one attribute set per span.

use crate::style::{BaseAttributes, Color, TextAttributes, TokenTag};
use crate::token::TokenRange;

/// One token span layered over the base attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRun {
    /// Span of the token.
    pub range: TokenRange,
    /// Which token this run belongs to.
    pub tag: TokenTag,
    /// Foreground override, present only when the token kind has a configured color.
    pub foreground: Option<Color>,
}

/// A maximal span sharing one resolved attribute set.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSegment {
    /// Span in encoded offsets.
    pub range: TokenRange,
    /// Resolved attributes for the span.
    pub attributes: TextAttributes,
}

/// Text styling for one annotation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    len: usize,
    base: BaseAttributes,
    /// Sorted by start; never overlapping.
    runs: Vec<StyleRun>,
}

impl StyledText {
    /// Base attributes only, over `[0, len)`.
    pub fn plain(len: usize, base: BaseAttributes) -> Self {
        Self {
            len,
            base,
            runs: Vec::new(),
        }
    }

    pub(crate) fn with_runs(len: usize, base: BaseAttributes, mut runs: Vec<StyleRun>) -> Self {
        runs.retain(|run| !run.range.is_empty() && run.range.end <= len);
        runs.sort_by_key(|run| run.range.start);
        Self { len, base, runs }
    }

    /// Length of the styled text in encoded units.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the styled text is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Attributes applied to the whole text.
    pub fn base(&self) -> &BaseAttributes {
        &self.base
    }

    /// All token runs in text order.
    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    /// Runs that actually recolor their span.
    pub fn colored_runs(&self) -> impl Iterator<Item = &StyleRun> {
        self.runs.iter().filter(|run| run.foreground.is_some())
    }

    /// The run covering `offset`, if any.
    pub fn run_at(&self, offset: usize) -> Option<&StyleRun> {
        let idx = self.runs.partition_point(|run| run.range.start <= offset);
        let run = self.runs.get(idx.checked_sub(1)?)?;
        run.range.contains(offset).then_some(run)
    }

    /// Resolved attributes at `offset`; `None` past the end of the text.
    pub fn attributes_at(&self, offset: usize) -> Option<TextAttributes> {
        if offset >= self.len {
            return None;
        }
        Some(match self.run_at(offset) {
            Some(run) => self.run_attributes(run),
            None => TextAttributes::from_base(&self.base),
        })
    }

    /// Flatten into contiguous segments covering `[0, len)`.
    ///
    /// Empty text produces no segments.
    pub fn segments(&self) -> Vec<StyledSegment> {
        let mut segments = Vec::with_capacity(self.runs.len() * 2 + 1);
        let mut cursor = 0usize;

        for run in &self.runs {
            if run.range.start > cursor {
                segments.push(self.plain_segment(cursor, run.range.start));
            }
            segments.push(StyledSegment {
                range: run.range,
                attributes: self.run_attributes(run),
            });
            cursor = run.range.end;
        }

        if cursor < self.len {
            segments.push(self.plain_segment(cursor, self.len));
        }

        segments
    }

    fn plain_segment(&self, start: usize, end: usize) -> StyledSegment {
        StyledSegment {
            range: TokenRange::new(start, end),
            attributes: TextAttributes::from_base(&self.base),
        }
    }

    fn run_attributes(&self, run: &StyleRun) -> TextAttributes {
        TextAttributes {
            foreground: run.foreground.or(self.base.foreground),
            token: Some(run.tag),
            ..TextAttributes::from_base(&self.base)
        }
    }
}
