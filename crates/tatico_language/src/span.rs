//! Source location tracking.
//!
//! `Span` tracks the position of tokens in a command line so diagnostics can
//! point at the offending text.

/// A span of source text.
///
/// Tracks byte offsets and line/column positions for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset where this span starts.
    pub start: usize,
    /// Byte offset where this span ends (exclusive).
    pub end: usize,
    /// 1-based line number. Always 1 unless the caller numbers its lines.
    pub line: u32,
    /// 1-based column (in characters) where this span starts.
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns the text this span covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}
