//! Source text split into lines.

use crate::SourcePos;

/// The immutable line vector of one run.
///
/// Lines are obtained by splitting on `\n`; a trailing `\r` is stripped from
/// each line so CRLF sources report the same columns as LF sources. A text
/// ending in `\n` therefore has a final empty line, and the empty text has
/// exactly one empty line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceText<'src> {
    lines: Vec<&'src str>,
}

impl<'src> SourceText<'src> {
    /// Split `source` into lines.
    pub fn new(source: &'src str) -> Self {
        let lines = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        SourceText { lines }
    }

    /// Get a raw (untrimmed) line by index.
    #[inline]
    pub fn line(&self, index: usize) -> Option<&'src str> {
        self.lines.get(index).copied()
    }

    /// All raw lines in order.
    #[inline]
    pub fn lines(&self) -> &[&'src str] {
        &self.lines
    }

    /// Number of lines (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always `false`: even the empty text has one (empty) line.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Position just past the last character of the last line.
    pub fn end(&self) -> SourcePos {
        let last = self.lines.len().saturating_sub(1);
        let col = self.lines.last().map_or(0, |line| line.chars().count());
        SourcePos::at(last, col)
    }
}
