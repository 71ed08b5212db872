//! Bracket balance and pairing.
//!
//! Runs before anything else. Every `{` and `}` counts, including those
//! inside string literals. Block capture looks closing braces up in the
//! same [`BraceMap`], so a text that validates always captures cleanly.

use cruck_diagnostic::{BraceProblem, ErrorKind, RunError};
use cruck_ir::{SourcePos, SourceText};

/// A brace character found in a line.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Brace {
    Open,
    Close,
}

/// Braces of `line` with their character columns, in order.
pub fn braces(line: &str) -> impl Iterator<Item = (usize, Brace)> + '_ {
    line.chars().enumerate().filter_map(|(col, c)| match c {
        '{' => Some((col, Brace::Open)),
        '}' => Some((col, Brace::Close)),
        _ => None,
    })
}

/// Net depth change of a line.
pub fn net_depth(line: &str) -> isize {
    braces(line)
        .map(|(_, brace)| match brace {
            Brace::Open => 1,
            Brace::Close => -1,
        })
        .sum()
}

/// Position of a `}`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct Close {
    pub line: usize,
    pub col: usize,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct OpenBrace {
    col: usize,
    close: Option<Close>,
}

/// Every `{` of a source paired with the `}` that closes it.
///
/// Built in one scan. A stray `}` is skipped and an unclosed `{` has no
/// partner; the first such problem is kept for [`BraceMap::check`].
#[derive(Clone, Debug)]
pub struct BraceMap {
    /// Opening braces per line, in column order.
    opens: Vec<Vec<OpenBrace>>,
    problem: Option<RunError>,
}

impl BraceMap {
    pub fn new(source: &SourceText<'_>) -> Self {
        let mut opens: Vec<Vec<OpenBrace>> = Vec::with_capacity(source.len());
        let mut unclosed: Vec<(usize, usize)> = Vec::new();
        let mut stray = None;

        for (line_idx, line) in source.lines().iter().enumerate() {
            opens.push(Vec::new());
            for (col, brace) in braces(line) {
                match brace {
                    Brace::Open => {
                        unclosed.push((line_idx, opens[line_idx].len()));
                        opens[line_idx].push(OpenBrace { col, close: None });
                    }
                    Brace::Close => match unclosed.pop() {
                        Some((open_line, slot)) => {
                            opens[open_line][slot].close = Some(Close { line: line_idx, col });
                        }
                        None => {
                            stray.get_or_insert(SourcePos::at(line_idx, col));
                        }
                    },
                }
            }
        }

        let problem = match stray {
            Some(pos) => Some(RunError::new(
                ErrorKind::UnbalancedBraces(BraceProblem::UnexpectedClose),
                pos,
            )),
            None if !unclosed.is_empty() => Some(RunError::new(
                ErrorKind::UnbalancedBraces(BraceProblem::MissingClose),
                source.end(),
            )),
            None => None,
        };
        BraceMap { opens, problem }
    }

    /// The first balance problem: an unmatched `}` at its own position, or
    /// a missing one at the end of the last line.
    pub fn check(&self) -> Result<(), RunError> {
        match &self.problem {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// The `}` ending the block opened on `line` at or after `from_col`.
    ///
    /// That is the partner of the first `{` there that the line itself does
    /// not close. `None` when it is missing or not before line `limit`.
    pub(crate) fn close_of(&self, line: usize, from_col: usize, limit: usize) -> Option<Close> {
        let open = self
            .opens
            .get(line)?
            .iter()
            .filter(|open| open.col >= from_col)
            .find(|open| !matches!(open.close, Some(close) if close.line == line))?;
        open.close.filter(|close| close.line < limit)
    }
}

/// Verify that every `}` closes an open `{` and nothing is left open.
///
/// An unmatched `}` is reported at its own position; a missing one at the
/// end of the last line.
pub fn check_braces(source: &SourceText<'_>) -> Result<(), RunError> {
    BraceMap::new(source).check()
}
