//! Locating the executable block.
//!
//! Only the body of the first `func main() {` is executed. Sources without
//! such a header are either run whole or rejected, depending on
//! [`EntryPolicy`].

use std::ops::Range;

use cruck_diagnostic::{ErrorKind, RunError};
use cruck_ir::{SourcePos, SourceText};
use cruck_lexer::{lex_code, Token, TokenKind};

use crate::braces::BraceMap;

/// What to do when no `func main() {` header exists.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum EntryPolicy {
    /// Execute the whole source.
    #[default]
    Fallback,
    /// Fail with `MissingEntryPoint`.
    Require,
}

/// The lines to execute.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EntryBlock {
    /// Line of the `func main() {` header, if there is one.
    pub header: Option<usize>,
    /// First executable line; block-relative index 0 maps here.
    pub offset: usize,
    /// One past the last executable line.
    pub end: usize,
}

impl EntryBlock {
    /// Absolute line range of the block.
    pub fn lines(&self) -> Range<usize> {
        self.offset..self.end
    }

    /// Map a block-relative line index to an absolute one.
    pub fn absolute(&self, relative: usize) -> usize {
        self.offset + relative
    }
}

/// Column of the opening brace if `tokens` are exactly `func main ( ) {`.
fn main_header_brace(tokens: &[Token<'_>]) -> Option<u32> {
    match tokens {
        [func, name, lparen, rparen, brace]
            if func.kind == TokenKind::Func
                && name.kind == TokenKind::Ident
                && name.text == "main"
                && lparen.kind == TokenKind::LParen
                && rparen.kind == TokenKind::RParen
                && brace.kind == TokenKind::LBrace =>
        {
            Some(brace.col)
        }
        _ => None,
    }
}

/// Find the executable block of `source`.
pub fn locate_entry(source: &SourceText<'_>, policy: EntryPolicy) -> Result<EntryBlock, RunError> {
    locate_entry_with(source, &BraceMap::new(source), policy)
}

/// [`locate_entry`] with the source's brace pairs already computed.
pub(crate) fn locate_entry_with(
    source: &SourceText<'_>,
    braces: &BraceMap,
    policy: EntryPolicy,
) -> Result<EntryBlock, RunError> {
    let header = source
        .lines()
        .iter()
        .enumerate()
        .find_map(|(idx, line)| main_header_brace(&lex_code(line)).map(|col| (idx, col)));

    let Some((header_line, brace_col)) = header else {
        return match policy {
            EntryPolicy::Fallback => Ok(EntryBlock {
                header: None,
                offset: 0,
                end: source.len(),
            }),
            EntryPolicy::Require => Err(RunError::new(
                ErrorKind::MissingEntryPoint,
                SourcePos::START,
            )),
        };
    };

    match braces.close_of(header_line, brace_col as usize, source.len()) {
        Some(close) => Ok(EntryBlock {
            header: Some(header_line),
            offset: header_line + 1,
            end: close.line,
        }),
        None => Err(RunError::new(
            ErrorKind::MainUnclosed,
            SourcePos::new(u32::try_from(header_line).unwrap_or(u32::MAX), brace_col),
        )),
    }
}
