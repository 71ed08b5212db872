//! Block capture.
//!
//! A header line ending in `{` owns the following lines up to the `}` that
//! brings the brace depth back to where it started, found through the
//! source's [`BraceMap`]. The text after that `}` may open an `else` block;
//! anything else there is an error.

use std::ops::Range;

use cruck_diagnostic::{BraceProblem, ErrorKind, RunError};
use cruck_ir::{SourcePos, SourceText};
use cruck_lexer::{lex_code, TokenKind};
use cruck_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::ast::{Block, Stmt, StmtKind};
use crate::braces::{net_depth, BraceMap, Close};
use crate::stmt::{classify, Header, Line};

/// Text after the closing brace and its character column.
fn remainder<'src>(source: &SourceText<'src>, close: Close) -> (&'src str, usize) {
    let line = source.line(close.line).unwrap_or_default();
    let byte = line
        .char_indices()
        .nth(close.col)
        .map_or(line.len(), |(idx, c)| idx + c.len_utf8());
    (&line[byte..], close.col + 1)
}

fn is_else_header(text: &str) -> bool {
    let kinds: Vec<TokenKind> = lex_code(text).iter().map(|t| t.kind).collect();
    kinds == [TokenKind::Else, TokenKind::LBrace]
}

/// Parses one block's lines into statements.
struct BlockParser<'a, 'src> {
    source: &'a SourceText<'src>,
    braces: &'a BraceMap,
}

impl BlockParser<'_, '_> {
    fn parse(&self, lines: Range<usize>) -> Block {
        let mut stmts = Vec::new();
        let mut idx = lines.start;
        let end = lines.end;
        while idx < end {
            let text = self.source.line(idx).unwrap_or_default();
            match classify(text, idx) {
                Line::Simple(kind) => {
                    trace!(line = idx, ?kind, "statement");
                    stmts.push(Stmt::new(kind, idx));
                    idx += 1;
                }
                Line::Header(header) => {
                    idx = self.parse_header(idx, end, header, &mut stmts);
                }
            }
        }
        Block::new(stmts)
    }

    fn nested(&self, lines: Range<usize>) -> Block {
        ensure_sufficient_stack(|| self.parse(lines))
    }

    /// Parse a header and its block(s); returns the next line to parse.
    fn parse_header(&self, idx: usize, end: usize, header: Header, stmts: &mut Vec<Stmt>) -> usize {
        let text = self.source.line(idx).unwrap_or_default();
        let depth = net_depth(text);

        let Some(close) = (depth > 0)
            .then(|| self.braces.close_of(idx, 0, end))
            .flatten()
        else {
            // The block runs past the region (or never opens); report at
            // the header's last `{` and consume the rest of the region.
            let col = text.chars().count().saturating_sub(1);
            let err = match header {
                Header::Opaque(err) => err,
                _ => RunError::new(
                    ErrorKind::UnbalancedBraces(BraceProblem::MissingClose),
                    SourcePos::at(idx, col),
                ),
            };
            stmts.push(Stmt::new(StmtKind::Invalid(Box::new(err)), idx));
            return if depth > 0 { end } else { idx + 1 };
        };

        let body = idx + 1..close.line;
        let mut last_close = close;
        let kind = match header {
            Header::While { guard, bound } => StmtKind::While {
                guard,
                bound,
                body: self.nested(body),
            },
            Header::If { guard, op, literal } => {
                let then_block = self.nested(body);
                let (else_block, after) = self.parse_else(close, end);
                if let Some(after) = after {
                    last_close = after;
                }
                StmtKind::If {
                    guard,
                    op,
                    literal,
                    then_block,
                    else_block,
                }
            }
            Header::Opaque(err) => StmtKind::Invalid(Box::new(err)),
        };
        trace!(line = idx, close = last_close.line, "block captured");
        stmts.push(Stmt::new(kind, idx));

        self.parse_trailing(last_close, end, stmts)
    }

    /// Capture an `else` block after the then-block closing at `close`.
    ///
    /// Returns the block and the position of its own closing brace.
    fn parse_else(&self, close: Close, end: usize) -> (Option<Block>, Option<Close>) {
        let (rest, offset) = remainder(self.source, close);
        let (else_line, from_col) = if is_else_header(rest) {
            (close.line, offset)
        } else if lex_code(rest).is_empty()
            && close.line + 1 < end
            && self
                .source
                .line(close.line + 1)
                .is_some_and(is_else_header)
        {
            (close.line + 1, 0)
        } else {
            return (None, None);
        };

        match self.braces.close_of(else_line, from_col, end) {
            Some(else_close) => {
                let block = self.nested(else_line + 1..else_close.line);
                (Some(block), Some(else_close))
            }
            // Unreachable once braces validate; keep the then-branch.
            None => (None, None),
        }
    }

    /// Handle text after a block's final `}`; returns the next line to parse.
    fn parse_trailing(&self, close: Close, end: usize, stmts: &mut Vec<Stmt>) -> usize {
        let (rest, offset) = remainder(self.source, close);
        let tokens = lex_code(rest);
        let Some(first) = tokens.first() else {
            return close.line + 1;
        };

        let err = RunError::new(
            ErrorKind::UnknownStatement {
                text: rest.trim().to_owned(),
            },
            SourcePos::at(close.line, offset + first.col as usize),
        );
        stmts.push(Stmt::new(StmtKind::Invalid(Box::new(err)), close.line));

        let depth = net_depth(rest);
        if depth > 0 {
            self.braces
                .close_of(close.line, offset, end)
                .map_or(end, |c| c.line + 1)
        } else {
            close.line + 1
        }
    }
}

/// Parse the statements of `lines`, capturing nested blocks.
pub fn parse_block(source: &SourceText<'_>, lines: Range<usize>) -> Block {
    parse_block_with(source, &BraceMap::new(source), lines)
}

/// [`parse_block`] with the source's brace pairs already computed.
pub(crate) fn parse_block_with(source: &SourceText<'_>, braces: &BraceMap, lines: Range<usize>) -> Block {
    BlockParser { source, braces }.parse(lines)
}
