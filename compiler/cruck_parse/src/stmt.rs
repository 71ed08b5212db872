//! Line classification.
//!
//! Each line is tokenized and matched against the statement forms in
//! priority order. Lines that match nothing become errors, which the block
//! parser stores as `StmtKind::Invalid` so they are raised in execution
//! order.

use cruck_diagnostic::{ErrorKind, OverflowSource, RunError};
use cruck_ir::{CompareOp, SourcePos};
use cruck_lexer::{lex_line, Token, TokenKind as T};

use crate::ast::{Operand, StmtKind, VarRef};

/// A classified line.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) enum Line {
    /// A single-line statement (including `Invalid`).
    Simple(StmtKind),
    /// A line opening a nested block.
    Header(Header),
}

/// A block-opening line.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) enum Header {
    While {
        guard: VarRef,
        bound: i64,
    },
    If {
        guard: VarRef,
        op: CompareOp,
        literal: i64,
    },
    /// A line ending in `{` that is not a supported header. Its block is
    /// skipped; executing it raises the error.
    Opaque(RunError),
}

fn pos(line: usize, token: &Token<'_>) -> SourcePos {
    SourcePos::at(line, token.col as usize)
}

fn var_ref(line: usize, token: &Token<'_>) -> VarRef {
    VarRef {
        name: token.text.to_owned(),
        pos: pos(line, token),
    }
}

fn literal(line: usize, token: &Token<'_>) -> Result<i64, RunError> {
    token.text.parse::<i64>().map_err(|_| {
        RunError::new(
            ErrorKind::IntegerOverflow(OverflowSource::Literal(token.text.to_owned())),
            pos(line, token),
        )
    })
}

fn operand(line: usize, token: &Token<'_>) -> Result<Operand, RunError> {
    if token.kind == T::Int {
        Ok(Operand::Literal {
            value: literal(line, token)?,
            pos: pos(line, token),
        })
    } else {
        Ok(Operand::Var(var_ref(line, token)))
    }
}

fn compare_op(kind: T) -> Option<CompareOp> {
    match kind {
        T::EqEq => Some(CompareOp::Eq),
        T::NotEq => Some(CompareOp::NotEq),
        T::GtEq => Some(CompareOp::GtEq),
        T::LtEq => Some(CompareOp::LtEq),
        T::Gt => Some(CompareOp::Gt),
        T::Lt => Some(CompareOp::Lt),
        _ => None,
    }
}

fn invalid(err: RunError) -> Line {
    Line::Simple(StmtKind::Invalid(Box::new(err)))
}

fn simple(result: Result<StmtKind, RunError>) -> Line {
    match result {
        Ok(kind) => Line::Simple(kind),
        Err(err) => invalid(err),
    }
}

fn header(result: Result<Header, RunError>) -> Line {
    match result {
        Ok(header) => Line::Header(header),
        Err(err) => Line::Header(Header::Opaque(err)),
    }
}

/// Classify the line at absolute index `line_idx`.
pub(crate) fn classify(text: &str, line_idx: usize) -> Line {
    let mut tokens = lex_line(text);

    match tokens.first().map(|t| t.kind) {
        None => return Line::Simple(StmtKind::Blank),
        Some(T::LineComment) => return Line::Simple(StmtKind::Comment),
        Some(_) => {}
    }
    if let Some(idx) = tokens.iter().position(|t| t.kind == T::LineComment) {
        tokens.truncate(idx);
    }

    let kinds: Vec<T> = tokens.iter().map(|t| t.kind).collect();
    let tok = |i: usize| &tokens[i];
    let l = line_idx;
    let unknown = || {
        RunError::new(
            ErrorKind::UnknownStatement {
                text: text.trim().to_owned(),
            },
            SourcePos::at(l, 0),
        )
    };

    match kinds.as_slice() {
        [T::Print, T::Str, T::Semicolon] => Line::Simple(StmtKind::PrintLiteral {
            text: tok(1).string_contents().to_owned(),
        }),
        [T::Print, T::Str, T::Plus, value, T::Semicolon] if value.is_operand() => {
            simple(operand(l, tok(3)).map(|operand| StmtKind::PrintConcat {
                text: tok(1).string_contents().to_owned(),
                operand,
            }))
        }
        [T::Var, T::Ident, T::Eq, value, T::Semicolon] if value.is_operand() => {
            simple(operand(l, tok(3)).map(|value| StmtKind::VarDecl {
                name: tok(1).text.to_owned(),
                value,
            }))
        }
        [T::Ident, T::Eq, lhs, T::Plus, rhs, T::Semicolon] if lhs.is_operand() && rhs.is_operand() => {
            simple(operand(l, tok(2)).and_then(|lhs| {
                Ok(StmtKind::Assign {
                    dest: var_ref(l, tok(0)),
                    lhs,
                    rhs: operand(l, tok(4))?,
                })
            }))
        }
        [T::While, T::Ident, T::Lt, T::Int, T::LBrace] => header(literal(l, tok(3)).map(|bound| {
            Header::While {
                guard: var_ref(l, tok(1)),
                bound,
            }
        })),
        [T::If, T::Ident, op, T::Int, T::LBrace] => match compare_op(*op) {
            Some(op) => header(literal(l, tok(3)).map(|literal| Header::If {
                guard: var_ref(l, tok(1)),
                op,
                literal,
            })),
            None => Line::Header(Header::Opaque(unknown())),
        },
        [T::Func, rest @ ..] => {
            let name = match rest.first() {
                Some(T::Ident) => Some(tok(1).text.to_owned()),
                _ => None,
            };
            let err = RunError::new(ErrorKind::UnsupportedFunction { name }, pos(l, tok(0)));
            if rest.last() == Some(&T::LBrace) {
                Line::Header(Header::Opaque(err))
            } else {
                invalid(err)
            }
        }
        _ => match (kinds.first(), kinds.last()) {
            (_, Some(T::LBrace)) => Line::Header(Header::Opaque(unknown())),
            (Some(T::RBrace), _) | (_, Some(T::Semicolon)) => invalid(unknown()),
            _ => {
                let end = text.trim_end().chars().count();
                invalid(RunError::new(
                    ErrorKind::MissingSemicolonOrBadSyntax,
                    SourcePos::at(l, end),
                ))
            }
        },
    }
}

#[cfg(test)]
mod tests;
