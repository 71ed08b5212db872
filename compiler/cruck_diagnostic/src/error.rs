//! The error taxonomy of a run.
//!
//! All kinds are fatal: the first one raised aborts the run and becomes its
//! outcome. Messages never include the position; renderers add it.

use cruck_ir::SourcePos;
use thiserror::Error;

use crate::{Diagnostic, ErrorCode};

/// Which brace rule was violated.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum BraceProblem {
    /// A `}` with no open block to close.
    #[error("unexpected closing brace")]
    UnexpectedClose,
    /// End of source reached with blocks still open.
    #[error("missing closing brace")]
    MissingClose,
}

/// Where an out-of-range integer came from.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum OverflowSource {
    /// A literal too large for a signed 64-bit integer.
    #[error("literal `{0}` does not fit in a 64-bit integer")]
    Literal(String),
    /// An addition whose result does not fit.
    #[error("`{lhs} + {rhs}` does not fit in a 64-bit integer")]
    Addition { lhs: i64, rhs: i64 },
}

/// Which budget a run exhausted.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum ResourceLimit {
    #[error("more than {limit} steps executed")]
    Steps { limit: u64 },
    #[error("run exceeded {limit_ms} ms")]
    Time { limit_ms: u64 },
}

/// The kind of a run failure.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum ErrorKind {
    #[error("{0}")]
    UnbalancedBraces(BraceProblem),
    #[error("the block of `func main()` is never closed")]
    MainUnclosed,
    #[error("no `func main() {{` entry point found")]
    MissingEntryPoint,
    #[error("function{} is not supported: only `func main()` may be declared", quoted(.name.as_deref()))]
    UnsupportedFunction { name: Option<String> },
    #[error("missing semicolon or invalid syntax")]
    MissingSemicolonOrBadSyntax,
    #[error("unknown statement `{text}`")]
    UnknownStatement { text: String },
    #[error("undeclared variable `{name}`")]
    UndeclaredVariable { name: String },
    #[error("integer overflow: {0}")]
    IntegerOverflow(OverflowSource),
    #[error("resource limit exceeded: {0}")]
    ResourceExceeded(ResourceLimit),
}

fn quoted(name: Option<&str>) -> String {
    name.map(|n| format!(" `{n}`")).unwrap_or_default()
}

impl ErrorKind {
    /// Stable code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            ErrorKind::UnbalancedBraces(_) => ErrorCode::E0001,
            ErrorKind::MainUnclosed => ErrorCode::E0002,
            ErrorKind::MissingEntryPoint => ErrorCode::E0003,
            ErrorKind::UnsupportedFunction { .. } => ErrorCode::E1001,
            ErrorKind::MissingSemicolonOrBadSyntax => ErrorCode::E1002,
            ErrorKind::UnknownStatement { .. } => ErrorCode::E1003,
            ErrorKind::UndeclaredVariable { .. } => ErrorCode::E2001,
            ErrorKind::IntegerOverflow(_) => ErrorCode::E2002,
            ErrorKind::ResourceExceeded(_) => ErrorCode::E3001,
        }
    }

    /// Short label placed under the offending column.
    fn label(&self) -> &'static str {
        match self {
            ErrorKind::UnbalancedBraces(BraceProblem::UnexpectedClose) => "nothing to close here",
            ErrorKind::UnbalancedBraces(BraceProblem::MissingClose) => "expected `}` before here",
            ErrorKind::MainUnclosed => "this block is never closed",
            ErrorKind::MissingEntryPoint => "expected `func main() {`",
            ErrorKind::UnsupportedFunction { .. } => "function declared here",
            ErrorKind::MissingSemicolonOrBadSyntax => "expected `;`",
            ErrorKind::UnknownStatement { .. } => "not a statement",
            ErrorKind::UndeclaredVariable { .. } => "not declared",
            ErrorKind::IntegerOverflow(_) => "overflows here",
            ErrorKind::ResourceExceeded(_) => "budget ran out here",
        }
    }
}

/// A positioned run failure.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{kind} at {pos}")]
pub struct RunError {
    pub kind: ErrorKind,
    pub pos: SourcePos,
}

impl RunError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, pos: SourcePos) -> Self {
        RunError { kind, pos }
    }

    /// Stable code of the error kind.
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// The message without position, as sent over the wire.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Build a rendering-ready diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .with_label(self.pos, self.kind.label());
        match &self.kind {
            ErrorKind::UndeclaredVariable { name } => {
                diag.with_suggestion(format!("declare it first: `var {name} = 0;`"))
            }
            ErrorKind::ResourceExceeded(ResourceLimit::Steps { .. }) => diag
                .with_note("a `while` guard that is never advanced loops forever")
                .with_suggestion("raise the budget with `--max-steps=N` if the program is correct"),
            ErrorKind::MissingSemicolonOrBadSyntax => diag.with_suggestion("add `;` at the end of the line"),
            _ => diag,
        }
    }
}
