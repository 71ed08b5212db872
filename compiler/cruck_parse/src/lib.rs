//! Parsing for Cruck.
//!
//! Three stages, each of which can fail with the run's single error:
//!
//! 1. [`check_braces`]: bracket balance over the whole text. The same scan
//!    pairs every `{` with its `}` ([`BraceMap`]) for the later stages.
//! 2. [`locate_entry`]: the body of `func main() {` (or the whole text).
//! 3. [`parse_block`]: one statement per line, nested blocks captured by
//!    brace depth.
//!
//! Stage 3 never fails. Lines that do not parse become
//! [`StmtKind::Invalid`] and raise their error only when executed.

pub mod ast;
mod block;
mod braces;
mod entry;
mod stmt;

pub use ast::{Block, Operand, Stmt, StmtKind, VarRef};
pub use block::parse_block;
pub use braces::{check_braces, BraceMap};
pub use entry::{locate_entry, EntryBlock, EntryPolicy};

use cruck_diagnostic::RunError;
use cruck_ir::SourceText;
use tracing::debug;

/// A parsed program: the entry block and its statements.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Program {
    pub entry: EntryBlock,
    pub body: Block,
}

/// Run all parsing stages over `source`.
#[tracing::instrument(level = "debug", skip_all, fields(lines = source.len()))]
pub fn parse_program(source: &SourceText<'_>, policy: EntryPolicy) -> Result<Program, RunError> {
    let braces = BraceMap::new(source);
    braces.check()?;
    debug!("braces balanced");

    let entry = entry::locate_entry_with(source, &braces, policy)?;
    debug!(header = ?entry.header, offset = entry.offset, end = entry.end, "entry block located");

    let body = block::parse_block_with(source, &braces, entry.lines());
    debug!(statements = body.len(), "entry block parsed");

    Ok(Program { entry, body })
}
