//! Statement tree produced by the parser and walked by the executor.

use cruck_diagnostic::RunError;
use cruck_ir::{CompareOp, SourcePos};

/// A variable reference with the position of its name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarRef {
    pub name: String,
    pub pos: SourcePos,
}

/// A literal or variable; variables are resolved at evaluation time.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operand {
    Literal { value: i64, pos: SourcePos },
    Var(VarRef),
}

impl Operand {
    pub fn pos(&self) -> SourcePos {
        match self {
            Operand::Literal { pos, .. } => *pos,
            Operand::Var(var) => var.pos,
        }
    }
}

/// A sequence of statements.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Block { stmts }
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }
}

/// Frees nested blocks from a work list, so dropping a deeply nested tree
/// uses constant stack.
impl Drop for Block {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.stmts);
        while let Some(stmt) = pending.pop() {
            match stmt.kind {
                StmtKind::While { mut body, .. } => pending.append(&mut body.stmts),
                StmtKind::If {
                    mut then_block,
                    else_block,
                    ..
                } => {
                    pending.append(&mut then_block.stmts);
                    if let Some(mut else_block) = else_block {
                        pending.append(&mut else_block.stmts);
                    }
                }
                _ => {}
            }
        }
    }
}

/// One statement and the absolute line it starts on.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: u32,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: usize) -> Self {
        Stmt {
            kind,
            line: u32::try_from(line).unwrap_or(u32::MAX),
        }
    }

    /// Column 0 of the statement's line.
    pub fn pos(&self) -> SourcePos {
        SourcePos::new(self.line, 0)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    Blank,
    Comment,
    /// `print "text";`
    PrintLiteral { text: String },
    /// `print "text" + operand;`
    PrintConcat { text: String, operand: Operand },
    /// `var name = operand;`
    VarDecl { name: String, value: Operand },
    /// `dest = lhs + rhs;`
    Assign {
        dest: VarRef,
        lhs: Operand,
        rhs: Operand,
    },
    /// `while guard < bound { body }`
    While {
        guard: VarRef,
        bound: i64,
        body: Block,
    },
    /// `if guard op literal { then } else { otherwise }`
    If {
        guard: VarRef,
        op: CompareOp,
        literal: i64,
        then_block: Block,
        else_block: Option<Block>,
    },
    /// A line that failed to parse; raising is deferred to execution.
    Invalid(Box<RunError>),
}


#[cfg(test)]
mod tests;
