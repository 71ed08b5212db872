//! Statement execution.
//!
//! Walks the statement tree in order, appending to the output buffer and
//! mutating the environment. The first error aborts the walk.

use cruck_diagnostic::{ErrorKind, OverflowSource, RunError};
use cruck_parse::{Block, Stmt, StmtKind};
use cruck_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::budget::{Budget, ExecLimits};
use crate::{eval_operand, Environment};

/// Interpreter state for one run.
pub struct Executor {
    env: Environment,
    output: Vec<String>,
    budget: Budget,
}

impl Executor {
    pub fn new(limits: ExecLimits) -> Self {
        Executor {
            env: Environment::new(),
            output: Vec::new(),
            budget: Budget::new(limits),
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn steps(&self) -> u64 {
        self.budget.steps()
    }

    /// Consume the executor, returning the collected output lines.
    pub fn into_output(self) -> Vec<String> {
        self.output
    }

    /// Execute every statement of `block` in order.
    pub fn exec_block(&mut self, block: &Block) -> Result<(), RunError> {
        for stmt in &block.stmts {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    fn exec_nested(&mut self, block: &Block) -> Result<(), RunError> {
        ensure_sufficient_stack(|| self.exec_block(block))
    }

    /// Execute a single statement.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> Result<(), RunError> {
        self.budget.charge(stmt.pos())?;

        match &stmt.kind {
            StmtKind::Blank | StmtKind::Comment => Ok(()),
            StmtKind::PrintLiteral { text } => {
                self.output.push(text.clone());
                Ok(())
            }
            StmtKind::PrintConcat { text, operand } => {
                let value = eval_operand(operand, &self.env)?;
                self.output.push(format!("{text}{value}"));
                Ok(())
            }
            StmtKind::VarDecl { name, value } => {
                let value = eval_operand(value, &self.env)?;
                self.env.define(name, value);
                Ok(())
            }
            StmtKind::Assign { dest, lhs, rhs } => {
                let lhs = eval_operand(lhs, &self.env)?;
                let rhs = eval_operand(rhs, &self.env)?;
                let sum = lhs.checked_add(rhs).ok_or_else(|| {
                    RunError::new(
                        ErrorKind::IntegerOverflow(OverflowSource::Addition { lhs, rhs }),
                        dest.pos,
                    )
                })?;
                self.env.define(&dest.name, sum);
                Ok(())
            }
            StmtKind::While { guard, bound, body } => {
                let mut iterations = 0u64;
                loop {
                    self.budget.charge(stmt.pos())?;
                    if self.env.lookup(guard)? >= *bound {
                        break;
                    }
                    self.exec_nested(body)?;
                    iterations += 1;
                }
                trace!(line = stmt.line, iterations, "while finished");
                Ok(())
            }
            StmtKind::If {
                guard,
                op,
                literal,
                then_block,
                else_block,
            } => {
                let value = self.env.lookup(guard)?;
                if op.apply(value, *literal) {
                    self.exec_nested(then_block)
                } else if let Some(else_block) = else_block {
                    self.exec_nested(else_block)
                } else {
                    Ok(())
                }
            }
            StmtKind::Invalid(err) => Err((**err).clone()),
        }
    }
}
