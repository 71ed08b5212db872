//! Comparison operators.

use std::fmt;

/// Comparison operator of an `if` guard.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    Eq,
    NotEq,
    GtEq,
    LtEq,
    Gt,
    Lt,
}

impl CompareOp {
    /// Evaluate `lhs <op> rhs` with native signed-integer semantics.
    #[inline]
    pub fn apply(self, lhs: i64, rhs: i64) -> bool {
        match self {
            CompareOp::Eq => lhs == rhs,
            CompareOp::NotEq => lhs != rhs,
            CompareOp::GtEq => lhs >= rhs,
            CompareOp::LtEq => lhs <= rhs,
            CompareOp::Gt => lhs > rhs,
            CompareOp::Lt => lhs < rhs,
        }
    }

    /// Source spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
            CompareOp::GtEq => ">=",
            CompareOp::LtEq => "<=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
