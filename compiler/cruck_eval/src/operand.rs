//! Operand evaluation.

use cruck_diagnostic::RunError;
use cruck_parse::Operand;

use crate::Environment;

/// Value of `operand`; variables are read from `env` every time.
#[inline]
pub fn eval_operand(operand: &Operand, env: &Environment) -> Result<i64, RunError> {
    match operand {
        Operand::Literal { value, .. } => Ok(*value),
        Operand::Var(var) => env.lookup(var),
    }
}

#[cfg(test)]
mod tests;
