//! Execution for Cruck.
//!
//! [`run`] takes a source text through brace validation, entry location,
//! parsing and execution, and returns one [`RunOutcome`]. Each run owns its
//! environment, output buffer and budget; nothing is shared between runs.

mod budget;
mod environment;
mod exec;
mod operand;
mod session;

pub use budget::{Budget, ExecLimits, DEFAULT_MAX_STEPS};
pub use environment::Environment;
pub use exec::Executor;
pub use operand::eval_operand;
pub use session::{run, run_source, RunConfig, RunOutcome};

pub use cruck_diagnostic::{ErrorCode, ErrorKind, RunError};
pub use cruck_ir::SourcePos;
pub use cruck_parse::EntryPolicy;
