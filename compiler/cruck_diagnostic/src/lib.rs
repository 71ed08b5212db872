//! Error reporting for the Cruck interpreter.
//!
//! Every failure of a run is one [`RunError`]: an [`ErrorKind`] plus the
//! [`SourcePos`](cruck_ir::SourcePos) it points at. Each kind maps to a
//! stable [`ErrorCode`] for searchability (`cruck explain E2001`).
//!
//! Human-facing output goes through [`Diagnostic`] and the emitters in
//! [`emitter`]; machine-facing output (the JSON protocol) only needs the
//! message and the position.

mod diagnostic;
pub mod emitter;
mod error;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error::{BraceProblem, ErrorKind, OverflowSource, ResourceLimit, RunError};
pub use error_code::ErrorCode;
