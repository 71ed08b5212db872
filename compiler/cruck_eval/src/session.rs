//! One run from source text to outcome.

use cruck_diagnostic::RunError;
use cruck_ir::SourceText;
use cruck_parse::{parse_program, EntryPolicy};
use tracing::debug;

use crate::budget::ExecLimits;
use crate::exec::Executor;

/// Settings for a run.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct RunConfig {
    pub entry: EntryPolicy,
    pub limits: ExecLimits,
}

/// Result of a run: all output lines, or the first error. Never both.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum RunOutcome {
    Output(Vec<String>),
    Error(RunError),
}

impl RunOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, RunOutcome::Output(_))
    }

    pub fn output(&self) -> Option<&[String]> {
        match self {
            RunOutcome::Output(lines) => Some(lines),
            RunOutcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&RunError> {
        match self {
            RunOutcome::Output(_) => None,
            RunOutcome::Error(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<Vec<String>, RunError> {
        match self {
            RunOutcome::Output(lines) => Ok(lines),
            RunOutcome::Error(err) => Err(err),
        }
    }
}

impl From<Result<Vec<String>, RunError>> for RunOutcome {
    fn from(result: Result<Vec<String>, RunError>) -> Self {
        match result {
            Ok(lines) => RunOutcome::Output(lines),
            Err(err) => RunOutcome::Error(err),
        }
    }
}

fn execute(source: &str, config: &RunConfig) -> Result<Vec<String>, RunError> {
    let text = SourceText::new(source);
    let program = parse_program(&text, config.entry)?;

    let mut executor = Executor::new(config.limits);
    executor.exec_block(&program.body)?;
    debug!(
        steps = executor.steps(),
        lines = executor.output().len(),
        variables = executor.env().len(),
        "run finished"
    );
    Ok(executor.into_output())
}

/// Run `source` under `config`.
///
/// All state (environment, output buffer, budget) is created here and
/// dropped on return, so runs are independent.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn run(source: &str, config: &RunConfig) -> RunOutcome {
    let outcome = RunOutcome::from(execute(source, config));
    if let RunOutcome::Error(err) = &outcome {
        debug!(code = %err.code(), pos = %err.pos, "run failed: {}", err.kind);
    }
    outcome
}

/// Run `source` with the default configuration.
pub fn run_source(source: &str) -> RunOutcome {
    run(source, &RunConfig::default())
}
