//! Step and wall-clock limits.
//!
//! Every executed statement and every `while` guard evaluation costs one
//! step. A loop whose guard never advances therefore ends with
//! `ResourceExceeded` instead of hanging the worker.

use std::time::{Duration, Instant};

use cruck_diagnostic::{ErrorKind, ResourceLimit, RunError};
use cruck_ir::SourcePos;

/// Default step ceiling.
pub const DEFAULT_MAX_STEPS: u64 = 10_000_000;

/// The clock is read once per this many steps.
const CLOCK_INTERVAL: u64 = 1024;

/// Limits applied to one run. `None` disables a limit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExecLimits {
    pub max_steps: Option<u64>,
    pub timeout: Option<Duration>,
}

impl Default for ExecLimits {
    fn default() -> Self {
        ExecLimits {
            max_steps: Some(DEFAULT_MAX_STEPS),
            timeout: None,
        }
    }
}

impl ExecLimits {
    /// No limits at all: a non-advancing loop never ends.
    pub const fn unbounded() -> Self {
        ExecLimits {
            max_steps: None,
            timeout: None,
        }
    }

    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Mutable budget state of a running program.
#[derive(Debug)]
pub struct Budget {
    steps: u64,
    max_steps: Option<u64>,
    /// Only set when a timeout is configured, so runs without one never
    /// touch the clock (unavailable on `wasm32-unknown-unknown`).
    deadline: Option<(Instant, u64)>,
}

impl Budget {
    pub fn new(limits: ExecLimits) -> Self {
        let deadline = limits.timeout.map(|timeout| {
            let limit_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
            (Instant::now() + timeout, limit_ms)
        });
        Budget {
            steps: 0,
            max_steps: limits.max_steps,
            deadline,
        }
    }

    /// Steps consumed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Consume one step for the statement at `pos`.
    #[inline]
    pub fn charge(&mut self, pos: SourcePos) -> Result<(), RunError> {
        self.steps = self.steps.saturating_add(1);

        if let Some(limit) = self.max_steps {
            if self.steps > limit {
                return Err(RunError::new(
                    ErrorKind::ResourceExceeded(ResourceLimit::Steps { limit }),
                    pos,
                ));
            }
        }

        if let Some((deadline, limit_ms)) = self.deadline {
            if self.steps % CLOCK_INTERVAL == 0 && Instant::now() >= deadline {
                return Err(RunError::new(
                    ErrorKind::ResourceExceeded(ResourceLimit::Time { limit_ms }),
                    pos,
                ));
            }
        }

        Ok(())
    }
}
