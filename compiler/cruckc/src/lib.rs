//! Cruck driver.
//!
//! Hosts the interpreter for the outside world: the `cruck` binary, the
//! JSON protocol spoken by editors, and the worker thread that runs
//! programs in isolation.
//!
//! ```text
//! host ──Request──► RunWorker thread ──cruck_eval::run──► RunOutcome ──Response──► host
//! ```

use std::sync::Once;

pub mod commands;
pub mod config;
pub mod protocol;
pub mod worker;

pub use config::{CliConfig, ConfigError};
pub use protocol::{Request, Response};
pub use worker::{RunWorker, WorkerError};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber once per process.
///
/// Nothing is installed unless `RUST_LOG` is set. With `CRUCK_LOG_TREE`
/// set, spans are rendered as an indented tree instead of flat lines.
/// Logs always go to stderr; stdout carries program output and protocol
/// responses.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();

        if std::env::var_os("CRUCK_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
