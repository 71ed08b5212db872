//! The `run` command.

use std::io::{self, Write};
use std::path::Path;

use cruck_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use cruck_eval::RunOutcome;

use super::read_source;
use crate::config::CliConfig;
use crate::worker::RunWorker;

/// Write the outcome of running `source`: output lines to `out`, or a
/// rendered diagnostic to `err`. Returns whether the run succeeded.
///
/// Writing output stops at the first failed write, which is returned.
pub fn report_outcome<O: Write, E: Write>(
    outcome: &RunOutcome,
    source: &str,
    path: &str,
    config: &CliConfig,
    err_is_tty: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    match outcome {
        RunOutcome::Output(lines) => {
            for line in lines {
                writeln!(out, "{line}")?;
            }
            out.flush()?;
            Ok(true)
        }
        RunOutcome::Error(run_error) => {
            let mut emitter = TerminalEmitter::with_color_mode(&mut *err, config.color, err_is_tty)
                .with_source(source)
                .with_file_path(path);
            emitter.emit(&run_error.to_diagnostic());
            emitter.flush();
            Ok(false)
        }
    }
}

/// Run a `.cr` file on the worker thread; exits with status 1 on failure.
pub fn run_file(path: &str, config: &CliConfig) {
    let source = match read_source(Path::new(path)) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let worker = match RunWorker::spawn(config.run) {
        Ok(worker) => worker,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let outcome = match worker.request(source.as_str()) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let stderr = io::stderr();
    let is_tty = io::IsTerminal::is_terminal(&stderr);
    let reported = report_outcome(
        &outcome,
        &source,
        path,
        config,
        is_tty,
        &mut io::stdout().lock(),
        &mut stderr.lock(),
    );
    match reported {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: cannot write output: {e}");
            std::process::exit(1);
        }
    }
}
