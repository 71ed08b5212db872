//! Diagnostics rendered by `cruck run`.

use std::io::{self, Write};

use cruck_diagnostic::emitter::ColorMode;
use cruck_eval::run;
use cruckc::commands::{read_source, report_outcome};
use cruckc::CliConfig;

use super::fixture;

fn report(source: &str) -> (bool, String, String) {
    let config = CliConfig {
        color: ColorMode::Never,
        ..CliConfig::default()
    };
    let outcome = run(source, &config.run);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let ok = report_outcome(
        &outcome,
        source,
        "prog.cr",
        &config,
        false,
        &mut out,
        &mut err,
    )
    .unwrap();
    (
        ok,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn output_goes_to_stdout() {
    let source = read_source(&fixture("count.cr")).unwrap();
    let (ok, out, err) = report(&source);
    assert!(ok);
    assert_eq!(out, "i=0\ni=1\ni=2\n");
    assert!(err.is_empty());
}

#[test]
fn error_renders_snippet_with_one_based_location() {
    let source = read_source(&fixture("undeclared.cr")).unwrap();
    let (ok, out, err) = report(&source);
    assert!(!ok);
    assert!(out.is_empty(), "output must be discarded on error");
    assert!(err.contains("error[E2001]: undeclared variable `v`"), "{err}");
    assert!(err.contains("--> prog.cr:2:18"), "{err}");
    assert!(err.contains("2 |     print \"v=\" + v;"), "{err}");
    assert!(err.contains("= help: declare it first"), "{err}");
}

#[test]
fn missing_semicolon_points_past_the_line() {
    let (ok, _, err) = report("print \"a\"");
    assert!(!ok);
    assert!(err.contains("[E1002]"), "{err}");
    assert!(err.contains("--> prog.cr:1:10"), "{err}");
}

/// Accepts `capacity` lines, then fails like a closed pipe.
struct ClosedAfter {
    capacity: usize,
    written: Vec<u8>,
}

impl Write for ClosedAfter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let lines = self.written.iter().filter(|&&b| b == b'\n').count();
        if lines >= self.capacity {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn closed_stdout_is_reported_not_swallowed() {
    let source = read_source(&fixture("count.cr")).unwrap();
    let config = CliConfig::default();
    let outcome = run(&source, &config.run);
    let mut out = ClosedAfter {
        capacity: 1,
        written: Vec::new(),
    };
    let mut err = Vec::new();

    let result = report_outcome(&outcome, &source, "prog.cr", &config, false, &mut out, &mut err);

    let failure = result.unwrap_err();
    assert_eq!(failure.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(String::from_utf8(out.written).unwrap(), "i=0\n");
    assert!(err.is_empty());
}
