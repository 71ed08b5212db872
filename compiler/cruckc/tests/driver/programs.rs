//! Fixture programs run through the worker.

use cruck_eval::{ErrorKind, RunConfig, RunOutcome, SourcePos};
use cruckc::commands::read_source;
use cruckc::RunWorker;
use pretty_assertions::assert_eq;

use super::fixture;

fn run_fixture(worker: &RunWorker, name: &str) -> RunOutcome {
    let source = read_source(&fixture(name)).unwrap();
    worker.request(source).unwrap()
}

fn output(lines: &[&str]) -> RunOutcome {
    RunOutcome::Output(lines.iter().map(|s| (*s).to_owned()).collect())
}

#[test]
fn fixtures_produce_expected_output() {
    let worker = RunWorker::spawn(RunConfig::default()).unwrap();
    assert_eq!(run_fixture(&worker, "hello.cr"), output(&["Hello"]));
    assert_eq!(
        run_fixture(&worker, "count.cr"),
        output(&["i=0", "i=1", "i=2"])
    );
    assert_eq!(run_fixture(&worker, "branch.cr"), output(&["big", "small"]));
}

#[test]
fn undeclared_fixture_reports_position() {
    let worker = RunWorker::spawn(RunConfig::default()).unwrap();
    let err = run_fixture(&worker, "undeclared.cr").into_result().unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UndeclaredVariable {
            name: "v".to_owned()
        }
    );
    assert_eq!(err.pos, SourcePos::new(1, 17));
}

#[test]
fn runaway_fixture_is_stopped() {
    let worker = RunWorker::spawn(RunConfig::default()).unwrap();
    let err = run_fixture(&worker, "runaway.cr").into_result().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ResourceExceeded(_)));
}

#[test]
fn same_source_same_outcome() {
    let worker = RunWorker::spawn(RunConfig::default()).unwrap();
    for name in ["count.cr", "undeclared.cr"] {
        assert_eq!(run_fixture(&worker, name), run_fixture(&worker, name));
    }
}

#[test]
fn missing_file_is_reported() {
    let err = read_source(&fixture("does-not-exist.cr")).unwrap_err();
    assert!(err.to_string().starts_with("cannot find file"));
}
