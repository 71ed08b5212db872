//! Cruck Playground WASM Bindings
//!
//! Exposes the interpreter to JavaScript. The page's editor passes the
//! source text and renders the JSON answer, which has the same shape as
//! the `cruck serve` protocol:
//!
//! - `{"kind":"output","lines":[...]}`
//! - `{"kind":"error","message":"...","line":0,"col":0}` (0-indexed)
//!
//! Browsers run everything on one thread, so the step budget is the only
//! thing standing between a non-advancing loop and a frozen tab.

use cruck_eval::{run, ExecLimits, RunConfig, RunOutcome};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Import console.log from JavaScript
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Result of a run, serialized as JSON for JavaScript.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum RunResponse {
    Output { lines: Vec<String> },
    Error { message: String, line: u32, col: u32 },
}

impl From<RunOutcome> for RunResponse {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Output(lines) => RunResponse::Output { lines },
            RunOutcome::Error(err) => RunResponse::Error {
                message: err.message(),
                line: err.pos.line,
                col: err.pos.col,
            },
        }
    }
}

/// Initialize the WASM module (called once on load).
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook to log to console
    std::panic::set_hook(Box::new(console_error_panic_hook));
}

fn console_error_panic_hook(info: &std::panic::PanicHookInfo) {
    log(&info.to_string());
}

fn encode(outcome: RunOutcome) -> String {
    serde_json::to_string(&RunResponse::from(outcome)).unwrap_or_else(|e| {
        format!(r#"{{"kind":"error","message":"serialization error: {e}","line":0,"col":0}}"#)
    })
}

/// Run Cruck source with the default step budget and return the JSON answer.
#[wasm_bindgen]
pub fn run_cruck(source: &str) -> String {
    encode(run(source, &RunConfig::default()))
}

/// Run Cruck source with an explicit step budget (0 disables it).
#[wasm_bindgen]
pub fn run_cruck_with_steps(source: &str, max_steps: u32) -> String {
    let limit = (max_steps > 0).then_some(u64::from(max_steps));
    let config = RunConfig {
        limits: ExecLimits::default().with_max_steps(limit),
        ..RunConfig::default()
    };
    encode(run(source, &config))
}

/// Get version information.
#[wasm_bindgen]
pub fn version() -> String {
    format!("Cruck {}", env!("CARGO_PKG_VERSION"))
}
