//! JSON messages exchanged with editors and the `serve` loop.
//!
//! ```text
//! -> {"kind":"run","sourceText":"print \"Hello\";"}
//! <- {"kind":"output","lines":["Hello"]}
//! <- {"kind":"error","message":"undeclared variable `v`","line":1,"col":17}
//! ```
//!
//! Coordinates are 0-indexed into `sourceText`.

use cruck_diagnostic::RunError;
use cruck_eval::RunOutcome;
use serde::{Deserialize, Serialize};

/// A request from the host.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Request {
    Run {
        #[serde(rename = "sourceText")]
        source_text: String,
    },
}

/// The answer to one request.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Response {
    Output { lines: Vec<String> },
    Error { message: String, line: u32, col: u32 },
}

impl Response {
    /// Response for a request line that could not be decoded.
    pub fn malformed(err: &serde_json::Error) -> Self {
        Response::Error {
            message: format!("malformed request: {err}"),
            line: 0,
            col: 0,
        }
    }

    /// Response for a request the worker could not answer.
    pub fn internal(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
            line: 0,
            col: 0,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

impl From<&RunError> for Response {
    fn from(err: &RunError) -> Self {
        Response::Error {
            message: err.message(),
            line: err.pos.line,
            col: err.pos.col,
        }
    }
}

impl From<RunOutcome> for Response {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Output(lines) => Response::Output { lines },
            RunOutcome::Error(err) => Response::from(&err),
        }
    }
}

/// Decode one request line.
pub fn decode_request(line: &str) -> Result<Request, serde_json::Error> {
    serde_json::from_str(line)
}

/// Encode a response as a single line (no trailing newline).
pub fn encode_response(response: &Response) -> Result<String, serde_json::Error> {
    serde_json::to_string(response)
}
