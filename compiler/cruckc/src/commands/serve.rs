//! The `serve` command: newline-delimited JSON over stdin/stdout.
//!
//! Each input line is one request and gets exactly one response line.
//! Undecodable lines are answered with an error at (0, 0) and the loop
//! keeps going. Blank lines are skipped.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::protocol::{decode_request, encode_response, Request, Response};
use crate::worker::RunWorker;

/// Answer requests from `input` until it ends.
pub fn serve<R: BufRead, W: Write>(input: R, output: &mut W, worker: &RunWorker) -> io::Result<()> {
    let mut served = 0usize;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match decode_request(&line) {
            Ok(Request::Run { source_text }) => match worker.request(source_text) {
                Ok(outcome) => Response::from(outcome),
                Err(err) => Response::internal(err.to_string()),
            },
            Err(err) => {
                warn!(%err, "malformed request");
                Response::malformed(&err)
            }
        };

        let encoded = encode_response(&response).map_err(io::Error::other)?;
        writeln!(output, "{encoded}")?;
        output.flush()?;
        served += 1;
    }
    debug!(served, "input closed");
    Ok(())
}
