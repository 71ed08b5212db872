//! Cruck Playground WASI Binary
//!
//! Reads Cruck source from stdin, runs it, prints the output lines to
//! stdout. Designed to run in the browser via @wasmer/wasi.

use std::io::{self, Read};

use cruck_eval::{run_source, RunOutcome};

fn main() {
    // Read source code from stdin
    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("Error reading input: {e}");
        std::process::exit(1);
    }

    match run_source(&source) {
        RunOutcome::Output(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        RunOutcome::Error(err) => {
            eprintln!("error[{}]: {} at {}", err.code(), err.message(), err.pos);
            std::process::exit(1);
        }
    }
}
