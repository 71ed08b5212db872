//! Cruck CLI

use std::io;

use cruckc::commands::{explain_error, lex_file, run_file, serve};
use cruckc::{init_tracing, CliConfig, RunWorker};

/// Load configuration from the environment and `flags`, exiting on error.
fn load_config(flags: &[String]) -> (CliConfig, Vec<String>) {
    let mut config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    match config.apply_args(flags) {
        Ok(positional) => {
            let positional = positional.into_iter().map(str::to_owned).collect();
            (config, positional)
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Run `cruck help` for the list of options.");
            std::process::exit(1);
        }
    }
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let (config, positional) = load_config(&args[2..]);
            let Some(path) = positional.first() else {
                eprintln!("error: missing file path");
                eprintln!("Usage: cruck run <file.cr> [options]");
                std::process::exit(1);
            };
            run_file(path, &config);
        }
        "serve" => {
            let (config, _) = load_config(&args[2..]);
            let worker = match RunWorker::spawn(config.run) {
                Ok(worker) => worker,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            };
            if let Err(e) = serve(io::stdin().lock(), &mut io::stdout().lock(), &worker) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: cruck lex <file.cr>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: cruck explain <ERROR_CODE>");
                eprintln!("Example: cruck explain E2001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Cruck {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare `.cr` path runs it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("cr"))
            {
                let (config, _) = load_config(&args[2..]);
                run_file(command, &config);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Cruck interpreter");
    println!();
    println!("Usage: cruck <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.cr>        Run a Cruck program");
    println!("  serve                Answer JSON run requests on stdin, one per line");
    println!("  lex <file.cr>        Tokenize and display tokens");
    println!("  explain <code>       Explain an error code (e.g., E2001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run/serve options:");
    println!("  --max-steps=<n>      Abort after n executed steps (default 10000000)");
    println!("  --no-step-limit      Never abort on step count");
    println!("  --timeout-ms=<n>     Abort after n milliseconds");
    println!("  --require-main       Reject programs without `func main() {{`");
    println!("  --color=<mode>       Diagnostic colors: auto, always, never");
    println!();
    println!("Environment:");
    println!("  CRUCK_MAX_STEPS      Step budget, or `none`");
    println!("  CRUCK_TIMEOUT_MS     Time budget in milliseconds");
    println!("  CRUCK_REQUIRE_MAIN   Same as --require-main when `true`");
    println!("  RUST_LOG             Enable logging (e.g. `cruck_eval=debug`)");
    println!("  CRUCK_LOG_TREE       Render logs as a span tree");
    println!();
    println!("Examples:");
    println!("  cruck run hello.cr");
    println!("  cruck hello.cr --max-steps=1000");
    println!("  echo '{{\"kind\":\"run\",\"sourceText\":\"print \\\"hi\\\";\"}}' | cruck serve");
    println!("  cruck explain E1002");
}
