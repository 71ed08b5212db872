//! The `explain` command: describe an error code.

use cruck_diagnostic::ErrorCode;

/// Print the explanation for `code_str`, or list the known codes.
pub fn explain_error(code_str: &str) {
    let Some(code) = ErrorCode::parse(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Known codes:");
        for code in ErrorCode::ALL {
            eprintln!("  {code}");
        }
        std::process::exit(1);
    };

    println!("{code}: {}", code.explanation());
}
