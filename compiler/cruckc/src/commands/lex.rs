//! The `lex` command: dump each line's tokens with their positions.

use std::io::{self, Write};
use std::path::Path;

use cruck_ir::{SourcePos, SourceText};
use cruck_lexer::lex_line;

use super::read_source;

/// Write one row per token: `line:col  kind  text` (1-based positions).
pub fn dump_tokens<W: Write>(source: &str, out: &mut W) -> io::Result<()> {
    let text = SourceText::new(source);
    for (idx, line) in text.lines().iter().enumerate() {
        for token in lex_line(line) {
            let pos = SourcePos::at(idx, token.col as usize);
            writeln!(out, "{:<8} {:<10} {}", pos.to_string(), token.kind, token.text)?;
        }
    }
    Ok(())
}

/// Lex a file and print its tokens.
pub fn lex_file(path: &str) {
    let source = match read_source(Path::new(path)) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    println!("Tokens for '{path}':");
    if let Err(e) = dump_tokens(&source, &mut io::stdout().lock()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
