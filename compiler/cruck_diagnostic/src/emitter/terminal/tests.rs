#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::ErrorCode;
use cruck_ir::SourcePos;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message("undeclared variable `v`")
        .with_label(SourcePos::new(1, 17), "not declared")
        .with_note("variables must be declared with `var`")
        .with_suggestion("declare it first: `var v = 0;`")
}

fn render(diag: &Diagnostic, source: Option<&str>, mode: ColorMode) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
        if let Some(src) = source {
            emitter = emitter.with_source(src).with_file_path("demo.cr");
        }
        emitter.emit(diag);
        emitter.flush();
    }
    String::from_utf8(output).unwrap()
}

// Fallback (no source) tests

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(&sample_diagnostic(), None, ColorMode::Never);
    assert!(text.contains("error"));
    assert!(text.contains("[E2001]"));
    assert!(text.contains("undeclared variable `v`"));
    assert!(text.contains("--> 2:18: not declared"));
    assert!(text.contains("note:"));
    assert!(text.contains("help:"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(&sample_diagnostic(), None, ColorMode::Always);
    assert!(text.contains("\x1b["));
    assert!(text.contains("E2001"));
}

#[test]
fn test_emit_all() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);

    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E1002).with_message("error 1"),
        Diagnostic::error(ErrorCode::E1003).with_message("error 2"),
    ];

    emitter.emit_all(&diagnostics);
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("error 1"));
    assert!(text.contains("error 2"));
}

// Snippet rendering tests

#[test]
fn test_snippet_single_line() {
    let source = "func main() {\n    print \"v=\" + v;\n}";
    let text = render(&sample_diagnostic(), Some(source), ColorMode::Never);

    assert!(
        text.contains("--> demo.cr:2:18"),
        "Expected location header, got:\n{text}"
    );
    assert!(
        text.contains("2 |     print \"v=\" + v;"),
        "Expected source line, got:\n{text}"
    );
    // Caret under `v` (column 17, after the "  | " gutter)
    let caret_line = text.lines().find(|l| l.contains('^')).unwrap();
    assert_eq!(caret_line.find('^'), Some("  | ".len() + 17));
    assert!(caret_line.ends_with("^ not declared"));
}

#[test]
fn test_snippet_column_past_end() {
    let source = "print \"a\"";
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("missing semicolon or invalid syntax")
        .with_label(SourcePos::new(0, 9), "expected `;`");
    let text = render(&diag, Some(source), ColorMode::Never);
    let caret_line = text.lines().find(|l| l.contains('^')).unwrap();
    assert_eq!(caret_line.find('^'), Some("  | ".len() + 9));
}

#[test]
fn test_snippet_line_out_of_range_falls_back() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("missing closing brace")
        .with_label(SourcePos::new(7, 0), "expected `}` before here");
    let text = render(&diag, Some("one line"), ColorMode::Never);
    assert!(text.contains("--> demo.cr:8:1: expected `}` before here"));
}

#[test]
fn test_snippet_gutter_width_two_digits() {
    let lines: Vec<String> = (0..12).map(|i| format!("var x{i} = {i};")).collect();
    let source = lines.join("\n");
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_message("unknown statement")
        .with_label(SourcePos::new(11, 0), "not a statement");
    let text = render(&diag, Some(&source), ColorMode::Never);
    assert!(text.contains("12 | var x11 = 11;"), "got:\n{text}");
    assert!(text.contains("   |"), "got:\n{text}");
}

// ColorMode tests

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::parse("sometimes"), None);
}

#[test]
fn test_digit_count() {
    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(9), 1);
    assert_eq!(digit_count(10), 2);
    assert_eq!(digit_count(999), 3);
    assert_eq!(digit_count(1000), 4);
}
