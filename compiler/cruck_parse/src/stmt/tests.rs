use super::*;
use pretty_assertions::assert_eq;

fn var(name: &str, line: u32, col: u32) -> VarRef {
    VarRef {
        name: name.to_owned(),
        pos: SourcePos::new(line, col),
    }
}

fn lit(value: i64, line: u32, col: u32) -> Operand {
    Operand::Literal {
        value,
        pos: SourcePos::new(line, col),
    }
}

fn invalid_kind(line: Line) -> (ErrorKind, SourcePos) {
    match line {
        Line::Simple(StmtKind::Invalid(err)) => (err.kind, err.pos),
        Line::Header(Header::Opaque(err)) => (err.kind, err.pos),
        other => panic!("expected an error, got {other:?}"),
    }
}

fn is_opaque(line: &Line) -> bool {
    matches!(line, Line::Header(Header::Opaque(_)))
}

#[test]
fn test_blank_and_comment() {
    assert_eq!(classify("", 0), Line::Simple(StmtKind::Blank));
    assert_eq!(classify("    \t", 0), Line::Simple(StmtKind::Blank));
    assert_eq!(classify("  // note", 0), Line::Simple(StmtKind::Comment));
}

#[test]
fn test_print_literal() {
    assert_eq!(
        classify("print \"Hello\";", 0),
        Line::Simple(StmtKind::PrintLiteral {
            text: "Hello".to_owned()
        })
    );
    assert_eq!(
        classify("print \"\"; // empty", 0),
        Line::Simple(StmtKind::PrintLiteral {
            text: String::new()
        })
    );
}

#[test]
fn test_print_concat_positions() {
    assert_eq!(
        classify("    print \"v=\" + v;", 3),
        Line::Simple(StmtKind::PrintConcat {
            text: "v=".to_owned(),
            operand: Operand::Var(var("v", 3, 17)),
        })
    );
    assert_eq!(
        classify("print \"n\" + 42;", 0),
        Line::Simple(StmtKind::PrintConcat {
            text: "n".to_owned(),
            operand: lit(42, 0, 12),
        })
    );
}

#[test]
fn test_var_decl() {
    assert_eq!(
        classify("var i = 0;", 1),
        Line::Simple(StmtKind::VarDecl {
            name: "i".to_owned(),
            value: lit(0, 1, 8),
        })
    );
    assert_eq!(
        classify("var j = i;", 1),
        Line::Simple(StmtKind::VarDecl {
            name: "j".to_owned(),
            value: Operand::Var(var("i", 1, 8)),
        })
    );
}

#[test]
fn test_assign() {
    assert_eq!(
        classify("  i = i + 1;", 4),
        Line::Simple(StmtKind::Assign {
            dest: var("i", 4, 2),
            lhs: Operand::Var(var("i", 4, 6)),
            rhs: lit(1, 4, 10),
        })
    );
}

#[test]
fn test_while_header() {
    assert_eq!(
        classify("while i < 3 {", 2),
        Line::Header(Header::While {
            guard: var("i", 2, 6),
            bound: 3,
        })
    );
}

#[test]
fn test_if_header_operators() {
    for (src, op) in [
        ("if x == 5 {", CompareOp::Eq),
        ("if x != 5 {", CompareOp::NotEq),
        ("if x >= 5 {", CompareOp::GtEq),
        ("if x <= 5 {", CompareOp::LtEq),
        ("if x > 5 {", CompareOp::Gt),
        ("if x < 5 {", CompareOp::Lt),
    ] {
        assert_eq!(
            classify(src, 0),
            Line::Header(Header::If {
                guard: var("x", 0, 3),
                op,
                literal: 5,
            }),
            "{src}"
        );
    }
}

#[test]
fn test_if_with_assignment_operator_is_unknown() {
    let line = classify("if x = 5 {", 0);
    assert!(is_opaque(&line));
    let (kind, pos) = invalid_kind(line);
    assert_eq!(
        kind,
        ErrorKind::UnknownStatement {
            text: "if x = 5 {".to_owned()
        }
    );
    assert_eq!(pos, SourcePos::new(0, 0));
}

#[test]
fn test_func_is_unsupported() {
    let line = classify("  func helper() {", 5);
    assert!(is_opaque(&line));
    assert_eq!(
        invalid_kind(line),
        (
            ErrorKind::UnsupportedFunction {
                name: Some("helper".to_owned())
            },
            SourcePos::new(5, 2)
        )
    );

    let line = classify("func", 0);
    assert!(!is_opaque(&line));
    assert_eq!(
        invalid_kind(line).0,
        ErrorKind::UnsupportedFunction { name: None }
    );
}

#[test]
fn test_missing_semicolon_at_line_end() {
    assert_eq!(
        invalid_kind(classify("    print \"a\"   ", 1)),
        (ErrorKind::MissingSemicolonOrBadSyntax, SourcePos::new(1, 13))
    );
    assert_eq!(
        invalid_kind(classify("var x = 1 // no terminator", 0)),
        (ErrorKind::MissingSemicolonOrBadSyntax, SourcePos::new(0, 26))
    );
}

#[test]
fn test_missing_semicolon_counts_trailing_comment() {
    assert_eq!(
        invalid_kind(classify("print \"x\" // c", 0)),
        (ErrorKind::MissingSemicolonOrBadSyntax, SourcePos::new(0, 14))
    );
    assert_eq!(
        invalid_kind(classify("print \"é\" // ü  \t", 3)),
        (ErrorKind::MissingSemicolonOrBadSyntax, SourcePos::new(3, 14))
    );
}

#[test]
fn test_unknown_statement() {
    assert_eq!(
        invalid_kind(classify("  x = a * b;", 7)),
        (
            ErrorKind::UnknownStatement {
                text: "x = a * b;".to_owned()
            },
            SourcePos::new(7, 0)
        )
    );
    // Lines starting with `}` are never treated as missing a semicolon.
    assert_eq!(
        invalid_kind(classify("} print", 0)).0,
        ErrorKind::UnknownStatement {
            text: "} print".to_owned()
        }
    );
    assert!(is_opaque(&classify("loop {", 0)));
}

#[test]
fn test_literal_overflow() {
    assert_eq!(
        invalid_kind(classify("var x = 9223372036854775808;", 0)),
        (
            ErrorKind::IntegerOverflow(OverflowSource::Literal(
                "9223372036854775808".to_owned()
            )),
            SourcePos::new(0, 8)
        )
    );
    assert_eq!(
        classify("var x = 9223372036854775807;", 0),
        Line::Simple(StmtKind::VarDecl {
            name: "x".to_owned(),
            value: lit(i64::MAX, 0, 8),
        })
    );
    assert!(is_opaque(&classify("while i < 99999999999999999999 {", 0)));
}
