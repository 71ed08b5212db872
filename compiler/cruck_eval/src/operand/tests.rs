#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use cruck_diagnostic::ErrorKind;
use cruck_ir::SourcePos;
use cruck_parse::VarRef;

fn var(name: &str, col: u32) -> Operand {
    Operand::Var(VarRef {
        name: name.to_owned(),
        pos: SourcePos::new(2, col),
    })
}

#[test]
fn test_literal() {
    let env = Environment::new();
    let op = Operand::Literal {
        value: -3,
        pos: SourcePos::START,
    };
    assert_eq!(eval_operand(&op, &env), Ok(-3));
}

#[test]
fn test_variable_reads_current_value() {
    let mut env = Environment::new();
    env.define("i", 1);
    let op = var("i", 5);
    assert_eq!(eval_operand(&op, &env), Ok(1));
    env.define("i", 2);
    assert_eq!(eval_operand(&op, &env), Ok(2));
}

#[test]
fn test_undeclared_variable() {
    let err = eval_operand(&var("v", 17), &Environment::new()).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UndeclaredVariable {
            name: "v".to_owned()
        }
    );
    assert_eq!(err.pos, SourcePos::new(2, 17));
}
