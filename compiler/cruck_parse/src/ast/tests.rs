#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;
use std::thread;

fn guard() -> VarRef {
    VarRef {
        name: "x".to_owned(),
        pos: SourcePos::new(0, 3),
    }
}

/// `depth` nested blocks, alternating `while` and `if`/`else` headers.
fn nest(depth: usize) -> Block {
    let mut block = Block::new(vec![Stmt::new(
        StmtKind::PrintLiteral {
            text: "deep".to_owned(),
        },
        depth,
    )]);
    for level in (0..depth).rev() {
        let kind = if level % 2 == 0 {
            StmtKind::While {
                guard: guard(),
                bound: 1,
                body: block,
            }
        } else {
            StmtKind::If {
                guard: guard(),
                op: CompareOp::Eq,
                literal: 0,
                then_block: block,
                else_block: Some(Block::default()),
            }
        };
        block = Block::new(vec![Stmt::new(kind, level), Stmt::new(StmtKind::Blank, level)]);
    }
    block
}

#[test]
fn test_operand_positions() {
    let literal = Operand::Literal {
        value: 3,
        pos: SourcePos::new(2, 8),
    };
    assert_eq!(literal.pos(), SourcePos::new(2, 8));
    assert_eq!(Operand::Var(guard()).pos(), SourcePos::new(0, 3));
    assert_eq!(Stmt::new(StmtKind::Blank, 4).pos(), SourcePos::new(4, 0));
}

#[test]
fn test_nested_tree_shape() {
    let block = nest(3);
    assert_eq!(block.len(), 2);
    let StmtKind::While { body, .. } = &block.stmts[0].kind else {
        panic!("expected while");
    };
    assert_eq!(body.len(), 2);
}

#[test]
fn test_dropping_deep_tree_on_small_stack() {
    // Recursive drop glue would need far more than this thread has.
    let dropped = thread::Builder::new()
        .stack_size(128 * 1024)
        .spawn(|| {
            let block = nest(200_000);
            drop(block);
            true
        })
        .unwrap()
        .join()
        .unwrap();
    assert!(dropped);
}
