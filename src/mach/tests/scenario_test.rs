use super::*;
use crate::lang::ErrorCode;
use crate::mach::{compile, Macros};

#[test]
fn test_branch_over_nothing() {
    let mut p = program(
        &[
            "X <- X + 1",
            "X <- X + 1",
            "IF X != 0 GOTO END",
            "[END] X <- X - 1",
        ],
        &[],
    );
    assert_eq!(p.instructions().len(), 5);
    assert_eq!(run(&mut p), "Instruction\n");
    assert_eq!(p.fetch("X"), 1);
    assert_eq!(p.output(), 0);
    assert_eq!(p.snapshots().len(), 6);
}

#[test]
fn test_mismatched_increment() {
    let e = compile(&["A <- B + 1"]).unwrap_err();
    assert_eq!(e.code(), ErrorCode::InvalidInstruction);
    assert_eq!(e.line_number(), Some(1));
    assert_eq!(e.to_string(), "INVALID INSTRUCTION IN LINE 1; A <- B + 1");
}

#[test]
fn test_missing_label_halts_quietly() {
    let mut p = program(&["IF X != 0 GOTO MISSING"], &[("X", 3)]);
    assert_eq!(run(&mut p), "MissingLabel(\"MISSING\")\n");
    assert_eq!(p.fetch("X"), 3);
    assert_eq!(p.output(), 0);
    assert_eq!(p.counter(), p.instructions().len());
    let trace = p.snapshots();
    assert_eq!(trace.len(), 2);
    assert_eq!(trace[0].state(), trace[1].state());
    assert_eq!(trace[1].instruction(), None);
}

#[test]
fn test_copy_x_to_y() {
    let mut p = program(
        &[
            "# Y <- X",
            "[A] IF X != 0 GOTO B",
            "Z <- Z + 1",
            "IF Z != 0 GOTO E",
            "[B] X <- X - 1",
            "Y <- Y + 1",
            "Z <- Z + 1",
            "IF Z != 0 GOTO A",
        ],
        &[("X", 4)],
    );
    assert_eq!(run(&mut p), "MissingLabel(\"E\")\n");
    assert_eq!(p.output(), 4);
    assert_eq!(p.fetch("X"), 0);
}

#[test]
fn test_unsupported_macro_reports_error() {
    let mut p = program(&["X <- X + 1", "Y <- ADD(X, X)"], &[]);
    assert_eq!(run(&mut p), "UNSUPPORTED MACRO AT 1; ADD\nFaulted\n");
    assert_eq!(p.output(), 0);
}

#[test]
fn test_macros_when_registered() {
    let mut p = program(
        &[
            "[L] Y <- ADD(Y, X1)",
            "X2 <- PRED(X2)",
            "IF X2 != 0 GOTO L",
        ],
        &[("X1", 3), ("X2", 5)],
    )
    .with_macros(Macros::builtin());
    assert_eq!(run(&mut p), "Instruction\n");
    assert_eq!(p.output(), 15);
}

#[test]
fn test_endless_loop_is_bounded() {
    let mut p = program(&["[A] X <- X + 1", "IF X != 0 GOTO A"], &[]);
    assert_eq!(run_cycles(&mut p, 50), "\n50 Execution cycles exceeded.\n");
    assert_eq!(p.fetch("X"), 50);
    assert_eq!(p.halted(), None);
    assert_eq!(p.execute(1), Event::Running);
}
