use super::*;
use crate::mach::Halt;

#[test]
fn test_increment_advances_by_one() {
    let mut p = program(&["X3 <- X3 + 1"], &[("X3", 7)]);
    p.step().unwrap();
    assert_eq!(p.fetch("X3"), 8);
    assert_eq!(p.counter(), 1);
}

#[test]
fn test_decrement_clamps_at_zero() {
    let mut p = program(&["X <- X - 1", "X <- X - 1"], &[("X", 1)]);
    p.step().unwrap();
    assert_eq!(p.fetch("X"), 0);
    assert_eq!(p.counter(), 1);
    p.step().unwrap();
    assert_eq!(p.fetch("X"), 0);
    assert_eq!(p.counter(), 2);
}

#[test]
fn test_branch_on_zero_falls_through() {
    let mut p = program(&["IF X != 0 GOTO A", "Y <- Y + 1", "[A] Z <- Z + 1"], &[]);
    p.step().unwrap();
    assert_eq!(p.counter(), 1);
    assert_eq!(run(&mut p), "Instruction\n");
    assert_eq!(p.output(), 1);
    assert_eq!(p.fetch("Z"), 1);
}

#[test]
fn test_branch_jumps_to_label() {
    let mut p = program(&["IF X != 0 GOTO A", "Y <- Y + 1", "[A] Z <- Z + 1"], &[("X", 2)]);
    p.step().unwrap();
    assert_eq!(p.counter(), 2);
    assert_eq!(run(&mut p), "Instruction\n");
    assert_eq!(p.output(), 0);
    assert_eq!(p.fetch("X"), 2);
}

#[test]
fn test_branch_backwards() {
    let mut p = program(&["[L1] X <- X - 1", "Y <- Y + 1", "IF X != 0 GOTO L1"], &[("X", 3)]);
    assert_eq!(run(&mut p), "Instruction\n");
    assert_eq!(p.output(), 3);
    assert_eq!(p.steps(), 10);
}

#[test]
fn test_missing_label_only_when_taken() {
    let mut p = program(&["IF X != 0 GOTO NOWHERE", "Y <- Y + 1"], &[]);
    assert_eq!(run(&mut p), "Instruction\n");
    assert_eq!(p.output(), 1);
    assert_eq!(p.halted(), Some(&Halt::Instruction));
}
