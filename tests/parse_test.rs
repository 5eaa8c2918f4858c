use slang::lang::{lex, parse, ErrorCode, Instruction, Kind, Line};

fn parse_str(s: &str) -> Option<Instruction> {
    let line = Line::new(1, s);
    line.instruction().ok()
}

fn args(i: &Instruction) -> Vec<&str> {
    i.args().iter().map(String::as_str).collect()
}

#[test]
fn test_five_forms() {
    let i = parse_str("x <- x + 1").unwrap();
    assert_eq!((i.kind(), args(&i)), (Kind::Increment, vec!["X"]));
    let i = parse_str("[B1] Z3 <- Z3 - 1").unwrap();
    assert_eq!(i.label(), Some("B1"));
    assert_eq!((i.kind(), args(&i)), (Kind::Decrement, vec!["Z3"]));
    let i = parse_str("IF X2 != 0 GOTO A").unwrap();
    assert_eq!((i.kind(), args(&i)), (Kind::ConditionalBranch, vec!["X2", "A"]));
    let i = parse_str("W <- SUM(X1, X2, X3)").unwrap();
    assert_eq!(
        (i.kind(), args(&i)),
        (Kind::AssignmentMacro, vec!["W", "SUM", "X1", "X2", "X3"])
    );
    let i = parse_str("[C] IF EQ(X, Y) != 0 GOTO END").unwrap();
    assert_eq!(
        (i.kind(), args(&i)),
        (Kind::ConditionalMacro, vec!["EQ", "X", "Y", "END"])
    );
}

#[test]
fn test_macro_without_operands() {
    let i = parse_str("Y <- ZERO()").unwrap();
    assert_eq!(args(&i), vec!["Y", "ZERO"]);
    let i = parse_str("IF ZERO() != 0 GOTO A").unwrap();
    assert_eq!(args(&i), vec!["ZERO", "A"]);
}

#[test]
fn test_canonical_display() {
    for s in &[
        "[A] X <- X + 1",
        "Y <- Y - 1",
        "IF X1 != 0 GOTO LOOP",
        "W <- ADD(X1, X2)",
        "[E2] IF LT(X, Y) != 0 GOTO A",
    ] {
        assert_eq!(parse_str(s).unwrap().to_string(), *s);
    }
}

#[test]
fn test_mismatched_identity() {
    assert_eq!(parse_str("A <- B + 1"), None);
    assert_eq!(parse_str("X1 <- X2 - 1"), None);
}

#[test]
fn test_error_carries_line() {
    let e = Line::new(12, "x <- x + 2").instruction().unwrap_err();
    assert_eq!(e.code(), ErrorCode::InvalidInstruction);
    assert_eq!(e.line_number(), Some(12));
    assert_eq!(e.to_string(), "INVALID INSTRUCTION IN LINE 12; X <- X + 2");
}

#[test]
fn test_parse_reports_reason() {
    let e = parse(Some(3), &lex("IF X != 1 GOTO A")).unwrap_err();
    assert_eq!(e.code(), ErrorCode::InvalidInstruction);
    assert_eq!(e.line_number(), Some(3));
    assert!(!e.detail().is_empty());
}

#[test]
fn test_rejects() {
    for s in &[
        "HALT",
        "GOTO A",
        "X <- 1",
        "X <- X + 1 + 1",
        "X <- X * 1",
        "IF X == 0 GOTO A",
        "IF X != 0 GOTO",
        "IF X != 0 THEN A",
        "[a1 X <- X + 1",
        "XY <- XY + 1",
        "W <- ADD(X1 X2)",
        "W <- ADD(X1,)",
        "W <- F1(X)",
    ] {
        assert_eq!(parse_str(s), None, "{}", s);
    }
}
