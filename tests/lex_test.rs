use calc::lang::{token::*, tokenize};

fn ops(s: &str) -> Vec<Operator> {
    tokenize(s).unwrap().operators
}

#[test]
fn test_simple_expression() {
    let stream = tokenize("5+3").unwrap();
    assert_eq!(stream.operands, vec![5.0, 3.0]);
    assert_eq!(
        stream.operators,
        vec![Operator::Combining(Combining::Plus)]
    );
    assert!(stream.starts_with_operand);
    assert!(stream.ends_with_operand);
}

#[test]
fn test_whitespace_stripped() {
    assert_eq!(tokenize(" 5 + 3 ").unwrap(), tokenize("5+3").unwrap());
    assert_eq!(tokenize("\t5\t+\t3").unwrap(), tokenize("5+3").unwrap());
}

#[test]
fn test_multi_digit_operands() {
    let stream = tokenize("123+456").unwrap();
    assert_eq!(stream.operands, vec![123.0, 456.0]);
}

#[test]
fn test_invalid_character() {
    assert!(tokenize("5a3").is_err());
    assert!(tokenize("(5+3)").is_err());
    assert!(tokenize("5.5+3").is_err());
}

#[test]
fn test_invalid_character_column() {
    let error = tokenize("5a3").unwrap_err();
    assert_eq!(error.column(), &(1..2));
    let error = tokenize("5 + x").unwrap_err();
    assert_eq!(error.column(), &(4..5));
}

#[test]
fn test_invalid_message() {
    let error = tokenize("5a3").unwrap_err();
    assert_eq!(error.to_string(), "invalid calculator input");
}

#[test]
fn test_flatten_stacked_run() {
    assert_eq!(
        ops("+!/+-c*"),
        vec![
            Operator::InPlace(InPlace::Negate),
            Operator::InPlace(InPlace::Clear),
            Operator::Combining(Combining::Multiply),
        ]
    );
}

#[test]
fn test_flatten_multiple_in_place() {
    // Provisional tie-break: every in-place operator in a run survives.
    assert_eq!(
        ops("!c!"),
        vec![
            Operator::InPlace(InPlace::Negate),
            Operator::InPlace(InPlace::Clear),
            Operator::InPlace(InPlace::Negate),
        ]
    );
}

#[test]
fn test_flatten_keeps_last_combining() {
    assert_eq!(ops("5+-3"), vec![Operator::Combining(Combining::Minus)]);
    assert_eq!(
        ops("+!"),
        vec![Operator::InPlace(InPlace::Negate)]
    );
}

#[test]
fn test_modulo_is_legal() {
    let stream = tokenize("5%3").unwrap();
    assert_eq!(
        stream.operators,
        vec![Operator::Combining(Combining::Modulus)]
    );
}

#[test]
fn test_boundary_flags() {
    let stream = tokenize("5+").unwrap();
    assert!(stream.starts_with_operand);
    assert!(!stream.ends_with_operand);
    let stream = tokenize("+5").unwrap();
    assert!(!stream.starts_with_operand);
    assert!(stream.ends_with_operand);
}

#[test]
fn test_empty() {
    let stream = tokenize("").unwrap();
    assert!(stream.operands.is_empty());
    assert!(stream.operators.is_empty());
    assert!(!stream.starts_with_operand);
    assert!(!stream.ends_with_operand);
}

#[test]
fn test_separate_runs_flatten_independently() {
    assert_eq!(
        ops("1+-2*/3"),
        vec![
            Operator::Combining(Combining::Minus),
            Operator::Combining(Combining::Divide),
        ]
    );
}
