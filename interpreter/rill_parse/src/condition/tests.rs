use pretty_assertions::assert_eq;

use super::*;

fn var(name: &str) -> Operand {
    Operand::Var(name.to_string())
}

#[test]
fn parses_each_operator() {
    assert_eq!(
        parse_condition("a == b"),
        Condition { left: var("a"), op: CmpOp::Eq, right: var("b") }
    );
    assert_eq!(
        parse_condition("a != b"),
        Condition { left: var("a"), op: CmpOp::Ne, right: var("b") }
    );
    assert_eq!(
        parse_condition("a < b"),
        Condition { left: var("a"), op: CmpOp::Lt, right: var("b") }
    );
    assert_eq!(
        parse_condition("a > b"),
        Condition { left: var("a"), op: CmpOp::Gt, right: var("b") }
    );
}

#[test]
fn classifies_literal_operands() {
    assert_eq!(
        parse_condition("3 < x"),
        Condition { left: Operand::Int(3), op: CmpOp::Lt, right: var("x") }
    );
}

#[test]
fn operators_bind_without_surrounding_spaces() {
    assert_eq!(
        parse_condition("a==b"),
        Condition { left: var("a"), op: CmpOp::Eq, right: var("b") }
    );
}

#[test]
fn scan_order_beats_position() {
    // `<` occurs first in the text, but `==` is scanned first.
    assert_eq!(
        parse_condition("a < b == c"),
        Condition { left: var("a < b"), op: CmpOp::Eq, right: var("c") }
    );
    assert_eq!(
        parse_condition("a != b == c"),
        Condition { left: var("a != b"), op: CmpOp::Eq, right: var("c") }
    );
}

#[test]
fn less_equal_truncates_to_less_than() {
    // Documented grammar quirk: the `=` of `<=` sticks to the right operand.
    assert_eq!(
        parse_condition("x <= 5"),
        Condition { left: var("x"), op: CmpOp::Lt, right: var("= 5") }
    );
    assert_eq!(
        parse_condition("x >= 5"),
        Condition { left: var("x"), op: CmpOp::Gt, right: var("= 5") }
    );
}

#[test]
fn no_operator_is_constant_false() {
    assert_eq!(parse_condition("whatever"), Condition::never());
    assert_eq!(parse_condition(""), Condition::never());
}

#[test]
fn bare_operator_compares_empty_names() {
    // Both sides trim to the empty string, an (unbindable) variable name.
    assert_eq!(
        parse_condition("=="),
        Condition { left: var(""), op: CmpOp::Eq, right: var("") }
    );
}
