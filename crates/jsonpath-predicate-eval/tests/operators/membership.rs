//! Membership Operator Tests
//!
//! Tests for: in, nin, contains, subsetof, anyof, noneof

use crate::common::{arr, dec, eval, eval_with, json, num, s};
use jsonpath_predicate_eval::{ErrorKind, EvaluationOptions, Verdict};
use jsonpath_predicate_types::ValueNode;
use rstest::rstest;
use serde_json::json;

#[test]
fn test_in_uses_numeric_equality() {
    assert_eq!(eval("in", &num(2), &arr([num(1), dec("2.0")])), Verdict::True);
}

#[test]
fn test_in_string_not_found() {
    assert_eq!(eval("in", &s("x"), &arr([s("a"), s("b")])), Verdict::False);
}

#[test]
fn test_in_empty_array() {
    assert_eq!(eval("in", &num(1), &arr([])), Verdict::False);
    assert_eq!(eval("nin", &num(1), &arr([])), Verdict::True);
}

#[test]
fn test_in_structured_left() {
    let haystack = json(json!([[1, 2], {"k": "v"}]));
    assert_eq!(eval("in", &json(json!({"k": "v"})), &haystack), Verdict::True);
    assert_eq!(eval("in", &json(json!([2, 1])), &haystack), Verdict::False);
}

#[test]
fn test_in_non_array_right() {
    assert_eq!(eval("in", &num(1), &num(1)).error_kind(), Some(ErrorKind::TypeMismatch));
    assert_eq!(eval("nin", &num(1), &s("1")).error_kind(), Some(ErrorKind::TypeMismatch));
}

#[test]
fn test_in_undefined() {
    assert_eq!(
        eval("in", &num(1), &ValueNode::Undefined).error_kind(),
        Some(ErrorKind::UnresolvedOperand)
    );
    assert_eq!(eval("in", &ValueNode::Undefined, &arr([num(1)])), Verdict::False);

    let options = EvaluationOptions::default().with_undefined_equals_undefined(true);
    assert_eq!(
        eval_with("in", &ValueNode::Undefined, &arr([ValueNode::Undefined]), options),
        Verdict::True
    );
}

#[rstest]
#[case(arr([num(1), num(2)]), num(2), true)]
#[case(arr([num(1), num(2)]), num(3), false)]
#[case(s("hello world"), s("o w"), true)]
#[case(s("hello"), s("Hello"), false)]
#[case(s("hello"), s(""), true)]
fn test_contains(#[case] left: ValueNode, #[case] right: ValueNode, #[case] expected: bool) {
    assert_eq!(eval("contains", &left, &right), Verdict::from(expected));
}

#[test]
fn test_contains_errors() {
    assert_eq!(eval("contains", &s("abc"), &num(1)).error_kind(), Some(ErrorKind::TypeMismatch));
    assert_eq!(eval("contains", &num(12), &num(1)).error_kind(), Some(ErrorKind::TypeMismatch));
    assert_eq!(
        eval("contains", &ValueNode::Undefined, &num(1)).error_kind(),
        Some(ErrorKind::UnresolvedOperand)
    );
}

#[rstest]
#[case("subsetof", json!(["S", "M"]), json!(["S", "M", "L"]), true)]
#[case("subsetof", json!(["S", "XL"]), json!(["S", "M", "L"]), false)]
#[case("subsetof", json!([]), json!([]), true)]
#[case("anyof", json!(["XL", "M"]), json!(["S", "M"]), true)]
#[case("anyof", json!([]), json!(["S"]), false)]
#[case("noneof", json!(["XL"]), json!(["S", "M"]), true)]
#[case("noneof", json!(["S"]), json!(["S", "M"]), false)]
#[case("noneof", json!([]), json!([]), true)]
fn test_set_operators(
    #[case] op: &str,
    #[case] left: serde_json::Value,
    #[case] right: serde_json::Value,
    #[case] expected: bool,
) {
    assert_eq!(eval(op, &json(left), &json(right)), Verdict::from(expected));
}

#[test]
fn test_set_operators_need_arrays() {
    for op in ["subsetof", "anyof", "noneof"] {
        assert_eq!(eval(op, &s("S"), &arr([s("S")])).error_kind(), Some(ErrorKind::TypeMismatch));
        assert_eq!(eval(op, &arr([s("S")]), &s("S")).error_kind(), Some(ErrorKind::TypeMismatch));
    }
}
