//! Comparison Operator Tests
//!
//! Tests for: ==, !=, <, <=, >, >=
//! Equality is total; ordering errors on unorderable pairs.

use crate::common::{dec, eval, eval_with, json, num, s};
use jsonpath_predicate_eval::{ErrorKind, EvalError, EvaluationOptions, Verdict};
use jsonpath_predicate_types::{ValueNode, ValueType};
use rstest::rstest;
use serde_json::json;

// ============================================================================
// Equals (==) Tests
// ============================================================================

#[test]
fn test_equal_numbers_by_value() {
    assert_eq!(eval("==", &num(1), &dec("1.0")), Verdict::True);
    assert_eq!(eval("==", &dec("2.50"), &dec("2.5")), Verdict::True);
}

#[test]
fn test_equal_strings_case_sensitive() {
    assert_eq!(eval("==", &s("Hello"), &s("hello")), Verdict::False);
    assert_eq!(eval("==", &s("hello"), &s("hello")), Verdict::True);
}

#[rstest]
#[case(num(1), s("1"))]
#[case(ValueNode::Null, ValueNode::boolean(false))]
#[case(s(""), ValueNode::Null)]
#[case(json(json!([1])), num(1))]
fn test_equal_mismatched_variants_are_false(#[case] left: ValueNode, #[case] right: ValueNode) {
    assert_eq!(eval("==", &left, &right), Verdict::False);
    assert_eq!(eval("!=", &left, &right), Verdict::True);
}

#[test]
fn test_equal_null_only_null() {
    assert_eq!(eval("==", &ValueNode::Null, &ValueNode::Null), Verdict::True);
}

#[test]
fn test_equal_structural() {
    let left = json(json!({"a": [1, {"b": "x"}], "c": null}));
    let reordered = json(json!({"c": null, "a": [1.0, {"b": "x"}]}));
    assert_eq!(eval("==", &left, &reordered), Verdict::True);

    let shuffled = json(json!([2, 1]));
    assert_eq!(eval("==", &json(json!([1, 2])), &shuffled), Verdict::False);
}

#[test]
fn test_equal_undefined_default_false() {
    assert_eq!(eval("==", &ValueNode::Undefined, &ValueNode::Undefined), Verdict::False);
    assert_eq!(eval("!=", &ValueNode::Undefined, &num(1)), Verdict::True);
    assert_eq!(eval("==", &ValueNode::Undefined, &ValueNode::Null), Verdict::False);
}

#[test]
fn test_equal_undefined_when_enabled() {
    let options = EvaluationOptions::default().with_undefined_equals_undefined(true);
    assert_eq!(
        eval_with("==", &ValueNode::Undefined, &ValueNode::Undefined, options),
        Verdict::True
    );
    assert_eq!(eval_with("==", &ValueNode::Undefined, &ValueNode::Null, options), Verdict::False);
}

#[test]
fn test_equal_numbers_beyond_decimal_range() {
    let huge = json(json!(1e300));
    let tiny = json(json!(1e-30));
    assert_eq!(eval("==", &huge, &json(json!(1e300))), Verdict::True);
    assert_eq!(eval("==", &tiny, &json(json!(1e-30))), Verdict::True);
    assert_eq!(eval("==", &tiny, &num(0)), Verdict::False);
    assert_eq!(eval("!=", &huge, &num(1)), Verdict::True);
}

#[test]
fn test_unsupported_never_equal() {
    assert_eq!(eval("==", &ValueNode::Unsupported, &ValueNode::Unsupported), Verdict::False);
}

// ============================================================================
// Ordering Tests
// ============================================================================

#[rstest]
#[case("<", num(8), num(10), true)]
#[case("<", num(10), num(10), false)]
#[case("<=", num(10), dec("10.0"), true)]
#[case(">", dec("10.5"), num(10), true)]
#[case(">=", num(9), num(10), false)]
#[case("<", s("apple"), s("banana"), true)]
#[case(">", s("b"), s("abc"), true)]
#[case("<=", s("same"), s("same"), true)]
#[case("<", json(json!(1e-30)), num(1), true)]
#[case(">", json(json!(1e-30)), num(0), true)]
#[case(">", json(json!(1e29)), num(1), true)]
#[case("<", json(json!(1e300)), json(json!(1e301)), true)]
#[case(">=", json(json!(-1e300)), dec("-79228162514264337593543950335"), false)]
fn test_ordering(#[case] op: &str, #[case] left: ValueNode, #[case] right: ValueNode, #[case] expected: bool) {
    assert_eq!(eval(op, &left, &right), Verdict::from(expected));
}

#[test]
fn test_ordering_type_mismatch() {
    let verdict = eval("<", &s("a"), &num(1));
    assert_eq!(
        verdict,
        Verdict::Error(EvalError::type_mismatch("<", ValueType::String, ValueType::Number))
    );
}

#[rstest]
#[case(ValueNode::Null, ValueNode::Null)]
#[case(ValueNode::boolean(true), ValueNode::boolean(false))]
#[case(json(json!([1])), json(json!([2])))]
fn test_ordering_undefined_for_other_variants(#[case] left: ValueNode, #[case] right: ValueNode) {
    for op in ["<", "<=", ">", ">="] {
        assert_eq!(eval(op, &left, &right).error_kind(), Some(ErrorKind::TypeMismatch), "{}", op);
    }
}

#[test]
fn test_ordering_unresolved_operand() {
    assert_eq!(
        eval(">", &ValueNode::Undefined, &num(1)).error_kind(),
        Some(ErrorKind::UnresolvedOperand)
    );
    assert_eq!(
        eval("<=", &num(1), &ValueNode::Undefined).error_kind(),
        Some(ErrorKind::UnresolvedOperand)
    );
}
