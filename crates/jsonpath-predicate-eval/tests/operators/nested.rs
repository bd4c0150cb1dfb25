//! Nested Predicate Tests
//!
//! Tests for: all, matches, and comparison trees used as nested predicates

use crate::common::{arr, eval, json, num, registry, s};
use jsonpath_predicate_eval::{
    Comparison, ErrorKind, EvaluationOptions, FilterTree, Operand, PredicateContext,
    RelationalOperator, Verdict, sub_predicate,
};
use jsonpath_predicate_types::ValueNode;
use serde_json::json;

fn positive() -> FilterTree<Comparison> {
    FilterTree::leaf(Comparison::standard(RelationalOperator::GreaterThan, Operand::Current, num(0)))
}

#[test]
fn test_all_with_nested_predicate() {
    let tree = positive();
    let bound = tree.bind(registry());
    let root = ValueNode::Null;
    let ctx = PredicateContext::new(&root, EvaluationOptions::default());
    let nested = ctx.with_subpredicate(&bound);

    let all_positive = arr([num(1), num(2)]);
    let one_negative = arr([num(1), num(-2)]);
    assert_eq!(registry().evaluate("all", &all_positive, &ValueNode::Undefined, &nested), Verdict::True);
    assert_eq!(registry().evaluate("all", &one_negative, &ValueNode::Undefined, &nested), Verdict::False);
    assert_eq!(registry().evaluate("all", &arr([]), &ValueNode::Undefined, &nested), Verdict::True);
}

#[test]
fn test_all_nested_error_policy() {
    let tree = positive();
    let bound = tree.bind(registry());
    let mixed = arr([num(1), s("x")]);

    let root = ValueNode::Null;
    let lenient = PredicateContext::new(&root, EvaluationOptions::default());
    assert_eq!(
        registry().evaluate("all", &mixed, &ValueNode::Undefined, &lenient.with_subpredicate(&bound)),
        Verdict::False
    );

    let strict = PredicateContext::new(&root, EvaluationOptions::strict());
    let verdict = registry().evaluate("all", &mixed, &ValueNode::Undefined, &strict.with_subpredicate(&bound));
    assert_eq!(verdict.error_kind(), Some(ErrorKind::TypeMismatch));
}

#[test]
fn test_all_without_nested_predicate_is_containment() {
    let sizes = json(json!(["S", "M", "L"]));
    assert_eq!(eval("all", &sizes, &json(json!(["S", "L"]))), Verdict::True);
    assert_eq!(eval("all", &sizes, &json(json!(["S", "XL"]))), Verdict::False);
    assert_eq!(eval("all", &sizes, &s("S")).error_kind(), Some(ErrorKind::TypeMismatch));
}

#[test]
fn test_all_needs_array_left() {
    assert_eq!(eval("all", &num(1), &arr([])).error_kind(), Some(ErrorKind::TypeMismatch));
}

#[test]
fn test_matches_tests_left_as_current() {
    let has_name = sub_predicate(|candidate: &ValueNode, ctx: &PredicateContext<'_>| {
        assert!(std::ptr::eq(candidate, ctx.current()));
        assert!(ctx.subpredicate().is_none());
        Verdict::from(candidate.as_object().is_some_and(|o| o.contains_key("name")))
    });

    let root = ValueNode::Null;
    let ctx = PredicateContext::new(&root, EvaluationOptions::default());
    let nested = ctx.with_subpredicate(&has_name);

    let book = json(json!({"name": "Dune"}));
    assert_eq!(registry().evaluate("matches", &book, &ValueNode::Undefined, &nested), Verdict::True);
    assert_eq!(registry().evaluate("matches", &num(1), &ValueNode::Undefined, &nested), Verdict::False);
}

#[test]
fn test_matches_without_nested_predicate() {
    assert_eq!(
        eval("matches", &num(1), &ValueNode::Undefined).error_kind(),
        Some(ErrorKind::MalformedOperand)
    );
}
