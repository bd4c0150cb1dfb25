//! Regex Operator Tests
//!
//! Tests for: =~ with `/body/flags` literals, memoized and fixed evaluators

use crate::common::{eval, num, s};
use jsonpath_predicate_eval::{
    ErrorKind, EvaluationOptions, Evaluator, PredicateContext, RegexEvaluator, Verdict,
};
use jsonpath_predicate_types::ValueNode;
use rstest::rstest;

#[rstest]
#[case("hello world", "/wor/", false)]
#[case("hello world", "/.*wor.*/", true)]
#[case("hello world", "/^wor/", false)]
#[case("HELLO", "/hello/i", true)]
#[case("HELLO", "/hello/", false)]
#[case("line1\nline2", "/line1$\\n^line2/m", true)]
#[case("a\nb", "/a.b/s", true)]
#[case("abc123", "[0-9]+", false)]
#[case("123", "[0-9]+", true)]
#[case("a b", "/a b # spaced/x", false)]
#[case("ab", "/a b # spaced/x", true)]
fn test_regex_match(#[case] subject: &str, #[case] pattern: &str, #[case] expected: bool) {
    assert_eq!(eval("=~", &s(subject), &s(pattern)), Verdict::from(expected));
}

#[test]
fn test_regex_malformed_pattern() {
    let verdict = eval("=~", &s("abc"), &s("/(unclosed/"));
    assert_eq!(verdict.error_kind(), Some(ErrorKind::MalformedOperand));
}

#[test]
fn test_regex_unknown_flag_ignored() {
    assert_eq!(eval("=~", &s("abc"), &s("/abc/q")), Verdict::True);
    assert_eq!(eval("=~", &s("Ünïcode"), &s("/\\w+/U")), Verdict::True);
}

#[test]
fn test_regex_non_string_operands() {
    assert_eq!(eval("=~", &num(1), &s("/1/")).error_kind(), Some(ErrorKind::TypeMismatch));
    assert_eq!(eval("=~", &s("1"), &num(1)).error_kind(), Some(ErrorKind::TypeMismatch));
    assert_eq!(
        eval("=~", &ValueNode::Undefined, &s("/x/")).error_kind(),
        Some(ErrorKind::UnresolvedOperand)
    );
}

#[test]
fn test_regex_evaluator_memoizes() {
    let evaluator = RegexEvaluator::new();
    let root = ValueNode::Null;
    let ctx = PredicateContext::new(&root, EvaluationOptions::default());

    for subject in ["alpha", "beta", "gamma"] {
        evaluator.evaluate(&s(subject), &s("/a$/"), &ctx);
    }
    assert_eq!(evaluator.memoized(), 1);

    evaluator.evaluate(&s("x"), &s("/x/"), &ctx);
    assert_eq!(evaluator.memoized(), 2);
}

#[test]
fn test_regex_malformed_not_memoized() {
    let evaluator = RegexEvaluator::new();
    let root = ValueNode::Null;
    let ctx = PredicateContext::new(&root, EvaluationOptions::default());

    assert!(evaluator.evaluate(&s("a"), &s("/[/"), &ctx).is_error());
    assert_eq!(evaluator.memoized(), 0);
}

#[test]
fn test_fixed_pattern_ignores_right() {
    let evaluator = RegexEvaluator::with_pattern("/^[A-Z]{3}$/").unwrap();
    let root = ValueNode::Null;
    let ctx = PredicateContext::new(&root, EvaluationOptions::default());

    assert_eq!(evaluator.evaluate(&s("ABC"), &ValueNode::Undefined, &ctx), Verdict::True);
    assert_eq!(evaluator.evaluate(&s("abc"), &s("/abc/"), &ctx), Verdict::False);
}

#[test]
fn test_fixed_pattern_fails_at_construction() {
    let err = RegexEvaluator::with_pattern("/(/").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedOperand);
}
