//! Shared test helpers

use jsonpath_predicate_eval::{EvaluationOptions, OperatorRegistry, PredicateContext, Verdict};
use jsonpath_predicate_types::ValueNode;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

static REGISTRY: LazyLock<OperatorRegistry> = LazyLock::new(OperatorRegistry::with_standard_operators);

pub fn registry() -> &'static OperatorRegistry {
    &REGISTRY
}

/// Evaluate with default options and a null root
pub fn eval(op: &str, left: &ValueNode, right: &ValueNode) -> Verdict {
    eval_with(op, left, right, EvaluationOptions::default())
}

pub fn eval_with(op: &str, left: &ValueNode, right: &ValueNode, options: EvaluationOptions) -> Verdict {
    let root = ValueNode::Null;
    let ctx = PredicateContext::new(&root, options);
    registry().evaluate(op, left, right, &ctx)
}

pub fn num(i: i64) -> ValueNode {
    ValueNode::number(i)
}

pub fn dec(text: &str) -> ValueNode {
    ValueNode::number(Decimal::from_str(text).unwrap())
}

pub fn s(text: &str) -> ValueNode {
    ValueNode::string(text)
}

pub fn arr(items: impl IntoIterator<Item = ValueNode>) -> ValueNode {
    ValueNode::array(items)
}

pub fn json(value: serde_json::Value) -> ValueNode {
    ValueNode::from(value)
}
