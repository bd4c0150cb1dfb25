//! Comparison Operators
//!
//! Implements: Equals, NotEquals, LessThan, LessThanEqual, GreaterThan, GreaterThanEqual
//!
//! Equality is total: mismatched variants are simply unequal. Ordering is only
//! defined for number/number and string/string pairs.

use crate::context::PredicateContext;
use crate::error::{EvalError, EvalResult};
use crate::operator::RelationalOperator;
use crate::options::EvaluationOptions;
use jsonpath_predicate_types::ValueNode;
use std::cmp::Ordering;

/// Equality shared by every operator that tests membership
///
/// - Numbers compare by value, whatever their textual form (`1` vs `1.0`);
///   a `Float` against a decimal compares as `f64`
/// - Strings compare by exact text
/// - `Null` equals only `Null`
/// - Arrays compare element-wise in order, objects by key set and member values
/// - `Undefined` equals nothing unless the options say otherwise
/// - `Unsupported` equals nothing
pub fn node_equal(left: &ValueNode, right: &ValueNode, options: &EvaluationOptions) -> bool {
    match (left, right) {
        (ValueNode::Undefined, ValueNode::Undefined) => options.undefined_equals_undefined,
        (ValueNode::Null, ValueNode::Null) => true,
        (ValueNode::Boolean(a), ValueNode::Boolean(b)) => a == b,
        (ValueNode::Number(a), ValueNode::Number(b)) => a == b,
        (ValueNode::Float(_), ValueNode::Number(_) | ValueNode::Float(_))
        | (ValueNode::Number(_), ValueNode::Float(_)) => {
            float_compare(left, right) == Some(Ordering::Equal)
        }
        (ValueNode::String(a), ValueNode::String(b)) => a == b,
        (ValueNode::Array(a), ValueNode::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| node_equal(x, y, options))
        }
        (ValueNode::Object(a), ValueNode::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, x)| {
                    b.get(key).is_some_and(|y| node_equal(x, y, options))
                })
        }
        _ => false,
    }
}

/// Ordering for number/number and string/string pairs
///
/// Strings order by Unicode code point. Returns `None` for any other pairing.
pub fn node_compare(left: &ValueNode, right: &ValueNode) -> Option<Ordering> {
    match (left, right) {
        (ValueNode::Number(a), ValueNode::Number(b)) => Some(a.cmp(b)),
        (ValueNode::Float(_), ValueNode::Number(_) | ValueNode::Float(_))
        | (ValueNode::Number(_), ValueNode::Float(_)) => float_compare(left, right),
        (ValueNode::String(a), ValueNode::String(b)) => Some(a.as_str().cmp(b.as_str())),
        _ => None,
    }
}

fn float_compare(left: &ValueNode, right: &ValueNode) -> Option<Ordering> {
    left.as_f64()?.partial_cmp(&right.as_f64()?)
}

/// Evaluate Equals (`==`)
pub fn eval_equals(left: &ValueNode, right: &ValueNode, ctx: &PredicateContext<'_>) -> bool {
    node_equal(left, right, ctx.options())
}

/// Evaluate NotEquals (`!=`)
///
/// Negation of Equals, so an undefined operand makes it hold.
pub fn eval_not_equals(left: &ValueNode, right: &ValueNode, ctx: &PredicateContext<'_>) -> bool {
    !eval_equals(left, right, ctx)
}

fn eval_ordering(
    operator: RelationalOperator,
    left: &ValueNode,
    right: &ValueNode,
    accept: fn(Ordering) -> bool,
) -> EvalResult<bool> {
    if left.is_undefined() || right.is_undefined() {
        return Err(EvalError::unresolved_operand(operator.token()));
    }

    node_compare(left, right)
        .map(accept)
        .ok_or_else(|| EvalError::type_mismatch(operator.token(), left.value_type(), right.value_type()))
}

/// Evaluate LessThan (`<`)
pub fn eval_less_than(left: &ValueNode, right: &ValueNode) -> EvalResult<bool> {
    eval_ordering(RelationalOperator::LessThan, left, right, Ordering::is_lt)
}

/// Evaluate LessThanEqual (`<=`)
pub fn eval_less_than_equal(left: &ValueNode, right: &ValueNode) -> EvalResult<bool> {
    eval_ordering(RelationalOperator::LessThanEqual, left, right, Ordering::is_le)
}

/// Evaluate GreaterThan (`>`)
pub fn eval_greater_than(left: &ValueNode, right: &ValueNode) -> EvalResult<bool> {
    eval_ordering(RelationalOperator::GreaterThan, left, right, Ordering::is_gt)
}

/// Evaluate GreaterThanEqual (`>=`)
pub fn eval_greater_than_equal(left: &ValueNode, right: &ValueNode) -> EvalResult<bool> {
    eval_ordering(RelationalOperator::GreaterThanEqual, left, right, Ordering::is_ge)
}
