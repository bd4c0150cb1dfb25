//! Membership Operators
//!
//! Implements: In, NotIn, Contains, SubsetOf, AnyOf, NoneOf
//! Membership is always tested with the same equality as `==`.

use super::comparison::node_equal;
use super::require;
use crate::context::PredicateContext;
use crate::error::{EvalError, EvalResult};
use crate::operator::RelationalOperator;
use crate::options::EvaluationOptions;
use jsonpath_predicate_types::ValueNode;

/// Check whether `needle` equals some element of `haystack`
pub fn contains_node(haystack: &[ValueNode], needle: &ValueNode, options: &EvaluationOptions) -> bool {
    haystack.iter().any(|item| node_equal(item, needle, options))
}

/// Evaluate In (`in`)
///
/// `right` must be an array; `left` may be any value.
pub fn eval_in(left: &ValueNode, right: &ValueNode, ctx: &PredicateContext<'_>) -> EvalResult<bool> {
    let items = require(RelationalOperator::In, left, right, right.expect_array())?;
    Ok(contains_node(items, left, ctx.options()))
}

/// Evaluate NotIn (`nin`)
pub fn eval_not_in(left: &ValueNode, right: &ValueNode, ctx: &PredicateContext<'_>) -> EvalResult<bool> {
    let items = require(RelationalOperator::NotIn, left, right, right.expect_array())?;
    Ok(!contains_node(items, left, ctx.options()))
}

/// Evaluate Contains (`contains`)
///
/// Array `left`: membership of `right`. String `left`: substring test, which
/// needs a string `right`.
pub fn eval_contains(left: &ValueNode, right: &ValueNode, ctx: &PredicateContext<'_>) -> EvalResult<bool> {
    let op = RelationalOperator::Contains;

    match left {
        ValueNode::Array(items) => Ok(contains_node(items, right, ctx.options())),
        ValueNode::String(haystack) => {
            let needle = require(op, left, right, right.expect_string())?;
            Ok(haystack.contains(needle))
        }
        ValueNode::Undefined => Err(EvalError::unresolved_operand(op.token())),
        _ => Err(EvalError::type_mismatch(op.token(), left.value_type(), right.value_type())),
    }
}

fn array_pair<'v>(
    operator: RelationalOperator,
    left: &'v ValueNode,
    right: &'v ValueNode,
) -> EvalResult<(&'v [ValueNode], &'v [ValueNode])> {
    let left_items = require(operator, left, right, left.expect_array())?;
    let right_items = require(operator, left, right, right.expect_array())?;
    Ok((left_items, right_items))
}

/// Evaluate SubsetOf (`subsetof`)
///
/// Every element of `left` is in `right`. An empty `left` is a subset of anything.
pub fn eval_subset_of(left: &ValueNode, right: &ValueNode, ctx: &PredicateContext<'_>) -> EvalResult<bool> {
    let (left_items, right_items) = array_pair(RelationalOperator::SubsetOf, left, right)?;
    Ok(left_items
        .iter()
        .all(|item| contains_node(right_items, item, ctx.options())))
}

/// Evaluate AnyOf (`anyof`)
pub fn eval_any_of(left: &ValueNode, right: &ValueNode, ctx: &PredicateContext<'_>) -> EvalResult<bool> {
    let (left_items, right_items) = array_pair(RelationalOperator::AnyOf, left, right)?;
    Ok(left_items
        .iter()
        .any(|item| contains_node(right_items, item, ctx.options())))
}

/// Evaluate NoneOf (`noneof`)
pub fn eval_none_of(left: &ValueNode, right: &ValueNode, ctx: &PredicateContext<'_>) -> EvalResult<bool> {
    let (left_items, right_items) = array_pair(RelationalOperator::NoneOf, left, right)?;
    Ok(!left_items
        .iter()
        .any(|item| contains_node(right_items, item, ctx.options())))
}
