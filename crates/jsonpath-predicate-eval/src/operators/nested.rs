//! Nested Predicate Operators
//!
//! Implements: All, Matches
//!
//! Both consult the sub-predicate carried by the context. Candidates are tested
//! with a derived context whose current node is the candidate and which no
//! longer carries the sub-predicate.

use super::membership::contains_node;
use super::require;
use crate::combinator::combine_and;
use crate::context::PredicateContext;
use crate::error::{EvalError, EvalResult};
use crate::operator::RelationalOperator;
use jsonpath_predicate_types::ValueNode;

/// Evaluate All (`all`)
///
/// With a sub-predicate: every element of the `left` array satisfies it, folded
/// through [`combine_and`] (an empty array holds). Without one: `right` must be
/// an array and every one of its elements must occur in `left`.
pub fn eval_all(left: &ValueNode, right: &ValueNode, ctx: &PredicateContext<'_>) -> EvalResult<bool> {
    let op = RelationalOperator::All;
    let items = require(op, left, right, left.expect_array())?;

    match ctx.subpredicate() {
        Some(sub) => {
            let verdicts = items.iter().map(|item| {
                let scoped = ctx.with_current(item).without_subpredicate();
                sub.test(item, &scoped)
            });
            combine_and(ctx, verdicts).into_result()
        }
        None => {
            let required = require(op, left, right, right.expect_array())?;
            Ok(required
                .iter()
                .all(|wanted| contains_node(items, wanted, ctx.options())))
        }
    }
}

/// Evaluate Matches (`matches`)
///
/// Tests the sub-predicate against `left`. The verdict is passed through
/// untouched, errors included.
pub fn eval_matches(left: &ValueNode, _right: &ValueNode, ctx: &PredicateContext<'_>) -> EvalResult<bool> {
    let op = RelationalOperator::Matches;
    let sub = ctx.subpredicate().ok_or_else(|| {
        EvalError::malformed_operand(op.token(), "no nested predicate supplied")
    })?;

    let scoped = ctx.with_current(left).without_subpredicate();
    sub.test(left, &scoped).into_result()
}
