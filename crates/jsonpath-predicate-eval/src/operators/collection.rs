//! Collection Operators
//!
//! Implements: Size, Empty, NotEmpty, Exists

use super::require;
use crate::error::{EvalError, EvalResult};
use crate::operator::RelationalOperator;
use jsonpath_predicate_types::ValueNode;
use rust_decimal::Decimal;

fn cardinality(operator: RelationalOperator, left: &ValueNode, right: &ValueNode) -> EvalResult<usize> {
    match left.size() {
        Some(size) => Ok(size),
        None if left.is_undefined() => Err(EvalError::unresolved_operand(operator.token())),
        None => Err(EvalError::type_mismatch(operator.token(), left.value_type(), right.value_type())),
    }
}

/// Evaluate Size (`size`)
///
/// Array length, object key count or string length against a number. A
/// fractional or out-of-range `right` never matches.
pub fn eval_size(left: &ValueNode, right: &ValueNode) -> EvalResult<bool> {
    let op = RelationalOperator::Size;
    let expected = match right {
        ValueNode::Float(_) => None,
        _ => Some(require(op, left, right, right.expect_number())?),
    };
    let actual = cardinality(op, left, right)?;
    Ok(expected.is_some_and(|expected| Decimal::from(actual) == expected))
}

/// Evaluate Empty (`empty`)
///
/// With a boolean `right` the verdict is whether emptiness equals it
/// (`empty false` holds for non-empty values); otherwise `right` is ignored.
pub fn eval_empty(left: &ValueNode, right: &ValueNode) -> EvalResult<bool> {
    let empty = cardinality(RelationalOperator::Empty, left, right)? == 0;
    Ok(match right.as_boolean() {
        Some(expected) => empty == expected,
        None => empty,
    })
}

/// Evaluate NotEmpty (`not_empty`)
pub fn eval_not_empty(left: &ValueNode, right: &ValueNode) -> EvalResult<bool> {
    Ok(cardinality(RelationalOperator::NotEmpty, left, right)? != 0)
}

/// Evaluate Exists (`exists`)
///
/// Never errors. A boolean `right` selects between existence and absence.
pub fn eval_exists(left: &ValueNode, right: &ValueNode) -> bool {
    let exists = !left.is_undefined();
    match right.as_boolean() {
        Some(expected) => exists == expected,
        None => exists,
    }
}
