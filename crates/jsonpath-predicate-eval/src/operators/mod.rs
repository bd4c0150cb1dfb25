//! Relational operator implementations
//!
//! Operators are organized by category:
//! - Comparison operators (equality, ordering)
//! - Membership operators (in, nin, contains, subsetof, anyof, noneof)
//! - Collection operators (size, empty, not_empty, exists)
//! - String operators (regex match)
//! - Type operators (type)
//! - Nested operators (all, matches)
//!
//! Each operator is a plain function returning `EvalResult<bool>`; the
//! [`BuiltinEvaluator`] adapts them to the [`Evaluator`] contract.

pub mod collection;
pub mod comparison;
pub mod membership;
pub mod nested;
pub mod string;
pub mod type_ops;

pub use collection::*;
pub use comparison::*;
pub use membership::*;
pub use nested::*;
pub use string::*;
pub use type_ops::*;

use crate::context::PredicateContext;
use crate::error::{EvalError, EvalResult};
use crate::evaluator::Evaluator;
use crate::operator::RelationalOperator;
use crate::verdict::Verdict;
use jsonpath_predicate_types::{NarrowResult, ValueNode, ValueType};

/// Turn a failed narrowing into the error for the operand pair
///
/// An undefined operand is reported as unresolved; any other variant as a
/// type mismatch naming both operand types.
pub(crate) fn require<T>(
    operator: RelationalOperator,
    left: &ValueNode,
    right: &ValueNode,
    narrowed: NarrowResult<T>,
) -> EvalResult<T> {
    narrowed.map_err(|mismatch| match mismatch.found {
        ValueType::Undefined => EvalError::unresolved_operand(operator.token()),
        _ => EvalError::type_mismatch(operator.token(), left.value_type(), right.value_type()),
    })
}

/// Evaluate a standard operator
///
/// Regex patterns are compiled on every call here; registries use
/// [`RegexEvaluator`] to memoize them instead.
pub fn dispatch(
    operator: RelationalOperator,
    left: &ValueNode,
    right: &ValueNode,
    ctx: &PredicateContext<'_>,
) -> EvalResult<bool> {
    use RelationalOperator as Op;

    match operator {
        Op::Equals => Ok(eval_equals(left, right, ctx)),
        Op::NotEquals => Ok(eval_not_equals(left, right, ctx)),
        Op::LessThan => eval_less_than(left, right),
        Op::LessThanEqual => eval_less_than_equal(left, right),
        Op::GreaterThan => eval_greater_than(left, right),
        Op::GreaterThanEqual => eval_greater_than_equal(left, right),
        Op::Regex => eval_regex(left, right, |literal| compile_pattern(literal).map(Into::into)),
        Op::In => eval_in(left, right, ctx),
        Op::NotIn => eval_not_in(left, right, ctx),
        Op::Contains => eval_contains(left, right, ctx),
        Op::All => eval_all(left, right, ctx),
        Op::SubsetOf => eval_subset_of(left, right, ctx),
        Op::AnyOf => eval_any_of(left, right, ctx),
        Op::NoneOf => eval_none_of(left, right, ctx),
        Op::Size => eval_size(left, right),
        Op::Empty => eval_empty(left, right),
        Op::NotEmpty => eval_not_empty(left, right),
        Op::Exists => Ok(eval_exists(left, right)),
        Op::Type => Ok(eval_type(left, right)),
        Op::Matches => eval_matches(left, right, ctx),
    }
}

/// Evaluator for one standard operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinEvaluator {
    operator: RelationalOperator,
}

impl BuiltinEvaluator {
    pub fn new(operator: RelationalOperator) -> Self {
        Self { operator }
    }

    pub fn operator(&self) -> RelationalOperator {
        self.operator
    }
}

impl Evaluator for BuiltinEvaluator {
    fn evaluate(&self, left: &ValueNode, right: &ValueNode, ctx: &PredicateContext<'_>) -> Verdict {
        Verdict::from(dispatch(self.operator, left, right, ctx))
    }
}
