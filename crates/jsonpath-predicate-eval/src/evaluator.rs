//! The single-operator evaluation contract

use crate::context::PredicateContext;
use crate::verdict::Verdict;
use jsonpath_predicate_types::ValueNode;

/// Evaluates one relational operator against two resolved operands
///
/// `left` is the value extracted from the document, `right` the literal (or
/// resolved path) from the filter expression. Implementations must be
/// referentially transparent and report failures through [`Verdict::Error`].
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, left: &ValueNode, right: &ValueNode, ctx: &PredicateContext<'_>) -> Verdict;
}

impl<F> Evaluator for F
where
    F: Fn(&ValueNode, &ValueNode, &PredicateContext<'_>) -> Verdict + Send + Sync,
{
    fn evaluate(&self, left: &ValueNode, right: &ValueNode, ctx: &PredicateContext<'_>) -> Verdict {
        self(left, right, ctx)
    }
}

/// A nested filter expression tested against candidate nodes
///
/// Supplied by the path engine for `all` and `matches`. The context passed to
/// `test` already has `candidate` as its current node.
pub trait SubPredicate {
    fn test(&self, candidate: &ValueNode, ctx: &PredicateContext<'_>) -> Verdict;
}

/// Sub-predicate backed by a closure, see [`sub_predicate`]
pub struct FnSubPredicate<F>(F);

impl<F> SubPredicate for FnSubPredicate<F>
where
    F: Fn(&ValueNode, &PredicateContext<'_>) -> Verdict,
{
    fn test(&self, candidate: &ValueNode, ctx: &PredicateContext<'_>) -> Verdict {
        (self.0)(candidate, ctx)
    }
}

/// Wrap a closure as a [`SubPredicate`]
pub fn sub_predicate<F>(f: F) -> FnSubPredicate<F>
where
    F: Fn(&ValueNode, &PredicateContext<'_>) -> Verdict,
{
    FnSubPredicate(f)
}
