//! Boolean filter trees
//!
//! The external parser produces AND/OR/NOT structure over leaf comparisons.
//! [`FilterTree`] holds that structure over any leaf type and folds it through
//! the combinator, evaluating leaves lazily.

use crate::combinator::{combine_and, combine_not, combine_or};
use crate::context::PredicateContext;
use crate::evaluator::SubPredicate;
use crate::operator::RelationalOperator;
use crate::registry::OperatorRegistry;
use crate::verdict::Verdict;
use jsonpath_predicate_types::ValueNode;

/// AND/OR/NOT structure over leaves of type `L`
#[derive(Debug, Clone)]
pub enum FilterTree<L> {
    Leaf(L),
    And(Vec<FilterTree<L>>),
    Or(Vec<FilterTree<L>>),
    Not(Box<FilterTree<L>>),
}

impl<L> FilterTree<L> {
    pub fn leaf(leaf: L) -> Self {
        Self::Leaf(leaf)
    }

    pub fn and(children: impl IntoIterator<Item = FilterTree<L>>) -> Self {
        Self::And(children.into_iter().collect())
    }

    pub fn or(children: impl IntoIterator<Item = FilterTree<L>>) -> Self {
        Self::Or(children.into_iter().collect())
    }

    pub fn negate(child: FilterTree<L>) -> Self {
        Self::Not(Box::new(child))
    }

    /// Fold the tree, evaluating leaves with `leaf`
    ///
    /// Leaves skipped by short-circuiting are never evaluated.
    pub fn evaluate<F>(&self, ctx: &PredicateContext<'_>, leaf: &F) -> Verdict
    where
        F: Fn(&L, &PredicateContext<'_>) -> Verdict,
    {
        match self {
            Self::Leaf(l) => leaf(l, ctx),
            Self::And(children) => {
                combine_and(ctx, children.iter().map(|child| child.evaluate(ctx, leaf)))
            }
            Self::Or(children) => {
                combine_or(ctx, children.iter().map(|child| child.evaluate(ctx, leaf)))
            }
            Self::Not(child) => combine_not(child.evaluate(ctx, leaf)),
        }
    }
}

/// Operand of a leaf comparison
#[derive(Debug, Clone)]
pub enum Operand {
    /// A value resolved before evaluation (literal or resolved path)
    Value(ValueNode),
    /// The node under test (`@`), read from the context
    Current,
}

impl Operand {
    /// Get the operand value for a context
    pub fn resolve<'s>(&'s self, ctx: &'s PredicateContext<'_>) -> &'s ValueNode {
        match self {
            Self::Value(value) => value,
            Self::Current => ctx.current(),
        }
    }
}

impl From<ValueNode> for Operand {
    fn from(value: ValueNode) -> Self {
        Self::Value(value)
    }
}

/// One leaf comparison: `left <operator> right`
#[derive(Debug, Clone)]
pub struct Comparison {
    pub operator: String,
    pub left: Operand,
    pub right: Operand,
}

impl Comparison {
    pub fn new(operator: impl Into<String>, left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self {
            operator: operator.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create a comparison for a standard operator
    pub fn standard(operator: RelationalOperator, left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self::new(operator.token(), left, right)
    }

    /// Evaluate against a registry
    pub fn evaluate(&self, registry: &OperatorRegistry, ctx: &PredicateContext<'_>) -> Verdict {
        let left = self.left.resolve(ctx);
        let right = self.right.resolve(ctx);
        registry.evaluate(&self.operator, left, right, ctx)
    }
}

impl FilterTree<Comparison> {
    /// Evaluate every leaf comparison against a registry
    pub fn evaluate_with(&self, registry: &OperatorRegistry, ctx: &PredicateContext<'_>) -> Verdict {
        self.evaluate(ctx, &|leaf: &Comparison, ctx: &PredicateContext<'_>| leaf.evaluate(registry, ctx))
    }

    /// Pair the tree with a registry so it can serve as a nested predicate
    pub fn bind<'r>(&'r self, registry: &'r OperatorRegistry) -> BoundFilter<'r> {
        BoundFilter { tree: self, registry }
    }
}

/// A comparison tree paired with the registry that evaluates its leaves
#[derive(Debug, Clone, Copy)]
pub struct BoundFilter<'r> {
    tree: &'r FilterTree<Comparison>,
    registry: &'r OperatorRegistry,
}

impl SubPredicate for BoundFilter<'_> {
    fn test(&self, _candidate: &ValueNode, ctx: &PredicateContext<'_>) -> Verdict {
        self.tree.evaluate_with(self.registry, ctx)
    }
}
