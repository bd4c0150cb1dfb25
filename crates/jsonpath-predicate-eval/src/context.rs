//! Predicate context for a single filter application

use crate::evaluator::SubPredicate;
use crate::options::EvaluationOptions;
use jsonpath_predicate_types::ValueNode;
use std::fmt;

/// Read-only view handed to every evaluator call
///
/// Borrowed from the path engine for the duration of one filter application.
/// Derived contexts are new values; nothing is mutated in place.
#[derive(Clone, Copy)]
pub struct PredicateContext<'a> {
    root: &'a ValueNode,
    current: &'a ValueNode,
    options: EvaluationOptions,
    subpredicate: Option<&'a dyn SubPredicate>,
}

impl<'a> PredicateContext<'a> {
    /// Create a context whose current node is the document root
    pub fn new(root: &'a ValueNode, options: EvaluationOptions) -> Self {
        Self {
            root,
            current: root,
            options,
            subpredicate: None,
        }
    }

    /// The query root (`$`)
    pub fn root(&self) -> &'a ValueNode {
        self.root
    }

    /// The node under test (`@`)
    pub fn current(&self) -> &'a ValueNode {
        self.current
    }

    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    pub fn is_strict(&self) -> bool {
        self.options.strict_errors
    }

    /// The nested predicate for `all` / `matches`, if one was supplied
    pub fn subpredicate(&self) -> Option<&'a dyn SubPredicate> {
        self.subpredicate
    }

    /// Derive a context testing another node
    pub fn with_current<'b>(&self, current: &'b ValueNode) -> PredicateContext<'b>
    where
        'a: 'b,
    {
        PredicateContext {
            root: self.root,
            current,
            options: self.options,
            subpredicate: self.subpredicate,
        }
    }

    /// Derive a context carrying a nested predicate
    pub fn with_subpredicate<'b>(&self, subpredicate: &'b dyn SubPredicate) -> PredicateContext<'b>
    where
        'a: 'b,
    {
        PredicateContext {
            root: self.root,
            current: self.current,
            options: self.options,
            subpredicate: Some(subpredicate),
        }
    }

    /// Derive a context without a nested predicate
    pub fn without_subpredicate(&self) -> Self {
        Self {
            subpredicate: None,
            ..*self
        }
    }
}

impl fmt::Debug for PredicateContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateContext")
            .field("root", &self.root.value_type())
            .field("current", &self.current.value_type())
            .field("options", &self.options)
            .field("subpredicate", &self.subpredicate.is_some())
            .finish()
    }
}
