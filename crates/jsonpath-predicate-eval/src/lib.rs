//! JSONPath Filter Predicate Engine
//!
//! This crate decides whether a single filter predicate holds for two
//! already-resolved operands, and composes such decisions. It implements:
//!
//! - **Comparison Operators**: `==`, `!=`, `<`, `<=`, `>`, `>=`
//! - **Pattern Matching**: `=~` with `/body/flags` literals
//! - **Membership Operators**: `in`, `nin`, `contains`, `subsetof`, `anyof`, `noneof`
//! - **Shape Operators**: `size`, `empty`, `not_empty`, `exists`, `type`
//! - **Nested Predicates**: `all`, `matches`
//! - **Boolean Combinator**: AND / OR / NOT with strict and lenient error policy
//!
//! # Example
//!
//! ```
//! use jsonpath_predicate_eval::{EvaluationOptions, OperatorRegistry, PredicateContext, Verdict};
//! use jsonpath_predicate_types::ValueNode;
//!
//! let registry = OperatorRegistry::with_standard_operators();
//! let root = ValueNode::Null;
//! let ctx = PredicateContext::new(&root, EvaluationOptions::default());
//!
//! let verdict = registry.evaluate("<", &ValueNode::number(8), &ValueNode::number(10), &ctx);
//! assert_eq!(verdict, Verdict::True);
//! ```
//!
//! # Three-State Verdicts
//!
//! Every evaluation yields `True`, `False` or `Error`. Evaluators never decide
//! that an error means `false`; the combinator does, and only outside strict
//! mode:
//!
//! - `And`: false dominates; an error short-circuits (strict) or counts as false
//! - `Or`: true dominates; errors are deferred until every branch has failed
//! - `Not`: errors pass through unchanged

pub mod combinator;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod filter;
pub mod operator;
pub mod operators;
pub mod options;
pub mod registry;
pub mod verdict;

// Re-export main types
pub use combinator::{combine_and, combine_not, combine_or, settle};
pub use context::PredicateContext;
pub use error::{ErrorKind, EvalError, EvalResult, RegistryError};
pub use evaluator::{Evaluator, FnSubPredicate, SubPredicate, sub_predicate};
pub use filter::{BoundFilter, Comparison, FilterTree, Operand};
pub use operator::RelationalOperator;
pub use operators::{BuiltinEvaluator, RegexEvaluator};
pub use options::EvaluationOptions;
pub use registry::{EvaluatorRef, OperatorRegistry};
pub use verdict::Verdict;

// Re-export commonly used operator helpers
pub use operators::comparison::{node_compare, node_equal};
pub use operators::membership::contains_node;
