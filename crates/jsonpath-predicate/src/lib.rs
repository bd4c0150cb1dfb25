//! Filter predicate evaluation for JSONPath queries
//!
//! This crate provides the predicate layer of a JSONPath engine:
//! - A JSON-shaped value model with an explicit `Undefined` for unresolved paths
//! - Tri-state evaluation of relational operators (`==`, `<`, `in`, `=~`, ...)
//! - An extensible operator registry
//! - AND / OR / NOT composition with strict and lenient error handling
//!
//! Path resolution and expression parsing are left to the surrounding engine.
//!
//! # Example
//!
//! ```
//! use jsonpath_predicate::prelude::*;
//!
//! let registry = OperatorRegistry::with_standard_operators();
//! let book = ValueNode::from_json_str(r#"{"title": "Dune", "price": 8.99}"#).unwrap();
//! let price = book.as_object().and_then(|o| o.get("price")).cloned().unwrap_or(ValueNode::Undefined);
//!
//! let ctx = PredicateContext::new(&book, EvaluationOptions::default());
//! let verdict = registry.evaluate("<", &price, &ValueNode::number(10), &ctx);
//! assert_eq!(settle(verdict, &ctx), Ok(true));
//! ```

// Re-export all public APIs from internal crates
pub use jsonpath_predicate_eval as eval;
pub use jsonpath_predicate_types as types;

// Convenience re-exports
pub use jsonpath_predicate_eval::{
    EvalError, EvalResult, EvaluationOptions, OperatorRegistry, PredicateContext, Verdict,
};
pub use jsonpath_predicate_types::{ValueNode, ValueType};

/// Everything needed to evaluate filters
pub mod prelude {
    pub use jsonpath_predicate_eval::{
        Comparison, ErrorKind, EvalError, EvalResult, EvaluationOptions, Evaluator, FilterTree,
        Operand, OperatorRegistry, PredicateContext, RelationalOperator, SubPredicate, Verdict,
        combine_and, combine_not, combine_or, settle, sub_predicate,
    };
    pub use jsonpath_predicate_types::{ValueNode, ValueType};
}
