//! Operator integration tests for predicate evaluation
//!
//! These tests verify operator behavior including:
//! - Correct verdicts for matching and mismatching operand variants
//! - Error kinds for unevaluable operand pairs
//! - Nested predicates for `all` and `matches`
//! - Edge cases and boundary conditions

mod common;
mod comparison;
mod membership;
mod nested;
mod regex;
