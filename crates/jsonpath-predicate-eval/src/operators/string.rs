//! String Operators
//!
//! Implements: Regex (`=~`)
//!
//! The right operand is a pattern literal, either `/body/flags` or a bare
//! pattern. The pattern must match the whole subject, not just part of it.

use super::require;
use crate::context::PredicateContext;
use crate::error::{EvalError, EvalResult};
use crate::evaluator::Evaluator;
use crate::operator::RelationalOperator;
use crate::verdict::Verdict;
use jsonpath_predicate_types::ValueNode;
use log::trace;
use parking_lot::RwLock;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::Arc;

/// Upper bound on memoized patterns per evaluator
const MAX_MEMOIZED_PATTERNS: usize = 256;

/// Compile a pattern literal
///
/// `/body/flags` literals accept the flags `i` (case-insensitive), `m`
/// (multi-line), `s` (dot matches newline) and `x` (ignore whitespace and
/// `#` comments). `u`, `U` and `d` need no setting: classes and case folding
/// are always Unicode-aware and only `\n` ends a line. Other flag letters are
/// ignored.
///
/// The compiled regex is anchored at both ends of the subject.
pub fn compile_pattern(literal: &str) -> EvalResult<Regex> {
    let (body, flags) = split_literal(literal);
    let extended = flags.contains('x');

    // a trailing `#` comment must not swallow the closing anchor
    let anchored = format!(r"\A(?:{}{})\z", body, if extended { "\n" } else { "" });
    let mut builder = RegexBuilder::new(&anchored);
    builder.ignore_whitespace(extended);
    for flag in flags.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'x' | 'u' | 'U' | 'd' => {}
            other => trace!("ignoring pattern flag '{}' in {}", other, literal),
        }
    }

    trace!("compiling pattern {}", literal);
    builder
        .build()
        .map_err(|e| EvalError::malformed_operand(RelationalOperator::Regex.token(), e.to_string()))
}

fn split_literal(literal: &str) -> (&str, &str) {
    if let Some(rest) = literal.strip_prefix('/') {
        if let Some(end) = rest.rfind('/') {
            return (&rest[..end], &rest[end + 1..]);
        }
    }
    (literal, "")
}

/// Evaluate Regex (`=~`) with a caller-supplied compile step
pub fn eval_regex<C>(left: &ValueNode, right: &ValueNode, compile: C) -> EvalResult<bool>
where
    C: FnOnce(&str) -> EvalResult<Arc<Regex>>,
{
    let op = RelationalOperator::Regex;
    let subject = require(op, left, right, left.expect_string())?;
    let literal = require(op, left, right, right.expect_string())?;
    let pattern = compile(literal)?;
    Ok(pattern.is_match(subject))
}

/// Regex evaluator with compiled-pattern reuse
///
/// Built either for dynamic patterns taken from the right operand (compiled
/// on first use and memoized per literal) or for one fixed pattern compiled
/// at construction, in which case the right operand is ignored.
pub struct RegexEvaluator {
    fixed: Option<Arc<Regex>>,
    memo: RwLock<HashMap<String, Arc<Regex>>>,
}

impl Default for RegexEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexEvaluator {
    /// Create an evaluator that reads patterns from the right operand
    pub fn new() -> Self {
        Self {
            fixed: None,
            memo: RwLock::new(HashMap::new()),
        }
    }

    /// Create an evaluator for one pattern, failing now if it is malformed
    pub fn with_pattern(literal: &str) -> EvalResult<Self> {
        let compiled = compile_pattern(literal)?;
        Ok(Self {
            fixed: Some(Arc::new(compiled)),
            memo: RwLock::new(HashMap::new()),
        })
    }

    /// Number of memoized patterns
    pub fn memoized(&self) -> usize {
        self.memo.read().len()
    }

    fn compiled(&self, literal: &str) -> EvalResult<Arc<Regex>> {
        if let Some(pattern) = self.memo.read().get(literal) {
            return Ok(Arc::clone(pattern));
        }

        let pattern = Arc::new(compile_pattern(literal)?);
        let mut memo = self.memo.write();
        if memo.len() < MAX_MEMOIZED_PATTERNS {
            memo.entry(literal.to_string())
                .or_insert_with(|| Arc::clone(&pattern));
        }
        Ok(pattern)
    }

    fn matches(&self, left: &ValueNode, right: &ValueNode) -> EvalResult<bool> {
        match &self.fixed {
            Some(pattern) => {
                let subject = require(RelationalOperator::Regex, left, right, left.expect_string())?;
                Ok(pattern.is_match(subject))
            }
            None => eval_regex(left, right, |literal| self.compiled(literal)),
        }
    }
}

impl Evaluator for RegexEvaluator {
    fn evaluate(&self, left: &ValueNode, right: &ValueNode, _ctx: &PredicateContext<'_>) -> Verdict {
        Verdict::from(self.matches(left, right))
    }
}

impl std::fmt::Debug for RegexEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegexEvaluator")
            .field("fixed", &self.fixed.as_ref().map(|p| p.as_str()))
            .field("memoized", &self.memoized())
            .finish()
    }
}
