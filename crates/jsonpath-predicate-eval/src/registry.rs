//! Operator registry for the predicate engine
//!
//! Maps operator tokens to their evaluator implementations. A registry is
//! built once (standard operators plus any custom ones), then shared read-only,
//! typically behind an `Arc`. Registration needs `&mut self`, so it cannot
//! happen after the registry has been shared.

use crate::context::PredicateContext;
use crate::error::{EvalError, RegistryError};
use crate::evaluator::Evaluator;
use crate::operator::RelationalOperator;
use crate::operators::{BuiltinEvaluator, RegexEvaluator};
use crate::verdict::Verdict;
use jsonpath_predicate_types::ValueNode;
use log::{debug, trace};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Shared evaluator handle
pub type EvaluatorRef = Arc<dyn Evaluator>;

/// Append-only token to evaluator table
#[derive(Default)]
pub struct OperatorRegistry {
    evaluators: HashMap<String, EvaluatorRef>,
}

fn normalize(token: &str) -> String {
    token.trim().to_ascii_lowercase()
}

impl OperatorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with all standard operators registered
    pub fn with_standard_operators() -> Self {
        let mut registry = Self::new();
        registry.register_standard_operators();
        registry
    }

    /// Register every [`RelationalOperator`] not registered yet
    ///
    /// `=~` gets a memoizing [`RegexEvaluator`]; everything else a
    /// [`BuiltinEvaluator`]. Returns how many were added.
    pub fn register_standard_operators(&mut self) -> usize {
        let mut added = 0;
        for op in RelationalOperator::ALL {
            if self.contains(op.token()) {
                continue;
            }
            let evaluator: EvaluatorRef = match op {
                RelationalOperator::Regex => Arc::new(RegexEvaluator::new()),
                other => Arc::new(BuiltinEvaluator::new(other)),
            };
            self.evaluators.insert(op.token().to_string(), evaluator);
            added += 1;
        }
        debug!("registered {} standard operators", added);
        added
    }

    /// Register an evaluator for a token
    ///
    /// Tokens are case-insensitive. Registration is append-only: a token that
    /// already has an evaluator is rejected.
    pub fn register(
        &mut self,
        token: impl Into<String>,
        evaluator: EvaluatorRef,
    ) -> Result<(), RegistryError> {
        let token = token.into();
        let key = normalize(&token);
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidToken { token });
        }
        if self.evaluators.contains_key(&key) {
            return Err(RegistryError::DuplicateOperator { token: key });
        }

        debug!("registering operator {}", key);
        self.evaluators.insert(key, evaluator);
        Ok(())
    }

    /// Register a closure as the evaluator for a token
    pub fn register_fn<F>(&mut self, token: impl Into<String>, f: F) -> Result<(), RegistryError>
    where
        F: Fn(&ValueNode, &ValueNode, &PredicateContext<'_>) -> Verdict + Send + Sync + 'static,
    {
        self.register(token, Arc::new(f))
    }

    /// Get the evaluator for a token
    pub fn get(&self, token: &str) -> Option<&EvaluatorRef> {
        self.evaluators
            .get(token)
            .or_else(|| self.evaluators.get(&normalize(token)))
    }

    /// Check if a token has an evaluator
    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    /// Registered tokens, sorted
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.evaluators.keys().map(String::as_str).collect();
        tokens.sort_unstable();
        tokens
    }

    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }

    /// Evaluate one leaf comparison
    ///
    /// An unknown token yields an `UnsupportedOperator` error verdict.
    pub fn evaluate(
        &self,
        token: &str,
        left: &ValueNode,
        right: &ValueNode,
        ctx: &PredicateContext<'_>,
    ) -> Verdict {
        match self.get(token) {
            Some(evaluator) => evaluator.evaluate(left, right, ctx),
            None => {
                trace!("no evaluator registered for {}", token);
                Verdict::Error(EvalError::unsupported_operator(token))
            }
        }
    }
}

impl fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorRegistry")
            .field("tokens", &self.tokens())
            .finish()
    }
}
