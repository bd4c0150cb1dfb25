//! Evaluation options

use serde::{Deserialize, Serialize};

/// Configuration snapshot carried by every [`PredicateContext`](crate::PredicateContext)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationOptions {
    /// Surface unevaluable predicates as errors instead of treating them as false
    pub strict_errors: bool,
    /// Let `Undefined == Undefined` hold under the equality evaluators
    pub undefined_equals_undefined: bool,
}

impl EvaluationOptions {
    /// Lenient defaults: errors exclude the node, undefined equals nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with strict error reporting enabled
    pub fn strict() -> Self {
        Self::new().with_strict_errors(true)
    }

    pub fn with_strict_errors(mut self, strict: bool) -> Self {
        self.strict_errors = strict;
        self
    }

    pub fn with_undefined_equals_undefined(mut self, enabled: bool) -> Self {
        self.undefined_equals_undefined = enabled;
        self
    }

    /// Load options from JSON; missing fields keep their defaults
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
