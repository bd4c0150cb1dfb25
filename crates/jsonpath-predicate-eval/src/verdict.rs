//! Tri-state predicate results

use crate::error::{ErrorKind, EvalError, EvalResult};
use std::fmt;

/// Outcome of evaluating a predicate
///
/// `Error` means the predicate could not be judged for its operands. Whether
/// that counts as `false` is decided by the combinator, never by evaluators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    True,
    False,
    Error(EvalError),
}

impl Verdict {
    pub fn is_true(&self) -> bool {
        matches!(self, Self::True)
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Self::False)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Get the error, if the predicate was unevaluable
    pub fn error(&self) -> Option<&EvalError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Get the error kind, if the predicate was unevaluable
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error().map(EvalError::kind)
    }

    /// Get the boolean value, if the predicate was evaluable
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Error(_) => None,
        }
    }

    /// Convert into a result, keeping the error
    pub fn into_result(self) -> EvalResult<bool> {
        match self {
            Self::True => Ok(true),
            Self::False => Ok(false),
            Self::Error(err) => Err(err),
        }
    }
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<EvalError> for Verdict {
    fn from(err: EvalError) -> Self {
        Self::Error(err)
    }
}

impl From<EvalResult<bool>> for Verdict {
    fn from(result: EvalResult<bool>) -> Self {
        match result {
            Ok(value) => Self::from(value),
            Err(err) => Self::Error(err),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Error(err) => write!(f, "error: {}", err),
        }
    }
}
