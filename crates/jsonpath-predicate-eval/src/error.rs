//! Evaluation errors for predicate evaluators

use jsonpath_predicate_types::ValueType;
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Why a predicate could not be judged
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Operand variants are not supported by the operator
    #[error("Type mismatch: {operator} is not defined for {left} and {right}")]
    TypeMismatch {
        operator: String,
        left: ValueType,
        right: ValueType,
    },

    /// No evaluator is registered for the token
    #[error("Unsupported operator: {operator}")]
    UnsupportedOperator { operator: String },

    /// An operand could not be turned into the resource the operator needs
    #[error("Malformed operand for {operator}: {message}")]
    MalformedOperand { operator: String, message: String },

    /// An operand is undefined and the operator has no behavior for it
    #[error("Unresolved operand for {operator}")]
    UnresolvedOperand { operator: String },
}

/// Discriminant of [`EvalError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    UnsupportedOperator,
    MalformedOperand,
    UnresolvedOperand,
}

impl EvalError {
    /// Create a type mismatch error
    pub fn type_mismatch(operator: impl Into<String>, left: ValueType, right: ValueType) -> Self {
        Self::TypeMismatch {
            operator: operator.into(),
            left,
            right,
        }
    }

    /// Create an unsupported operator error
    pub fn unsupported_operator(operator: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            operator: operator.into(),
        }
    }

    /// Create a malformed operand error
    pub fn malformed_operand(operator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedOperand {
            operator: operator.into(),
            message: message.into(),
        }
    }

    /// Create an unresolved operand error
    pub fn unresolved_operand(operator: impl Into<String>) -> Self {
        Self::UnresolvedOperand {
            operator: operator.into(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
            Self::MalformedOperand { .. } => ErrorKind::MalformedOperand,
            Self::UnresolvedOperand { .. } => ErrorKind::UnresolvedOperand,
        }
    }

    /// Get the operator token the error was raised for
    pub fn operator(&self) -> &str {
        match self {
            Self::TypeMismatch { operator, .. }
            | Self::UnsupportedOperator { operator }
            | Self::MalformedOperand { operator, .. }
            | Self::UnresolvedOperand { operator } => operator,
        }
    }
}

/// Errors raised while building an operator registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The token already has an evaluator; registration is append-only
    #[error("Operator already registered: {token}")]
    DuplicateOperator { token: String },

    /// The token is empty or contains whitespace
    #[error("Invalid operator token: {token:?}")]
    InvalidToken { token: String },
}
