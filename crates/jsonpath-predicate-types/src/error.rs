//! Narrowing errors for value nodes

use crate::ValueType;
use thiserror::Error;

/// Result type for narrowing accessors
pub type NarrowResult<T> = Result<T, TypeMismatch>;

/// A narrowing accessor was called on a node of a different variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Type mismatch: expected {expected}, found {found}")]
pub struct TypeMismatch {
    /// Variant the caller asked for
    pub expected: ValueType,
    /// Variant the node actually holds
    pub found: ValueType,
}

impl TypeMismatch {
    /// Create a type mismatch error
    pub fn new(expected: ValueType, found: ValueType) -> Self {
        Self { expected, found }
    }
}
