//! Runtime type tags for operand values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Runtime variant tag of a [`ValueNode`](crate::ValueNode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// JSON null
    Null,
    /// JSON boolean
    Boolean,
    /// JSON number (any representation)
    Number,
    /// JSON string
    String,
    /// JSON array
    Array,
    /// JSON object
    Object,
    /// Path resolved to nothing
    Undefined,
    /// Value the query language cannot express
    Unsupported,
}

impl ValueType {
    /// All tags, in declaration order
    pub const ALL: [ValueType; 8] = [
        Self::Null,
        Self::Boolean,
        Self::Number,
        Self::String,
        Self::Array,
        Self::Object,
        Self::Undefined,
        Self::Unsupported,
    ];

    /// Get the type literal name used in `type` predicates
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Undefined => "undefined",
            Self::Unsupported => "unsupported",
        }
    }

    /// Check if values of this type have a cardinality (length or key count)
    pub const fn is_sizeable(&self) -> bool {
        matches!(self, Self::String | Self::Array | Self::Object)
    }

    /// Check if values of this type support ordering comparisons
    pub const fn is_ordered(&self) -> bool {
        matches!(self, Self::Number | Self::String)
    }

    /// Check if this is a scalar JSON type
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Null | Self::Boolean | Self::Number | Self::String)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a type literal names no known type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown type literal: {0}")]
pub struct UnknownTypeName(pub String);

impl FromStr for ValueType {
    type Err = UnknownTypeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownTypeName(s.to_string()))
    }
}
