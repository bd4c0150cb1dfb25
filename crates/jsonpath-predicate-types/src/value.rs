//! Operand values - runtime representation of JSON-shaped filter operands
//!
//! A [`ValueNode`] is what the path engine hands to a predicate evaluator once
//! an operand has been resolved against a document or read from a filter
//! literal. Nodes are immutable. There is deliberately no `PartialEq` impl:
//! equality and ordering are operator-specific and live in the evaluators.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;

use crate::error::{NarrowResult, TypeMismatch};
use crate::ValueType;

/// Object member map. Key order is kept for display only.
pub type ObjectMap = IndexMap<String, ValueNode>;

/// A fully resolved operand value.
#[derive(Debug, Clone)]
pub enum ValueNode {
    /// JSON null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number with decimal precision (`1` and `1.0` hold the same value)
    Number(Decimal),
    /// Number outside `Decimal` range or precision (`1e300`, `1e-30`)
    Float(f64),
    /// String value
    String(String),
    /// Ordered sequence of values
    Array(Vec<ValueNode>),
    /// String-keyed members
    Object(ObjectMap),
    /// The path did not resolve to anything (distinct from `Null`)
    Undefined,
    /// A value shape the query language cannot express
    Unsupported,
}

impl ValueNode {
    /// Get the runtime type tag of this node
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Number(_) | Self::Float(_) => ValueType::Number,
            Self::String(_) => ValueType::String,
            Self::Array(_) => ValueType::Array,
            Self::Object(_) => ValueType::Object,
            Self::Undefined => ValueType::Undefined,
            Self::Unsupported => ValueType::Unsupported,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }

    /// Try to get as Boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as Number
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get any number as a float
    ///
    /// Decimals are rounded to the nearest `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.to_f64(),
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Try to get as String
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as Array
    pub fn as_array(&self) -> Option<&[ValueNode]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get as Object
    pub fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Narrow to Boolean or fail with a type mismatch
    pub fn expect_boolean(&self) -> NarrowResult<bool> {
        self.as_boolean().ok_or_else(|| self.mismatch(ValueType::Boolean))
    }

    /// Narrow to a decimal Number or fail with a type mismatch
    ///
    /// `Float` nodes do not narrow; use [`ValueNode::as_f64`] for those.
    pub fn expect_number(&self) -> NarrowResult<Decimal> {
        self.as_number().ok_or_else(|| self.mismatch(ValueType::Number))
    }

    /// Narrow to String or fail with a type mismatch
    pub fn expect_string(&self) -> NarrowResult<&str> {
        self.as_string().ok_or_else(|| self.mismatch(ValueType::String))
    }

    /// Narrow to Array or fail with a type mismatch
    pub fn expect_array(&self) -> NarrowResult<&[ValueNode]> {
        self.as_array().ok_or_else(|| self.mismatch(ValueType::Array))
    }

    /// Narrow to Object or fail with a type mismatch
    pub fn expect_object(&self) -> NarrowResult<&ObjectMap> {
        self.as_object().ok_or_else(|| self.mismatch(ValueType::Object))
    }

    fn mismatch(&self, expected: ValueType) -> TypeMismatch {
        TypeMismatch::new(expected, self.value_type())
    }

    /// Cardinality of the node
    ///
    /// Array length, Object key count or String length in Unicode scalar
    /// values. `None` for every other variant.
    pub fn size(&self) -> Option<usize> {
        match self {
            Self::String(s) => Some(s.chars().count()),
            Self::Array(items) => Some(items.len()),
            Self::Object(map) => Some(map.len()),
            _ => None,
        }
    }

    pub fn null() -> Self {
        Self::Null
    }

    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Create a number value
    pub fn number(value: impl Into<Decimal>) -> Self {
        Self::Number(value.into())
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create an array value
    pub fn array(items: impl IntoIterator<Item = ValueNode>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    /// Create an object value
    pub fn object(members: impl IntoIterator<Item = (impl Into<String>, ValueNode)>) -> Self {
        Self::Object(members.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<bool> for ValueNode {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Decimal> for ValueNode {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for ValueNode {
    fn from(value: i64) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<i32> for ValueNode {
    fn from(value: i32) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<&str> for ValueNode {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ValueNode {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<ValueNode>> for ValueNode {
    fn from(value: Vec<ValueNode>) -> Self {
        Self::Array(value)
    }
}

impl fmt::Display for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n.normalize()),
            Self::Float(x) => write!(f, "{:e}", x),
            Self::String(s) => write!(f, "{:?}", s),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{:?}:{}", key, value)?;
                }
                write!(f, "}}")
            }
            Self::Undefined => write!(f, "undefined"),
            Self::Unsupported => write!(f, "<unsupported>"),
        }
    }
}
