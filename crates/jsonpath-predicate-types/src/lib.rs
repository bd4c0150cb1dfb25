//! Operand values for JSONPath filter predicates
//!
//! This crate defines the value representation that predicate evaluators
//! consume:
//! - [`ValueNode`]: the closed set of JSON-shaped operand variants, plus
//!   `Undefined` (unresolved path) and `Unsupported`
//! - [`ValueType`]: runtime variant tags, also used as `type` literals
//! - Narrowing accessors that fail with [`TypeMismatch`]
//! - Conversion from and to `serde_json::Value`

pub mod error;
pub mod json;
pub mod value;
pub mod value_type;

pub use error::{NarrowResult, TypeMismatch};
pub use value::{ObjectMap, ValueNode};
pub use value_type::{UnknownTypeName, ValueType};
