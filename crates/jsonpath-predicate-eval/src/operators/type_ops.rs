//! Type Operators
//!
//! Implements: Type

use jsonpath_predicate_types::{ValueNode, ValueType};

/// Evaluate Type (`type`)
///
/// `right` names a type (`"number"`, `"Array"`, ...). Unknown names and
/// non-string literals simply do not match, so this never errors.
pub fn eval_type(left: &ValueNode, right: &ValueNode) -> bool {
    right
        .as_string()
        .and_then(|name| name.parse::<ValueType>().ok())
        .is_some_and(|expected| expected == left.value_type())
}
