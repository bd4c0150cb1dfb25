//! Conversion between `serde_json::Value` and [`ValueNode`]

use rust_decimal::Decimal;
use serde_json::{Number, Value as JsonValue};
use std::str::FromStr;

use crate::ValueNode;

impl From<JsonValue> for ValueNode {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Boolean(b),
            JsonValue::Number(n) => number_to_node(&n),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(members) => {
                Self::Object(members.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&JsonValue> for ValueNode {
    fn from(value: &JsonValue) -> Self {
        Self::from(value.clone())
    }
}

/// Convert through the number's decimal text so `1` and `1.0` land on the
/// same value. Numbers `Decimal` cannot hold (`1e300`, `1e-30`) are kept as
/// `Float`.
fn number_to_node(n: &Number) -> ValueNode {
    let text = n.to_string();
    match Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)) {
        // underflow may round to zero; only a true zero stays decimal
        Ok(d) if !d.is_zero() || n.as_f64() == Some(0.0) => ValueNode::Number(d),
        _ => n
            .as_f64()
            .filter(|x| x.is_finite())
            .map_or(ValueNode::Unsupported, ValueNode::Float),
    }
}

impl ValueNode {
    /// Parse JSON text into a node
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<JsonValue>(text).map(Self::from)
    }

    /// Convert back to JSON
    ///
    /// Returns `None` when the node (or anything nested in it) is `Undefined`
    /// or `Unsupported`, since JSON has no spelling for those.
    pub fn to_json(&self) -> Option<JsonValue> {
        match self {
            Self::Null => Some(JsonValue::Null),
            Self::Boolean(b) => Some(JsonValue::Bool(*b)),
            Self::Number(d) => decimal_to_json(d),
            Self::Float(x) => Number::from_f64(*x).map(JsonValue::Number),
            Self::String(s) => Some(JsonValue::String(s.clone())),
            Self::Array(items) => items
                .iter()
                .map(Self::to_json)
                .collect::<Option<Vec<_>>>()
                .map(JsonValue::Array),
            Self::Object(map) => map
                .iter()
                .map(|(k, v)| v.to_json().map(|v| (k.clone(), v)))
                .collect::<Option<serde_json::Map<_, _>>>()
                .map(JsonValue::Object),
            Self::Undefined | Self::Unsupported => None,
        }
    }
}

fn decimal_to_json(d: &Decimal) -> Option<JsonValue> {
    let normalized = d.normalize();
    if normalized.scale() == 0 {
        if let Ok(i) = i64::try_from(normalized) {
            return Some(JsonValue::from(i));
        }
    }
    serde_json::from_str::<JsonValue>(&normalized.to_string()).ok()
}
