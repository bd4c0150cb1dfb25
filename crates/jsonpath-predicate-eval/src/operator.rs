//! Relational operators understood by the standard registry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EvalError;

/// Filter comparison and containment operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationalOperator {
    // Equality
    /// `==`
    Equals,
    /// `!=`
    NotEquals,

    // Ordering
    /// `<`
    LessThan,
    /// `<=`
    LessThanEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEqual,

    /// `=~` pattern match
    Regex,

    // Membership
    /// Left is an element of the right array
    In,
    /// Left is not an element of the right array
    NotIn,
    /// Left array holds right, or left string has right as substring
    Contains,
    /// Every element of the left array satisfies the nested predicate
    All,
    /// Every element of the left array is in the right array
    SubsetOf,
    /// Some element of the left array is in the right array
    AnyOf,
    /// No element of the left array is in the right array
    NoneOf,

    // Shape
    /// Cardinality of left equals the right number
    Size,
    /// Left has zero cardinality
    Empty,
    /// Left has non-zero cardinality
    NotEmpty,
    /// Left resolved to a value
    Exists,
    /// Runtime type of left matches the right type literal
    Type,
    /// Left satisfies the nested predicate
    Matches,
}

impl RelationalOperator {
    /// Every operator, in declaration order
    pub const ALL: [RelationalOperator; 20] = [
        Self::Equals,
        Self::NotEquals,
        Self::LessThan,
        Self::LessThanEqual,
        Self::GreaterThan,
        Self::GreaterThanEqual,
        Self::Regex,
        Self::In,
        Self::NotIn,
        Self::Contains,
        Self::All,
        Self::SubsetOf,
        Self::AnyOf,
        Self::NoneOf,
        Self::Size,
        Self::Empty,
        Self::NotEmpty,
        Self::Exists,
        Self::Type,
        Self::Matches,
    ];

    /// Get the surface token
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEqual => ">=",
            Self::Regex => "=~",
            Self::In => "in",
            Self::NotIn => "nin",
            Self::Contains => "contains",
            Self::All => "all",
            Self::SubsetOf => "subsetof",
            Self::AnyOf => "anyof",
            Self::NoneOf => "noneof",
            Self::Size => "size",
            Self::Empty => "empty",
            Self::NotEmpty => "not_empty",
            Self::Exists => "exists",
            Self::Type => "type",
            Self::Matches => "matches",
        }
    }

    /// Check if this is an ordering comparison
    pub const fn is_ordering(&self) -> bool {
        matches!(
            self,
            Self::LessThan | Self::LessThanEqual | Self::GreaterThan | Self::GreaterThanEqual
        )
    }

    /// Check if the operator consults the nested predicate in the context
    pub const fn uses_subpredicate(&self) -> bool {
        matches!(self, Self::All | Self::Matches)
    }

    /// Check if the operator never yields an error verdict
    pub const fn is_total(&self) -> bool {
        matches!(self, Self::Equals | Self::NotEquals | Self::Exists | Self::Type)
    }
}

impl fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for RelationalOperator {
    type Err = EvalError;

    /// Word operators match case-insensitively (`IN`, `SubsetOf`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| EvalError::unsupported_operator(s))
    }
}
