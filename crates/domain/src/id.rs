//! Client identifiers — externally assigned, numeric or text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a [`Client`](crate::client::Client) as it appears in the
/// seed document: a JSON number or a JSON string.
///
/// Ids are assigned by whoever produced the seed document and are never
/// generated by this service. A single collection may mix both
/// representations, so every lookup goes through [`ClientId::matches`]
/// rather than `==`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClientId {
    /// Numeric identifier (`{"id": 1}`).
    Int(i64),
    /// Text identifier (`{"id": "40"}`).
    Text(String),
}

impl ClientId {
    /// Loose equality between identifiers.
    ///
    /// Same-representation values compare directly. A text value matches a
    /// numeric one when it parses to the same integer, so `"1"` matches `1`
    /// (and `"01"` does too) while `"abc"` matches no number. This is the
    /// only comparison lookups are allowed to use.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Int(number), Self::Text(text)) | (Self::Text(text), Self::Int(number)) => {
                text.parse::<i64>().is_ok_and(|parsed| parsed == *number)
            }
        }
    }
}

/// Path parameters parse numeric-first: a segment that reads as an `i64`
/// becomes [`ClientId::Int`], anything else becomes [`ClientId::Text`].
impl From<String> for ClientId {
    fn from(value: String) -> Self {
        match value.parse::<i64>() {
            Ok(number) => Self::Int(number),
            Err(_) => Self::Text(value),
        }
    }
}

impl From<&str> for ClientId {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(number) => number.fmt(f),
            Self::Text(text) => text.fmt(f),
        }
    }
}
