// ── Command words ──
//
// One API command is a command path followed by zero or more words.
// RouterOS distinguishes attribute words (`=key=value`, assignments sent
// with add/set/remove) from query words (`?key=value`, print filters).

use std::fmt;

use serde::{Deserialize, Serialize};

/// One argument of an API command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Word {
    /// Assignment form, rendered `=key=value`.
    Attribute { key: String, value: String },
    /// Print-filter form, rendered `?key=value`.
    Query { key: String, value: String },
}

impl Word {
    /// Build an attribute word (`=key=value`).
    pub fn attr(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Attribute {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Build a query word (`?key=value`).
    pub fn query(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Query {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Attribute { key, .. } | Self::Query { key, .. } => key,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Attribute { value, .. } | Self::Query { value, .. } => value,
        }
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query { .. })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute { key, value } => write!(f, "={key}={value}"),
            Self::Query { key, value } => write!(f, "?{key}={value}"),
        }
    }
}
