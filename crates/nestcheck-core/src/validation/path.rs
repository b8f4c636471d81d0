//! Path keys and path joining for addressed violations
//!
//! Copyright (c) 2025 Nestcheck Team
//! Licensed under the Apache-2.0 license

use std::fmt;

/// A single step from a branch of the failure tree to one of its children.
///
/// The variant decides how the step is rendered in a path: a field name is
/// joined with a dot, a list position with brackets. A field literally named
/// `"0"` stays a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathKey {
    /// Named field inside an object-shaped value
    Field(String),
    /// Position inside a list-shaped value
    Index(usize),
}

impl PathKey {
    /// Create a field-name key
    pub fn field<S: Into<String>>(name: S) -> Self {
        Self::Field(name.into())
    }

    /// Create a list-index key
    pub fn index(position: usize) -> Self {
        Self::Index(position)
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(position) => write!(f, "{}", position),
        }
    }
}

impl From<&str> for PathKey {
    fn from(name: &str) -> Self {
        Self::Field(name.to_string())
    }
}

impl From<String> for PathKey {
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}

impl From<usize> for PathKey {
    fn from(position: usize) -> Self {
        Self::Index(position)
    }
}

/// Append `key` to an accumulated path.
///
/// An empty prefix yields the bare key, including a bare index such as
/// `"0"`. Otherwise indices use bracket notation (`a[2]`) and field names
/// use dot notation (`a.b`).
pub fn join_path(prefix: &str, key: &PathKey) -> String {
    if prefix.is_empty() {
        return key.to_string();
    }

    match key {
        PathKey::Index(position) => format!("{}[{}]", prefix, position),
        PathKey::Field(name) => format!("{}.{}", prefix, name),
    }
}
