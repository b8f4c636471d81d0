//! Nested failure tree produced by a rule engine
//!
//! The tree mirrors the shape of the validated record: object-shaped
//! values nest through field-name keys, list-shaped values through
//! index keys, and every leaf carries one [`Violation`].
//!
//! Copyright (c) 2025 Nestcheck Team
//! Licensed under the Apache-2.0 license

use crate::validation::path::PathKey;
use crate::validation::violation::Violation;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Node of a failure tree
#[derive(Debug, Clone, PartialEq)]
pub enum FailureNode {
    /// A single violation on the addressed field
    Leaf(Violation),
    /// Nested failures keyed by field name or list index
    Branch(Branch),
}

impl FailureNode {
    /// Number of leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(branch) => branch.iter().map(|(_, child)| child.leaf_count()).sum(),
        }
    }
}

impl From<Violation> for FailureNode {
    fn from(violation: Violation) -> Self {
        Self::Leaf(violation)
    }
}

impl From<Branch> for FailureNode {
    fn from(branch: Branch) -> Self {
        Self::Branch(branch)
    }
}

impl fmt::Display for FailureNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(violation) => f.write_str(&violation.message),
            Self::Branch(branch) => {
                branch.fmt_entries(f)?;
                f.write_str(".")
            }
        }
    }
}

impl Serialize for FailureNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(violation) => serializer.serialize_str(&violation.message),
            Self::Branch(branch) => branch.serialize(serializer),
        }
    }
}

/// Insertion-ordered mapping from path key to child node.
///
/// Sibling order in a flattened report follows insertion order here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Branch {
    entries: IndexMap<PathKey, FailureNode>,
}

impl Branch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a child. Re-inserting an existing key replaces the child in
    /// place and keeps its original position.
    pub fn insert<K, N>(&mut self, key: K, node: N) -> &mut Self
    where
        K: Into<PathKey>,
        N: Into<FailureNode>,
    {
        self.entries.insert(key.into(), node.into());
        self
    }

    /// Builder form of [`Branch::insert`]
    pub fn with<K, N>(mut self, key: K, node: N) -> Self
    where
        K: Into<PathKey>,
        N: Into<FailureNode>,
    {
        self.insert(key, node);
        self
    }

    /// Insert a child only when there is one
    pub fn insert_opt<K, N>(&mut self, key: K, node: Option<N>) -> &mut Self
    where
        K: Into<PathKey>,
        N: Into<FailureNode>,
    {
        if let Some(node) = node {
            self.insert(key, node);
        }
        self
    }

    pub fn get(&self, key: &PathKey) -> Option<&FailureNode> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, PathKey, FailureNode> {
        self.entries.iter()
    }

    /// Wrap as a node, or `None` when nothing failed
    pub fn into_node(self) -> Option<FailureNode> {
        if self.is_empty() {
            None
        } else {
            Some(FailureNode::Branch(self))
        }
    }

    fn fmt_entries(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, child)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            match child {
                FailureNode::Leaf(violation) => write!(f, "{}: {}", key, violation.message)?,
                FailureNode::Branch(nested) => {
                    write!(f, "{}: (", key)?;
                    nested.fmt_entries(f)?;
                    f.write_str(")")?;
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Branch {
    type Item = (&'a PathKey, &'a FailureNode);
    type IntoIter = indexmap::map::Iter<'a, PathKey, FailureNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<PathKey>> FromIterator<(K, FailureNode)> for Branch {
    fn from_iter<I: IntoIterator<Item = (K, FailureNode)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, child) in &self.entries {
            map.serialize_entry(&key.to_string(), child)?;
        }
        map.end()
    }
}
