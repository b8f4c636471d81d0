//! Flattening of failure trees into path-addressed violations
//!
//! Copyright (c) 2025 Nestcheck Team
//! Licensed under the Apache-2.0 license

use crate::validation::failure::FailureNode;
use crate::validation::path::join_path;
use crate::validation::violation::{AddressedViolation, ValidationReport};
use tracing::{debug, trace};

/// Walk `node` depth-first and emit one addressed violation per leaf.
///
/// A leaf is addressed at `prefix` itself. Branch children are visited in
/// insertion order, so every violation under an earlier key precedes every
/// violation under a later one. An empty branch yields nothing.
///
/// # Examples
///
/// ```rust
/// use nestcheck_core::validation::{flatten, Branch, FailureNode, Violation};
///
/// let tree: FailureNode = Branch::new()
///     .with("subTasks", Branch::new().with(0usize, Branch::new()
///         .with("description", Violation::new("too_short", "too short"))))
///     .into();
///
/// let flat = flatten(&tree, "");
/// assert_eq!(flat.len(), 1);
/// assert_eq!(flat[0].field, "subTasks[0].description");
/// assert_eq!(flat[0].code, "too_short");
/// ```
pub fn flatten(node: &FailureNode, prefix: &str) -> Vec<AddressedViolation> {
    let mut out = Vec::with_capacity(node.leaf_count());
    flatten_into(node, prefix, &mut out);
    debug!(prefix = prefix, violations = out.len(), "Flattened failure tree");
    out
}

/// Same walk as [`flatten`], appending to a caller-supplied buffer
pub fn flatten_into(node: &FailureNode, prefix: &str, out: &mut Vec<AddressedViolation>) {
    match node {
        FailureNode::Leaf(violation) => {
            trace!(field = prefix, code = %violation.code, "Addressed violation");
            out.push(AddressedViolation::new(prefix, violation));
        }
        FailureNode::Branch(branch) => {
            for (key, child) in branch {
                let child_path = join_path(prefix, key);
                flatten_into(child, &child_path, out);
            }
        }
    }
}

impl ValidationReport {
    /// Build a report from a rule engine outcome. `None` (nothing failed)
    /// gives an empty report.
    pub fn from_failures(failures: Option<&FailureNode>) -> Self {
        Self::from_failures_at(failures, "")
    }

    /// Like [`ValidationReport::from_failures`], rooting every path at `prefix`
    pub fn from_failures_at(failures: Option<&FailureNode>, prefix: &str) -> Self {
        match failures {
            Some(tree) => Self::from(flatten(tree, prefix)),
            None => Self::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::failure::Branch;
    use crate::validation::violation::Violation;

    fn leaf(code: &str) -> Violation {
        Violation::new(code, format!("{} message", code))
    }

    #[test]
    fn test_leaf_identity() {
        let violation = leaf("required").with_param("min", 5);
        let flat = flatten(&FailureNode::Leaf(violation.clone()), "x");

        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].field, "x");
        assert_eq!(flat[0].code, violation.code);
        assert_eq!(flat[0].message, violation.message);
        assert_eq!(flat[0].params, violation.params);
    }

    #[test]
    fn test_empty_branch() {
        let empty = FailureNode::Branch(Branch::new());
        assert!(flatten(&empty, "").is_empty());
        assert!(flatten(&empty, "anything.at[3]").is_empty());
    }

    #[test]
    fn test_nested_mixed_keys() {
        let tree: FailureNode = Branch::new()
            .with(
                "subTasks",
                Branch::new().with(0usize, Branch::new().with("description", leaf("too_short"))),
            )
            .into();

        let flat = flatten(&tree, "");
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].field, "subTasks[0].description");
        assert_eq!(flat[0].code, "too_short");
    }

    #[test]
    fn test_top_level_index_is_bare() {
        let tree: FailureNode = Branch::new().with(2usize, leaf("min")).into();
        assert_eq!(flatten(&tree, "")[0].field, "2");
        assert_eq!(flatten(&tree, "something")[0].field, "something[2]");
    }

    #[test]
    fn test_sibling_order_follows_insertion() {
        let tree: FailureNode = Branch::new()
            .with("zeta", Branch::new().with("inner", leaf("a")).with("other", leaf("b")))
            .with("alpha", leaf("c"))
            .into();

        let fields: Vec<String> = flatten(&tree, "").into_iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["zeta.inner", "zeta.other", "alpha"]);
    }

    #[test]
    fn test_flatten_into_appends() {
        let mut out = vec![AddressedViolation::new("first", &leaf("x"))];
        flatten_into(&FailureNode::Leaf(leaf("y")), "second", &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].field, "second");
    }

    #[test]
    fn test_report_from_failures() {
        assert!(ValidationReport::from_failures(None).is_empty());

        let tree: FailureNode = Branch::new().with("a", leaf("x")).into();
        let report = ValidationReport::from_failures_at(Some(&tree), "task");
        assert_eq!(report.fields(), vec!["task.a"]);
    }
}
