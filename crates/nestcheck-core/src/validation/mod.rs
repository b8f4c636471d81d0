//! Validation of nested records and flattening of their failures
//!
//! A [`RuleEngine`] evaluates a record and returns a [`FailureNode`] tree
//! shaped like the record, or `None` when every rule passed. [`flatten`]
//! linearizes that tree into [`AddressedViolation`]s whose `field` is a
//! dotted/bracketed path such as `subTasks[0].description`.
//!
//! Copyright (c) 2025 Nestcheck Team
//! Licensed under the Apache-2.0 license

pub mod failure;
pub mod flatten;
pub mod path;
pub mod rules;
pub mod violation;

// Re-export commonly used types
pub use failure::{Branch, FailureNode};
pub use flatten::{flatten, flatten_into};
pub use path::{join_path, PathKey};
pub use rules::{
    each, length, min_value, required, RuleEngine, RulesConfig, TaskRules, CODE_LENGTH_OUT_OF_RANGE,
    CODE_MIN_GREATER_EQUAL_THAN_REQUIRED, CODE_REQUIRED,
};
pub use violation::{AddressedViolation, Params, ValidationReport, Violation};

/// Validate a task with the default rules and return its report
///
/// # Examples
///
/// ```rust
/// use nestcheck_core::{validate_task, Task};
///
/// let task = Task::new("id", "123").with_something([35, 20]);
/// let report = validate_task(&task);
/// assert_eq!(report.fields(), vec!["description", "something[1]"]);
/// ```
pub fn validate_task(task: &crate::record::Task) -> ValidationReport {
    TaskRules::new().check(task)
}
