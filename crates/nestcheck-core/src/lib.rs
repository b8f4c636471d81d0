//! Nestcheck Core - nested record validation with path-addressed reports
//!
//! This crate validates recursively nested records and reports every
//! violation as a flat, ordered list. Each entry carries a path that locates
//! the failing field anywhere in the original structure:
//!
//! - `description` for a top-level field
//! - `subTasks[0].description` for a field of a nested record in a list
//! - `something[2]` for an element of a list of scalars
//!
//! ## Quick Start
//!
//! ```rust
//! use nestcheck_core::{RuleEngine, Task, TaskRules};
//!
//! let task = Task::new("id", "123")
//!     .with_sub_task(Task::new("subtask", ""))
//!     .with_something([35, 45, 20, 44, 15]);
//!
//! let report = TaskRules::new().check(&task);
//! assert_eq!(
//!     report.fields(),
//!     vec!["description", "subTasks[0].description", "something[2]", "something[4]"]
//! );
//! ```
//!
//! Copyright (c) 2025 Nestcheck Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod loader;
pub mod record;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use loader::{Format, LoaderError, RecordLoader};
pub use record::Task;
pub use validation::{
    flatten, join_path, validate_task, AddressedViolation, Branch, FailureNode, PathKey,
    RuleEngine, RulesConfig, TaskRules, ValidationReport, Violation,
};
