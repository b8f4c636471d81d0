//! Rule engine trait, predicate helpers, and the task rule set
//!
//! Copyright (c) 2025 Nestcheck Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::record::Task;
use crate::validation::failure::{Branch, FailureNode};
use crate::validation::violation::{ValidationReport, Violation};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Violation code for a blank required value
pub const CODE_REQUIRED: &str = "required";
/// Violation code for a string length outside its bounds
pub const CODE_LENGTH_OUT_OF_RANGE: &str = "length_out_of_range";
/// Violation code for a number below its lower bound
pub const CODE_MIN_GREATER_EQUAL_THAN_REQUIRED: &str = "min_greater_equal_than_required";

/// Evaluates declared field rules against a record.
///
/// `validate` returns `None` when every rule passed. Otherwise the failure
/// tree mirrors the record's shape.
pub trait RuleEngine {
    /// The type being validated
    type Record;

    /// Validate a record, returning its failure tree
    fn validate(&self, record: &Self::Record) -> Option<FailureNode>;

    /// Validate and flatten into a path-addressed report
    fn check(&self, record: &Self::Record) -> ValidationReport {
        let failures = self.validate(record);
        ValidationReport::from_failures(failures.as_ref())
    }
}

/// Fails on an empty value
pub fn required(value: &str) -> Option<Violation> {
    if value.is_empty() {
        Some(Violation::new(CODE_REQUIRED, "cannot be blank"))
    } else {
        None
    }
}

/// Fails when the character count of a non-empty value is outside
/// `[min, max]`. Empty values pass; pair with [`required`] to reject them.
pub fn length(value: &str, min: usize, max: usize) -> Option<Violation> {
    if value.is_empty() {
        return None;
    }

    let len = value.chars().count();
    if len < min || len > max {
        Some(
            Violation::new(
                CODE_LENGTH_OUT_OF_RANGE,
                format!("the length must be between {} and {}", min, max),
            )
            .with_param("min", min)
            .with_param("max", max),
        )
    } else {
        None
    }
}

/// Fails when `value < threshold`
pub fn min_value(value: i64, threshold: i64) -> Option<Violation> {
    if value < threshold {
        Some(
            Violation::new(
                CODE_MIN_GREATER_EQUAL_THAN_REQUIRED,
                format!("must be no less than {}", threshold),
            )
            .with_param("threshold", threshold),
        )
    } else {
        None
    }
}

/// Apply `rule` to every element, keying failures by position
pub fn each<T, F, N>(items: &[T], mut rule: F) -> Option<FailureNode>
where
    F: FnMut(&T) -> Option<N>,
    N: Into<FailureNode>,
{
    let mut branch = Branch::new();
    for (index, item) in items.iter().enumerate() {
        branch.insert_opt(index, rule(item));
    }
    branch.into_node()
}

/// Bounds applied by [`TaskRules`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Minimum description length in characters
    pub description_min: usize,
    /// Maximum description length in characters
    pub description_max: usize,
    /// Lower bound for every entry of `something`
    pub something_min: i64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            description_min: 5,
            description_max: 100,
            something_min: 25,
        }
    }
}

impl RulesConfig {
    /// Reject bounds that no value could satisfy
    pub fn validate(&self) -> Result<()> {
        if self.description_min > self.description_max {
            return Err(Error::configuration(format!(
                "description_min ({}) must not exceed description_max ({})",
                self.description_min, self.description_max
            )));
        }
        Ok(())
    }
}

/// Rule set for [`Task`] records.
///
/// - `description`: required, length within configured bounds
/// - `subTasks`: each sub-task validated recursively with the same rules
/// - `something`: each entry at least the configured minimum
#[derive(Debug, Clone, Default)]
pub struct TaskRules {
    config: RulesConfig,
}

impl TaskRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rule set from validated bounds
    pub fn with_config(config: RulesConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn validate_description(&self, description: &str) -> Option<Violation> {
        required(description).or_else(|| {
            length(
                description,
                self.config.description_min,
                self.config.description_max,
            )
        })
    }
}

impl RuleEngine for TaskRules {
    type Record = Task;

    fn validate(&self, task: &Task) -> Option<FailureNode> {
        debug!(
            id = %task.id,
            sub_tasks = task.sub_tasks.len(),
            something = task.something.len(),
            "Validating task"
        );

        let mut failures = Branch::new();
        failures.insert_opt("description", self.validate_description(&task.description));
        failures.insert_opt("subTasks", each(&task.sub_tasks, |sub| self.validate(sub)));
        failures.insert_opt(
            "something",
            each(&task.something, |value| min_value(*value, self.config.something_min)),
        );
        failures.into_node()
    }
}
