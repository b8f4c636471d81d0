//! Violation types: the leaf payload of a failure tree and its flattened,
//! path-addressed form
//!
//! Copyright (c) 2025 Nestcheck Team
//! Licensed under the Apache-2.0 license

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Named parameters attached to a violation, e.g. the violated bound
pub type Params = IndexMap<String, Value>;

/// A single rule violation with machine-readable code and human message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Machine-readable violation kind
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Rule parameters, empty when not applicable
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub params: Params,
}

impl Violation {
    /// Create a violation without parameters
    pub fn new<C, M>(code: C, message: M) -> Self
    where
        C: Into<String>,
        M: Into<String>,
    {
        Self {
            code: code.into(),
            message: message.into(),
            params: Params::new(),
        }
    }

    /// Attach a named parameter
    pub fn with_param<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.params.insert(name.into(), value.into());
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A violation paired with the full path of the failing field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressedViolation {
    /// Dotted/bracketed path, e.g. `subTasks[0].description`
    pub field: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub params: Params,
    pub message: String,
}

impl AddressedViolation {
    /// Address a leaf violation at `field`
    pub fn new<F: Into<String>>(field: F, violation: &Violation) -> Self {
        Self {
            field: field.into(),
            code: violation.code.clone(),
            params: violation.params.clone(),
            message: violation.message.clone(),
        }
    }
}

impl fmt::Display for AddressedViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Flat, ordered report of every violation found in a record.
///
/// An empty report means validation ran and nothing failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    pub violations: Vec<AddressedViolation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are any violations
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get the number of violations
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AddressedViolation> {
        self.violations.iter()
    }

    /// Paths of all violations, in report order
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }

    /// Convert to result - Ok if no violations, Err if any exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "No violations");
        }
        write!(f, "{} violation(s):", self.len())?;
        for (i, violation) in self.violations.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

impl From<Vec<AddressedViolation>> for ValidationReport {
    fn from(violations: Vec<AddressedViolation>) -> Self {
        Self { violations }
    }
}

impl IntoIterator for ValidationReport {
    type Item = AddressedViolation;
    type IntoIter = std::vec::IntoIter<AddressedViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a AddressedViolation;
    type IntoIter = std::slice::Iter<'a, AddressedViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_shape() {
        let violation = Violation::new("length_out_of_range", "the length must be between 5 and 100")
            .with_param("min", 5)
            .with_param("max", 100);
        let addressed = AddressedViolation::new("subTasks[0].description", &violation);

        let value = serde_json::to_value(&addressed).unwrap();
        assert_eq!(
            value,
            json!({
                "field": "subTasks[0].description",
                "code": "length_out_of_range",
                "params": {"min": 5, "max": 100},
                "message": "the length must be between 5 and 100"
            })
        );
    }

    #[test]
    fn test_empty_params_are_omitted() {
        let addressed = AddressedViolation::new("description", &Violation::new("required", "cannot be blank"));
        let text = serde_json::to_string(&addressed).unwrap();
        assert_eq!(
            text,
            r#"{"field":"description","code":"required","message":"cannot be blank"}"#
        );
    }

    #[test]
    fn test_report_serializes_as_array() {
        let report = ValidationReport::new();
        assert_eq!(serde_json::to_string(&report).unwrap(), "[]");
    }

    #[test]
    fn test_report_into_result() {
        assert!(ValidationReport::new().into_result().is_ok());

        let report = ValidationReport::from(vec![AddressedViolation::new(
            "something[2]",
            &Violation::new("min_greater_equal_than_required", "must be no less than 25"),
        )]);
        let err = report.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.to_string(), "1 violation(s):\n1. something[2]: must be no less than 25");
    }
}
