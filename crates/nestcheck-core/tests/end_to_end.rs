//! End-to-end validation of task records through the default rule set

use nestcheck_core::validation::{
    CODE_LENGTH_OUT_OF_RANGE, CODE_MIN_GREATER_EQUAL_THAN_REQUIRED, CODE_REQUIRED,
};
use nestcheck_core::{RuleEngine, Task, TaskRules};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample_task() -> Task {
    serde_json::from_value(json!({
        "id": "id",
        "isDone": false,
        "description": "123",
        "subTasks": [{"id": "subtask", "description": ""}],
        "something": [35, 45, 20, 44, 15]
    }))
    .unwrap()
}

#[test]
fn test_sample_task_paths() {
    let report = TaskRules::new().check(&sample_task());

    assert_eq!(
        report.fields(),
        vec!["description", "subTasks[0].description", "something[2]", "something[4]"]
    );
    let codes: Vec<&str> = report.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(
        codes,
        vec![
            CODE_LENGTH_OUT_OF_RANGE,
            CODE_REQUIRED,
            CODE_MIN_GREATER_EQUAL_THAN_REQUIRED,
            CODE_MIN_GREATER_EQUAL_THAN_REQUIRED,
        ]
    );
}

#[test]
fn test_sample_task_report_json() {
    let report = TaskRules::new().check(&sample_task());

    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!([
            {
                "field": "description",
                "code": "length_out_of_range",
                "params": {"min": 5, "max": 100},
                "message": "the length must be between 5 and 100"
            },
            {
                "field": "subTasks[0].description",
                "code": "required",
                "message": "cannot be blank"
            },
            {
                "field": "something[2]",
                "code": "min_greater_equal_than_required",
                "params": {"threshold": 25},
                "message": "must be no less than 25"
            },
            {
                "field": "something[4]",
                "code": "min_greater_equal_than_required",
                "params": {"threshold": 25},
                "message": "must be no less than 25"
            }
        ])
    );
}

#[test]
fn test_failure_tree_text_form() {
    let failures = TaskRules::new().validate(&sample_task()).unwrap();
    assert_eq!(
        failures.to_string(),
        "description: the length must be between 5 and 100; \
         subTasks: (0: (description: cannot be blank)); \
         something: (2: must be no less than 25; 4: must be no less than 25)."
    );
}

#[test]
fn test_deeply_nested_sub_tasks() {
    let task = Task::new("root", "root description").with_sub_task(
        Task::new("a", "fine description")
            .with_sub_task(Task::new("b", "good description"))
            .with_sub_task(Task::new("c", "bad").with_something([1])),
    );

    let report = TaskRules::new().check(&task);
    assert_eq!(
        report.fields(),
        vec!["subTasks[0].subTasks[1].description", "subTasks[0].subTasks[1].something[0]"]
    );
}

#[test]
fn test_valid_task_is_distinguishable_from_failures() {
    let task = Task::new("ok", "a perfectly fine task").with_something([25, 100]);
    let rules = TaskRules::new();

    assert!(rules.validate(&task).is_none());
    assert!(rules.check(&task).into_result().is_ok());
    assert!(rules.check(&sample_task()).into_result().is_err());
}
