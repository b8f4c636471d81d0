//! Task records: the nested entity validated by [`crate::validation::TaskRules`]

use serde::{Deserialize, Serialize};

/// A task with nested sub-tasks and a list of measurements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub id: String,
    pub is_done: bool,
    pub description: String,
    pub sub_tasks: Vec<Task>,
    pub something: Vec<i64>,
}

impl Task {
    pub fn new<I, D>(id: I, description: D) -> Self
    where
        I: Into<String>,
        D: Into<String>,
    {
        Self {
            id: id.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_sub_task(mut self, task: Task) -> Self {
        self.sub_tasks.push(task);
        self
    }

    pub fn with_something<I: IntoIterator<Item = i64>>(mut self, values: I) -> Self {
        self.something.extend(values);
        self
    }

    /// Total number of tasks in this tree, including `self`
    pub fn task_count(&self) -> usize {
        1 + self.sub_tasks.iter().map(Task::task_count).sum::<usize>()
    }
}
