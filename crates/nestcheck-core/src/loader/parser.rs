//! Record parsing for YAML and JSON formats
//!
//! Copyright (c) 2025 Nestcheck Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use crate::record::Task;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// Supported file formats for record files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(LoaderError::unsupported_format(path.to_path_buf())),
        }
    }
}

/// Loads records from disk, detecting the format from the extension
#[derive(Debug, Default)]
pub struct RecordLoader;

impl RecordLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a task record from a `.json`, `.yaml` or `.yml` file
    pub fn load_task(&self, path: &Path) -> LoaderResult<Task> {
        self.load(path)
    }

    /// Parse a task record from content in an explicit format
    pub fn parse_task(&self, content: &str, format: Format, path: &Path) -> LoaderResult<Task> {
        self.parse(content, format, path)
    }

    /// Load any deserializable record
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> LoaderResult<T> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;
        debug!(path = %path.display(), bytes = content.len(), ?format, "Read record file");

        self.parse(&content, format, path)
    }

    /// Parse any deserializable record
    pub fn parse<T: DeserializeOwned>(
        &self,
        content: &str,
        format: Format,
        path: &Path,
    ) -> LoaderResult<T> {
        match format {
            Format::Yaml => serde_yaml::from_str(content)
                .map_err(|e| LoaderError::yaml_parse_error(path.to_path_buf(), e)),
            Format::Json => serde_json::from_str(content)
                .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path(Path::new("task.yaml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("task.YML")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("task.json")).unwrap(), Format::Json);
        assert!(Format::from_path(Path::new("task.txt")).is_err());
        assert!(Format::from_path(Path::new("task")).is_err());
    }

    #[test]
    fn test_load_json_task() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("task.json");
        fs::write(&path, r#"{"id": "t1", "description": "hello world", "something": [30]}"#).unwrap();

        let task = RecordLoader::new().load_task(&path).unwrap();
        assert_eq!(task.id, "t1");
        assert_eq!(task.something, vec![30]);
    }

    #[test]
    fn test_load_yaml_task() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("task.yaml");
        fs::write(
            &path,
            "id: t1\ndescription: hello world\nsubTasks:\n  - id: sub\n    isDone: true\n",
        )
        .unwrap();

        let task = RecordLoader::new().load_task(&path).unwrap();
        assert_eq!(task.sub_tasks.len(), 1);
        assert!(task.sub_tasks[0].is_done);
    }

    #[test]
    fn test_parse_error_keeps_path() {
        let result = RecordLoader::new().parse_task("{not json", Format::Json, Path::new("bad.json"));
        let err = result.unwrap_err();
        assert!(err.is_parse_error());
        assert_eq!(err.path(), Path::new("bad.json"));
    }

    #[test]
    fn test_missing_file() {
        let err = RecordLoader::new()
            .load_task(Path::new("/nonexistent/task.json"))
            .unwrap_err();
        assert!(matches!(err, LoaderError::IoError { .. }));
    }
}
