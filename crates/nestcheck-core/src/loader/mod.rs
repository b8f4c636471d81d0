//! Record loading from JSON and YAML files
//!
//! # Example Usage
//!
//! ```no_run
//! use nestcheck_core::loader::RecordLoader;
//! use std::path::Path;
//!
//! let task = RecordLoader::new().load_task(Path::new("task.yaml"))?;
//! println!("Loaded task {} with {} sub-task(s)", task.id, task.sub_tasks.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Nestcheck Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;

pub use error::{LoaderError, LoaderResult};
pub use parser::{Format, RecordLoader};
