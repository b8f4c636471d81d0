//! Output formatting and writing utilities
//!
//! This module formats validation reports and other values as JSON, YAML,
//! or human-readable text. Reports go to stdout; logs go to stderr.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use nestcheck_core::{AddressedViolation, ValidationReport};
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use tracing::trace;

/// Trait for formatting output with specialized support for reports
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a validation report
    fn format_report(&self, report: &ValidationReport, use_color: bool) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_report(&self, report: &ValidationReport, use_color: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_report_human(report, use_color)),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a validation report. Machine formats always print the full
    /// array, even in quiet mode.
    pub fn report(&mut self, report: &ValidationReport) -> Result<()> {
        trace!(violations = report.len(), format = ?self.format, "Writing report");

        if self.quiet && self.format == OutputFormat::Human {
            return Ok(());
        }

        let formatted = self.format.format_report(report, self.use_color)?;
        self.writeln(formatted.trim_end())
    }
}

/// Format a report for human reading
fn format_report_human(report: &ValidationReport, use_color: bool) -> String {
    if report.is_empty() {
        let line = "✓ Record is valid";
        return if use_color { line.green().to_string() } else { line.to_string() };
    }

    let header = format!("✗ {} violation(s)", report.len());
    let mut output = if use_color { header.red().bold().to_string() } else { header };
    output.push('\n');

    let width = report.iter().map(|v| v.field.len()).max().unwrap_or(0);
    for violation in report {
        output.push_str(&format_violation_human(violation, width, use_color));
        output.push('\n');
    }

    output
}

/// Format one violation as an aligned line
fn format_violation_human(violation: &AddressedViolation, width: usize, use_color: bool) -> String {
    let field = format!("{:width$}", violation.field, width = width);
    let field = if use_color { field.cyan().to_string() } else { field };

    let mut line = format!("  {}  {}  [{}]", field, violation.message, violation.code);
    if !violation.params.is_empty() {
        let params = violation
            .params
            .iter()
            .map(|(name, value)| format!("{}={}", name, format_value_compact(value)))
            .collect::<Vec<_>>()
            .join(", ");
        line.push_str(&format!(" ({})", params));
    }
    line
}

/// Format a JSON value in a compact, human-readable way
fn format_value_compact(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}
