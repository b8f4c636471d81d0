//! Validation command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use nestcheck_core::{RecordLoader, RuleEngine, TaskRules, ValidationReport};
use tracing::{debug, info, instrument};

/// Handle the validate command
#[instrument(skip(config, output), fields(file = %args.record.display()))]
pub fn handle_validate(args: ValidateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("validate_command", &format!("file: {}", args.record.display()));
    output.info(&format!("Validating record: {}", args.record.display()))?;

    if !args.record.exists() {
        return Err(Error::FileNotFound {
            path: args.record.clone(),
        });
    }

    let task = RecordLoader::new().load_task(&args.record)?;
    debug!(id = %task.id, tasks = task.task_count(), "Loaded task record");

    let rules = TaskRules::with_config(config.rules.clone())?;
    let report = {
        let _validation_timer = Timer::new("rule_evaluation");
        let failures = rules.validate(&task);
        ValidationReport::from_failures_at(failures.as_ref(), &args.prefix)
    };

    output.report(&report)?;

    if report.is_empty() {
        info!("Validation completed successfully");
        Ok(())
    } else {
        for violation in &report {
            debug!(field = %violation.field, code = %violation.code, "{}", violation.message);
        }
        info!(violations = report.len(), "Validation failed");
        Err(Error::ValidationFailed {
            count: report.len(),
        })
    }
}
