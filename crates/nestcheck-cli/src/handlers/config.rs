//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigInitArgs, ConfigShowArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
    }
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    if args.path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            args.path.display()
        ))?;
        return Ok(());
    }

    Config::default().save(&args.path)?;
    tracing::info!(path = %args.path.display(), "Wrote default configuration");
    output.success(&format!("✓ Created config at {}", args.path.display()))
}

/// Handle config show subcommand
fn handle_config_show(args: ConfigShowArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let rendered = match args.format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };
    output.writeln(rendered.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use tempfile::tempdir;

    fn quiet_output() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Human, false, true, Box::new(std::io::sink()))
    }

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".nestcheck.yaml");

        handle_config_init(ConfigInitArgs { path: path.clone(), force: false }, &mut quiet_output()).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".nestcheck.json");
        std::fs::write(&path, r#"{"rules": {"something_min": 1}}"#).unwrap();

        handle_config_init(ConfigInitArgs { path: path.clone(), force: false }, &mut quiet_output()).unwrap();
        assert_eq!(Config::from_file(&path).unwrap().rules.something_min, 1);

        handle_config_init(ConfigInitArgs { path: path.clone(), force: true }, &mut quiet_output()).unwrap();
        assert_eq!(Config::from_file(&path).unwrap().rules.something_min, 25);
    }
}
