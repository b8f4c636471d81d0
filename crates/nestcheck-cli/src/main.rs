//! Nestcheck CLI - validate nested records and report violations by path
//!
//! This is the main entry point for the nestcheck CLI application. It loads
//! a record, runs the rule engine, and prints every violation with the
//! dotted/bracketed path of the failing field.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::io::IsTerminal;
use std::process;
use tracing::instrument;

fn main() {
    let cli = Cli::parse_args();

    control::set_override(cli.use_color());

    // Configuration feeds logging, so load it before the subscriber exists.
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli, &config) {
        exit_with(&e);
    }
}

fn exit_with(error: &error::Error) -> ! {
    if !error.is_reported() {
        eprintln!("{}", error::format_error(error, std::io::stderr().is_terminal()));
    }
    process::exit(error.exit_code());
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = cli.output.unwrap_or_else(|| config.output_format());
    let use_color = cli.use_color() && config.output.color;
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Validate(args) => handlers::handle_validate(args, config, &mut output),
        Commands::Config(args) => handlers::handle_config(args, config, &mut output),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    logging::init_logging(effective_logging_config(cli, config))
}

/// Combine verbosity flags, the config file and the environment
fn effective_logging_config(cli: &Cli, config: &Config) -> LoggingConfig {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_file(&config.logging, cli.verbosity_level());
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging_config
}
