// crates/coffeeshop-cli/src/main.rs
// ============================================================================
// Module: Coffee Shop CLI Entry Point
// Description: Command dispatcher for configuration and docs workflows.
// Purpose: Provide offline tooling around the Coffee Shop config model.
// Dependencies: clap, coffeeshop-config, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The Coffee Shop CLI validates configuration files, prints resolved
//! configuration, and keeps the generated schema and docs artifacts current.
//! Config inputs are untrusted; every path goes through the strict loader.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use coffeeshop_config::EnvironmentConfig;
use coffeeshop_config::config_schema;
use coffeeshop_config::config_toml_example;
use coffeeshop_config::verify_config_docs;
use coffeeshop_config::write_config_docs;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "coffeeshop", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Generated documentation utilities.
    Docs {
        /// Selected docs subcommand.
        #[command(subcommand)]
        command: DocsCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a Coffee Shop configuration file.
    Validate(ConfigPathCommand),
    /// Load a configuration file and print the resolved values as JSON.
    Show(ConfigPathCommand),
    /// Print the configuration JSON Schema.
    Schema,
    /// Print the canonical `coffeeshop.toml` example.
    Example,
}

/// Documentation subcommands.
#[derive(Subcommand, Debug)]
enum DocsCommand {
    /// Regenerate the configuration reference markdown.
    Generate(DocsPathCommand),
    /// Verify the committed configuration reference is current.
    Check(DocsPathCommand),
}

/// Arguments for commands that load a configuration file.
#[derive(Args, Debug)]
struct ConfigPathCommand {
    /// Optional config file path (defaults to coffeeshop.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for docs generation and verification.
#[derive(Args, Debug)]
struct DocsPathCommand {
    /// Optional output path (defaults to the committed docs location).
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("coffeeshop {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Config {
            command,
        } => command_config(command),
        Commands::Docs {
            command,
        } => command_docs(command),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
        ConfigCommand::Show(command) => command_config_show(&command),
        ConfigCommand::Schema => command_config_schema(),
        ConfigCommand::Example => command_config_example(),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigPathCommand) -> CliResult<ExitCode> {
    let _config = EnvironmentConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(format!("config load failed: {err}")))?;
    write_stdout_line("config ok").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Loads a configuration file and prints the resolved values as JSON.
fn command_config_show(command: &ConfigPathCommand) -> CliResult<ExitCode> {
    let config = EnvironmentConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(format!("config load failed: {err}")))?;
    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|err| CliError::new(format!("config render failed: {err}")))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the configuration JSON Schema.
fn command_config_schema() -> CliResult<ExitCode> {
    let rendered = serde_json::to_string_pretty(&config_schema())
        .map_err(|err| CliError::new(format!("schema render failed: {err}")))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the canonical TOML example.
fn command_config_example() -> CliResult<ExitCode> {
    write_stdout_bytes(config_toml_example().as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Docs Commands
// ============================================================================

/// Dispatches docs subcommands.
fn command_docs(command: DocsCommand) -> CliResult<ExitCode> {
    match command {
        DocsCommand::Generate(command) => command_docs_generate(&command),
        DocsCommand::Check(command) => command_docs_check(&command),
    }
}

/// Regenerates the configuration reference markdown.
fn command_docs_generate(command: &DocsPathCommand) -> CliResult<ExitCode> {
    write_config_docs(command.out.as_deref())
        .map_err(|err| CliError::new(format!("docs generate failed: {err}")))?;
    write_stdout_line("docs written").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Verifies the committed configuration reference is current.
fn command_docs_check(command: &DocsPathCommand) -> CliResult<ExitCode> {
    verify_config_docs(command.out.as_deref())
        .map_err(|err| CliError::new(format!("docs check failed: {err}")))?;
    write_stdout_line("docs current").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output stream failure message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Writes an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
