//! Binary entry point for instinct.
//!
//! This binary provides the CLI interface for the instinct store and the
//! Claude Code documentation write gate.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use instinct::commands::{self, HookEvent};
use instinct::config::InstinctConfig;
use instinct::hooks::GateDecision;
use std::path::PathBuf;
use std::process::ExitCode;

/// Instinct - instinct tracking and documentation write gating for AI coding assistants.
#[derive(Parser)]
#[command(name = "instinct")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Show instincts sorted by confidence.
    Status,

    /// Export the store to a file.
    Export {
        /// Output path (default: date-stamped file in the data directory).
        output: Option<PathBuf>,
    },

    /// Import instincts from a file, discounting their confidence.
    Import {
        /// Path to a JSON array of instinct records.
        input: PathBuf,
    },

    /// Report high-confidence clusters ready for skill promotion.
    Evolve,

    /// Handle Claude Code hooks.
    Hook {
        /// Hook event type.
        #[command(subcommand)]
        event: HookEventArg,
    },
}

/// Hook events.
#[derive(Subcommand)]
enum HookEventArg {
    /// Pre tool use hook (documentation write gate).
    PreToolUse,
}

impl From<&HookEventArg> for HookEvent {
    fn from(event: &HookEventArg) -> Self {
        match event {
            HookEventArg::PreToolUse => Self::PreToolUse,
        }
    }
}

/// Usage summary printed on argument errors.
const USAGE: &str = "Usage: instinct [status|export [output]|import <input>|evolve|hook <event>]";

/// Main entry point.
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(&e),
    };

    init_tracing(cli.verbose);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    match run_command(cli.command.unwrap_or(Commands::Status), &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Handles argument parsing failures.
///
/// Help and version requests print normally. Everything else (an
/// unrecognized subcommand, `import` without a path) prints a usage summary
/// to stdout and exits 0. Argument errors must never surface through a
/// non-zero code here: exit 2 is reserved for the gate's deny verdict, and a
/// typo'd hook invocation in a host configuration must not read as "block
/// this write".
fn handle_parse_error(e: &clap::Error) -> ExitCode {
    use clap::error::ErrorKind;

    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
        },
        _ => {
            println!("{USAGE}");
        },
    }
    ExitCode::SUCCESS
}

/// Runs the selected command, returning the process exit code.
fn run_command(command: Commands, config: &InstinctConfig) -> instinct::Result<ExitCode> {
    match command {
        Commands::Status => {
            commands::cmd_status(config)?;
            Ok(ExitCode::SUCCESS)
        },

        Commands::Export { output } => {
            commands::cmd_export(config, output)?;
            Ok(ExitCode::SUCCESS)
        },

        Commands::Import { input } => {
            commands::cmd_import(config, &input)?;
            Ok(ExitCode::SUCCESS)
        },

        Commands::Evolve => {
            commands::cmd_evolve(config)?;
            Ok(ExitCode::SUCCESS)
        },

        Commands::Hook { event } => {
            let decision = commands::cmd_hook(HookEvent::from(&event))?;
            Ok(exit_code_for(decision))
        },
    }
}

/// Maps a gate verdict to the exit code Claude Code expects.
///
/// Exit code 2 signals "block this write" to the invoking host; anything
/// the gate does not constrain passes with 0.
fn exit_code_for(decision: GateDecision) -> ExitCode {
    if decision.permits() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

/// Loads configuration.
fn load_config(path: Option<&str>) -> instinct::Result<InstinctConfig> {
    // If a path is provided, load from that file
    if let Some(config_path) = path {
        return InstinctConfig::load_from_file(std::path::Path::new(config_path));
    }

    // Environment override for config path
    if let Ok(config_path) = std::env::var("INSTINCT_CONFIG_PATH") {
        if !config_path.trim().is_empty() {
            return InstinctConfig::load_from_file(std::path::Path::new(&config_path));
        }
    }

    // Otherwise, load from default location
    Ok(InstinctConfig::load_default())
}

/// Initializes tracing with an env-filter.
///
/// `--verbose` raises the default to debug; the `INSTINCT_LOG` environment
/// variable overrides either default. Logs go to stderr so they never mix
/// with command output or the hook protocol.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("INSTINCT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
