//! lexscan CLI - scan source text into tokens from the command line.
//!
//! This is the main entry point for the lexscan binary. It uses clap for
//! argument parsing and dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat, run_init, run_rules, run_tokens, run_trace, traits::CommandResult,
    InitArgs, RulesArgs, TokensArgs, TraceArgs,
};
use config::Config;
use error::{LexscanError, Result};

/// lexscan - a table-driven lexical scanner
///
/// Splits source text into keywords, identifiers, numbers, strings,
/// operators, separators and comments, and shows which scanner state
/// read each character.
#[derive(Parser, Debug)]
#[command(name = "lexscan")]
#[command(author = "Lexscan Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A table-driven lexical scanner", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LEXSCAN_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LEXSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LEXSCAN_NO_COLOR")]
    no_color: bool,

    /// Output format (overrides configuration)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Number of files scanned in parallel
    #[arg(short, long, global = true)]
    jobs: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lexscan CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each input
    ///
    /// Reads the given files, or stdin when none (or `-`) is given, and
    /// prints one row per token.
    Tokens(TokensCommand),

    /// Print the state trace of each input
    ///
    /// Prints one row per input character with the scanner state that
    /// read it. Newlines are shown as `\n`.
    Trace(TraceCommand),

    /// Print the active keyword, operator and separator tables
    Rules,

    /// Write a lexscan.toml with the current settings
    ///
    /// The rule tables are written out in full so they can be edited.
    Init(InitCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input files (`-` for stdin)
    files: Vec<PathBuf>,
}

/// Arguments for the trace subcommand.
#[derive(Parser, Debug)]
struct TraceCommand {
    /// Input files (`-` for stdin)
    files: Vec<PathBuf>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

/// Main entry point for the lexscan CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    let result = execute_command(cli.command, cli.format, cli.jobs, config)?;
    debug!(
        inputs = result.items_processed,
        warnings = result.warnings.len(),
        "command complete"
    );
    result.emit(&mut std::io::stdout().lock(), &mut std::io::stderr().lock())
}

/// Initialize the logging system.
///
/// Log output goes to stderr so that it never mixes with scan results.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LexscanError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(
    command: Commands,
    format: Option<OutputFormat>,
    jobs: Option<usize>,
    config: Config,
) -> Result<CommandResult> {
    match command {
        Commands::Tokens(args) => run_tokens(
            TokensArgs {
                files: args.files,
                format,
                jobs,
            },
            config,
        ),
        Commands::Trace(args) => run_trace(
            TraceArgs {
                files: args.files,
                format,
                jobs,
            },
            config,
        ),
        Commands::Rules => run_rules(RulesArgs { format }, config),
        Commands::Init(args) => run_init(
            InitArgs {
                path: args.path,
                force: args.force,
            },
            config,
        ),
    }
}
