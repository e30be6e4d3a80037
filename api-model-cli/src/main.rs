//! # api-model
//!
//! CLI tool for extracting a language-agnostic API model from specification
//! sources.
//!
//! ## Usage
//!
//! ```bash
//! # Extract the model from the current directory
//! api-model extract
//!
//! # Extract from a specification tree into a specific output directory
//! api-model extract --input ./specification --output ./generated
//!
//! # Only files under /api/ contribute, with documentation comments
//! api-model extract --include '/api/' --docs
//!
//! # Watch mode for development
//! api-model extract --watch
//!
//! # Dry run to preview the model
//! api-model extract --dry-run
//!
//! # Initialize configuration
//! api-model init
//!
//! # Check that a generated model is up-to-date
//! api-model check --path ./generated/model.json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use api_model_cli::{
    config::{CliArgs, Config, ConfigManager},
    error::CliError,
    extract::{check_up_to_date, extract},
    watcher::FileWatcher,
    writer::{ModelWriter, WriteOutcome},
};

#[derive(Parser)]
#[command(name = "api-model")]
#[command(author, version, about = "Extract a language-agnostic API model from specification sources", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the model from specification sources
    Extract {
        /// Input directory containing the specification sources
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory for the model file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Filter scanned files by path pattern (glob)
        #[arg(long)]
        filter: Option<String>,

        /// Regex selecting files that contribute to the model (repeatable)
        #[arg(long = "include")]
        include: Vec<String>,

        /// Copy documentation comments into the model
        #[arg(long)]
        docs: bool,

        /// Watch for file changes and re-extract
        #[arg(short, long)]
        watch: bool,

        /// Preview the model without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a new api-model configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "api-model.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Check that a generated model is up-to-date
    Check {
        /// Path to the generated model file
        #[arg(short, long)]
        path: PathBuf,

        /// Input directory containing the specification sources
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "api_model=debug,api_model_syntax=debug,api_model_cli=debug"
    } else {
        "api_model=info,api_model_syntax=info,api_model_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Extract {
            input,
            output,
            filter,
            include,
            docs,
            watch,
            dry_run,
            config,
        } => {
            let args = CliArgs {
                input,
                include,
                output,
                documentation: docs.then_some(true),
                ..Default::default()
            };
            cmd_extract(&args, config, filter, watch, dry_run)
        }

        Commands::Init { output, force } => cmd_init(output, force),

        Commands::Check {
            path,
            input,
            config,
        } => cmd_check(path, input, config),
    }
}

/// Extract command implementation.
fn cmd_extract(
    args: &CliArgs,
    config_path: Option<PathBuf>,
    filter: Option<String>,
    watch: bool,
    dry_run: bool,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(config, args);

    if watch {
        run_watch_mode(&config, filter.as_deref(), dry_run)
    } else {
        run_extract(&config, filter.as_deref(), dry_run)
    }
}

/// Run model extraction once.
fn run_extract(config: &Config, filter: Option<&str>, dry_run: bool) -> Result<(), CliError> {
    println!(
        "{} {}",
        "Extracting model from".cyan(),
        config.input.dir.display()
    );

    let extraction = extract(config, filter)?;

    let writer = ModelWriter::new(config.output.pretty).dry_run(dry_run);
    let outcome = writer.write(&extraction.model, &config.output_path())?;
    let stats = outcome.stats();

    println!(
        "  Read {} file(s): {} interface(s), {} enum(s)",
        extraction.files.to_string().green(),
        stats.interfaces.to_string().green(),
        stats.enums.to_string().green()
    );
    if extraction.skipped > 0 {
        println!(
            "  Skipped {} file(s) outside the selection",
            extraction.skipped
        );
    }
    if stats.unresolved > 0 {
        println!(
            "  {} {} property type(s) could not be mapped",
            "Warning:".yellow(),
            stats.unresolved
        );
    }

    match outcome {
        WriteOutcome::Written { path, bytes, .. } => {
            println!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        WriteOutcome::Unchanged { path, .. } => {
            println!("{} {} is up-to-date", "✓".green(), path.display());
        }
        WriteOutcome::Preview { content, path, .. } => {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            print!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
    }

    Ok(())
}

/// Run in watch mode.
fn run_watch_mode(config: &Config, filter: Option<&str>, dry_run: bool) -> Result<(), CliError> {
    println!("{}", "Starting watch mode...".cyan());
    println!("  Watching: {}", config.input.dir.display());
    println!("  Press Ctrl+C to stop\n");

    if let Err(e) = run_extract(config, filter, dry_run) {
        print_error(&e);
    }

    let watcher = FileWatcher::new(&config.input.dir);
    let (_debouncer, rx) = watcher.watch()?;

    println!("\n{}", "Watching for changes...".cyan());

    while let Ok(event) = rx.recv() {
        if let Some(message) = event.error_message() {
            println!("{} {}", "Watch error:".red(), message);
            continue;
        }

        if let Some(path) = event.path() {
            println!("\n{} {}", "File changed:".cyan(), path.display());
        }

        if let Err(e) = run_extract(config, filter, dry_run) {
            print_error(&e);
        }

        println!("\n{}", "Watching for changes...".cyan());
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    ConfigManager::init(&output, force)?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Check command implementation.
fn cmd_check(
    model_path: PathBuf,
    input: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    println!("{}", "Checking model...".cyan());

    let existing = read_existing(&model_path)?;

    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            input,
            ..Default::default()
        },
    );

    let fresh = extract(&config, None)?;
    match check_up_to_date(&existing, &fresh) {
        Ok(()) => {
            println!("{} Model is up-to-date", "✓".green());
            Ok(())
        }
        Err(e) => {
            println!("{} Model is out of date", "✗".red());
            println!("  Run 'api-model extract' to update");
            Err(e)
        }
    }
}

fn read_existing(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::Validation(format!(
            "Model file not found: {}",
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
