//! syncbuddy - mirror a source directory tree onto a destination.
//!
//! Usage:
//!   syncbuddy -s SRC -d DST            Copy, then delete (full mirror)
//!   syncbuddy copy -s SRC -d DST       Copy everything from SRC into DST
//!   syncbuddy delete -s SRC -d DST     Delete from DST whatever SRC lacks
//!   syncbuddy sync -s SRC -d DST       Same as no subcommand
//!   syncbuddy --help                   Show help
//!
//! Flags may be given before or after the subcommand.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use humansize::{DECIMAL, format_size};
use tracing_subscriber::EnvFilter;

use syncbuddy_core::{OperationReport, SyncConfig};
use syncbuddy_ops::Operation;

#[derive(Parser)]
#[command(
    name = "syncbuddy",
    version,
    about = "Sync files from a source directory to a destination directory",
    long_about = "syncbuddy makes a destination directory mirror a source directory.\n\n\
                  Everything in the source is copied over (permissions included), and \
                  anything in the destination that the source lacks is deleted, along \
                  with directories left empty."
)]
struct Cli {
    /// Source directory to sync from (required)
    #[arg(short, long, global = true)]
    source: Option<PathBuf>,

    /// Destination directory to sync to (required)
    #[arg(short, long, global = true)]
    destination: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Output format for the final report
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Copy a directory from source to destination
    Copy,

    /// Delete files in destination not in source
    Delete,

    /// Copy, then delete (default)
    Sync,
}

impl From<Command> for Operation {
    fn from(command: Command) -> Self {
        match command {
            Command::Copy => Operation::Copy,
            Command::Delete => Operation::Delete,
            Command::Sync => Operation::Sync,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let source = required(cli.source, "--source <SOURCE>");
    let destination = required(cli.destination, "--destination <DESTINATION>");
    init_logging(cli.verbose, cli.quiet);

    let operation = cli.command.map(Operation::from).unwrap_or(Operation::Sync);
    let config = SyncConfig::builder()
        .source(source)
        .destination(destination)
        .build()?;

    config.validate_source()?;

    if !cli.quiet {
        eprintln!("{}", start_message(operation, &config));
    }

    let report = operation
        .run(&config)
        .wrap_err_with(|| format!("{operation} failed"))?;

    if !cli.quiet {
        eprintln!("{}", finish_message(operation));
    }

    print_report(&report, cli.format)
}

/// Unwrap a global flag, exiting with a usage error when it was not given.
///
/// clap cannot mark global arguments as required.
fn required(value: Option<PathBuf>, flag: &str) -> PathBuf {
    value.unwrap_or_else(|| {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                format!("the following required arguments were not provided:\n  {flag}"),
            )
            .exit()
    })
}

/// Install the stderr subscriber. `RUST_LOG` wins over the flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn start_message(operation: Operation, config: &SyncConfig) -> String {
    match operation {
        Operation::Delete => format!(
            "Deleting files from {} not in {}...",
            config.destination.display(),
            config.source.display()
        ),
        Operation::Copy | Operation::Sync => format!(
            "{} from {} to {}...",
            operation.verb(),
            config.source.display(),
            config.destination.display()
        ),
    }
}

fn finish_message(operation: Operation) -> &'static str {
    match operation {
        Operation::Copy => "Copying complete!",
        Operation::Delete => "Deletion complete!",
        Operation::Sync => "Synchronization complete!",
    }
}

/// Print the final report to stdout.
fn print_report(report: &OperationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!(" {}", report.summary());
            if !matches!(report, OperationReport::Delete(_)) {
                println!(" {} written", format_size(report.bytes_copied(), DECIMAL));
            }
            for warning in report.warnings() {
                println!(" warning: {}", warning.message);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}
