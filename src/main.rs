use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{OutputMode, validate_command};

#[derive(Parser)]
#[command(
    name = "openapia",
    about = "Validate OpenAPIA specification documents",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an OpenAPIA specification file (.yaml, .yml or .json)
    Validate {
        /// Specification file to validate
        file: PathBuf,

        /// Output results as JSON
        #[arg(long, conflicts_with = "quiet")]
        json: bool,

        /// Print nothing; report validity through the exit code only
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let valid = match cli.command {
        Commands::Validate { file, json, quiet } => {
            let mode = if json {
                OutputMode::Json
            } else if quiet {
                OutputMode::Quiet
            } else {
                OutputMode::Report
            };
            validate_command(&file, mode)?
        }
    };

    if !valid {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("openapia=warn"),
        1 => EnvFilter::new("openapia=info"),
        _ => EnvFilter::new("openapia=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
