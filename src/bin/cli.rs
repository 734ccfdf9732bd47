//! feedmerge CLI
//!
//! Scheduled entry point: merges the configured feeds into one RSS file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use feedmerge::{
    models::Config,
    pipeline,
    storage::LocalStorage,
    utils::log,
};

/// feedmerge - RSS Feed Aggregator
#[derive(Parser, Debug)]
#[command(
    name = "feedmerge",
    version,
    about = "Merges several RSS feeds into one deduplicated, time-sorted feed"
)]

struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "feed.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch all sources and write the merged feed (default)
    Run {
        /// Override `output_file` from the configuration
        #[arg(short, long)]
        output: Option<String>,

        /// Override `max_items` from the configuration
        #[arg(long)]
        max_items: Option<usize>,
    },

    /// Validate the configuration file
    Validate,

    /// Show configured sources and the current output file
    Info,
}

/// Initialize logging based on verbosity flags.
fn init_logging(verbose: bool, quiet: bool) {
    let level = match (verbose, quiet) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
    log::init(level);
}

/// Main entry point for the CLI application.
///
/// A run that fetched nothing, or had no sources at all, still exits
/// successfully so that a scheduler does not flag the job as broken.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let mut config = Config::load_or_default(&cli.config);
    ::log::debug!("Loaded configuration from {}", cli.config.display());

    let storage = LocalStorage::new(".");

    match cli.command.unwrap_or(Command::Run {
        output: None,
        max_items: None,
    }) {
        Command::Run { output, max_items } => {
            if let Some(path) = output {
                config.output_file = path;
            }
            if let Some(max) = max_items {
                config.max_items = max;
            }

            match pipeline::run_pipeline(&config, &storage).await {
                Ok(outcome) => ::log::debug!("Run finished: {:?}", outcome),
                Err(e) => {
                    log::error(&format!("Aggregation failed: {}", e));
                    return ExitCode::FAILURE;
                }
            }
        }

        Command::Validate => {
            if pipeline::run_validate(&config, &cli.config).is_err() {
                return ExitCode::FAILURE;
            }
        }

        Command::Info => {
            if let Err(e) = pipeline::run_info(&config, &storage).await {
                log::error(&format!("Could not read output: {}", e));
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
