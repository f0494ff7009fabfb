//! Tripbot CLI
//!
//! Console transport for the trip schedule bot, plus offline tools for
//! converting and validating trip files.

#![allow(clippy::print_stdout)]

mod console;
mod tools;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use domain::UserId;
use infrastructure::{AppConfig, StorageConfig, conversation_service, init_telemetry, trip_codecs};
use tracing::info;

/// Tripbot CLI
#[derive(Parser)]
#[command(name = "tripbot")]
#[command(author, version, about = "Trip schedule bot", long_about = None)]
struct Cli {
    /// Verbosity level (overrides the configured log filter)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: tripbot.toml in the working directory, if present)
    #[arg(short, long, env = "TRIPBOT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the bot on the console
    ///
    /// Every line is a message. Use `:upload <path>` to send a file and
    /// `:quit` to leave.
    /// Example: tripbot chat --user alice
    Chat {
        /// User identifier for the session
        #[arg(short, long)]
        user: String,

        /// Directory receiving exported documents
        #[arg(short, long, default_value = "exports")]
        output: PathBuf,
    },

    /// Convert a trip file between CSV and JSON
    ///
    /// Formats are taken from the file extensions.
    /// Example: tripbot convert schedule.csv schedule.json
    Convert {
        /// Source file (.csv or .json)
        input: PathBuf,

        /// Destination file (.csv or .json)
        output: PathBuf,
    },

    /// Check whether a trip file would be accepted
    Validate {
        /// File to check (.csv or .json)
        file: PathBuf,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Create the data directory when configured to
async fn prepare_data_dir(storage: &StorageConfig) -> anyhow::Result<()> {
    if storage.create_data_dir {
        tokio::fs::create_dir_all(&storage.data_dir)
            .await
            .with_context(|| format!("Failed to create {}", storage.data_dir.display()))?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.telemetry.log_filter = filter.to_string();
    }
    init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Chat { user, output } => {
            let user = UserId::new(user)?;
            prepare_data_dir(&config.storage).await?;
            info!(
                user = %user,
                data_dir = %config.storage.data_dir.display(),
                "Starting console session"
            );

            let service = conversation_service(&config.storage);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            console::run(&service, &user, &output, stdin, tokio::io::stdout()).await?;
        },

        Commands::Convert { input, output } => {
            let count = tools::convert(&trip_codecs(), &input, &output).await?;
            println!(
                "✅ Converted {count} trips: {} → {}",
                input.display(),
                output.display()
            );
        },

        Commands::Validate { file } => match tools::validate(&trip_codecs(), &file).await {
            Ok(count) => println!("✅ {} is valid: {count} trips", file.display()),
            Err(e) => {
                println!("❌ {} is not accepted: {e}", file.display());
                std::process::exit(1);
            },
        },

        Commands::ShowConfig => {
            println!("{}", toml::to_string_pretty(&config)?);
        },
    }

    Ok(())
}
