use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod handle;
mod mount;
mod notify;
mod platform;
mod poller;
mod secrets;
mod utils;

#[derive(Parser)]
#[command(name = "sharewatch")]
#[command(about = "Watch a network share folder and notify when its file count changes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the periodic watch loop
    Watch,

    /// Run a single check cycle now
    Check,

    /// Show target, server and mount status
    Status,

    /// Watched folder management
    Target {
        #[command(subcommand)]
        command: TargetCommands,
    },

    /// Server password management
    Credentials {
        #[command(subcommand)]
        command: CredentialCommands,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum TargetCommands {
    /// Watch this folder (clears the baseline)
    Set { path: std::path::PathBuf },

    /// Print the watched folder
    Show,

    /// Stop watching
    Clear,
}

#[derive(Subcommand)]
enum CredentialCommands {
    /// Prompt for the server password and store it in the keychain
    Set,

    /// Remove the stored password
    Clear,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Update server address, username or check interval
    Set {
        /// Server address, e.g. smb://files.example.net
        #[arg(long)]
        server: Option<String>,

        /// Username for the share
        #[arg(long)]
        username: Option<String>,

        /// Minutes between checks (1-60)
        #[arg(long)]
        interval: Option<u64>,
    },

    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    info!("Starting sharewatch v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Watch => commands::watch::execute().await,
        Commands::Check => commands::check::execute().await,
        Commands::Status => commands::status::execute().await,
        Commands::Target { command } => match command {
            TargetCommands::Set { path } => commands::target::set(path).await,
            TargetCommands::Show => commands::target::show().await,
            TargetCommands::Clear => commands::target::clear().await,
        },
        Commands::Credentials { command } => match command {
            CredentialCommands::Set => commands::credentials::set().await,
            CredentialCommands::Clear => commands::credentials::clear().await,
        },
        Commands::Config { command } => match command {
            ConfigCommands::Set {
                server,
                username,
                interval,
            } => commands::config::set::execute(server, username, interval).await,
            ConfigCommands::Show { json } => commands::config::show::execute(json).await,
        },
    }
}
