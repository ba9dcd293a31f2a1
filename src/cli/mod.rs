use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Bitcoin wallet amount display in sats, BTC or fiat
#[derive(Parser)]
#[command(name = "wallet-units")]
#[command(about = "Bitcoin wallet amount display in sats, BTC or fiat")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Display a satoshi amount in the active (or a given) unit
    Show(commands::show::ShowCommand),
    /// List the loaded fiat rates with their symbol layout
    Rates(commands::rates::RatesCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture debug!() / warn!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show(command) => command.run(),
        Commands::Rates(command) => command.run(),
    }
}
