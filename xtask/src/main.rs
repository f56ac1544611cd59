mod ids;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Soundbank build tasks
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Soundbank build and development tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Soundbank ID tables (generate, check, inspect)
    Ids {
        #[command(subcommand)]
        command: ids::IdsCommand,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ids { command } => ids::execute(command),
    }
}
