//! Soundbank ID generator CLI

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "id-gen")]
#[command(about = "Generate soundbank ID tables from the authoring tool's ID header", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate registry modules
    Generate {
        /// Revision to generate (default: all)
        #[arg(short, long)]
        revision: Option<u32>,
    },

    /// Check that committed modules are in sync with their headers
    Check {
        /// Revision to check (default: all)
        #[arg(short, long)]
        revision: Option<u32>,
    },

    /// Parse headers and report on their IDs
    Validate {
        /// Revision to validate (default: all)
        #[arg(short, long)]
        revision: Option<u32>,
    },

    /// Emit a header from a project description
    Header {
        /// Project description (TOML)
        description: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the parsed model of a revision as JSON
    Dump {
        revision: u32,
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
        Commands::Generate { revision } => {
            println!("Generating soundbank ID tables...");
            match revision {
                Some(r) => id_gen::generate_for_revision(r)?,
                None => id_gen::generate_all()?,
            }
            println!("✓ Done!");
        }
        Commands::Check { revision } => {
            println!("Checking soundbank ID tables are in sync...");
            let in_sync = match revision {
                Some(r) => id_gen::check_for_revision(r)?,
                None => id_gen::check()?,
            };
            if in_sync {
                println!("\n✓ All ID tables are in sync!");
            } else {
                anyhow::bail!("ID tables are out of sync. Run 'id-gen generate' to regenerate.");
            }
        }
        Commands::Validate { revision } => match revision {
            Some(r) => id_gen::validate_for_revision(r)?,
            None => id_gen::validate()?,
        },
        Commands::Header {
            description,
            output,
        } => {
            let header = id_gen::header_from_description(&description)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, header)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("✓ Generated header: {}", path.display());
                }
                None => print!("{}", header),
            }
        }
        Commands::Dump { revision } => {
            let root = id_gen::find_workspace_root()?;
            println!("{}", id_gen::dump_revision(&root, revision)?);
        }
    }

    Ok(())
}
