//! Soundbank ID commands

use anyhow::{Context, Result};
use clap::Subcommand;
use soundbank_ids::{Category, SnapshotDiff};

#[derive(Subcommand)]
pub enum IdsCommand {
    /// Generate registry modules from the soundbank headers
    Generate {
        /// Revision to generate (default: all)
        #[arg(short, long)]
        revision: Option<u32>,
    },

    /// Check that registry modules are in sync with their headers
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

    /// Generate, then check all revisions
    All,

    /// List the symbols of a revision
    List {
        revision: u32,

        /// Category to list (event, state_group, bus, ...; default: all)
        category: Option<Category>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Resolve one symbol (state values as GROUP.VALUE)
    Lookup {
        revision: u32,
        category: Category,
        name: String,
    },

    /// Compare two revisions
    Diff {
        old: u32,
        new: u32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn execute(command: IdsCommand) -> Result<()> {
    match command {
        IdsCommand::Generate { revision } => generate(revision),
        IdsCommand::Check { revision } => check(revision),
        IdsCommand::Validate { revision } => validate(revision),
        IdsCommand::All => all(),
        IdsCommand::List {
            revision,
            category,
            json,
        } => list(revision, category, json),
        IdsCommand::Lookup {
            revision,
            category,
            name,
        } => lookup(revision, category, &name),
        IdsCommand::Diff { old, new, json } => diff(old, new, json),
    }
}

fn generate(revision: Option<u32>) -> Result<()> {
    println!("Generating soundbank ID tables...");

    match revision {
        Some(r) => id_gen::generate_for_revision(r)?,
        None => id_gen::generate_all()?,
    }

    println!("✓ Done!");
    Ok(())
}

fn check(revision: Option<u32>) -> Result<()> {
    println!("Checking soundbank ID tables are in sync...");

    let in_sync = match revision {
        Some(r) => id_gen::check_for_revision(r)?,
        None => id_gen::check()?,
    };

    if in_sync {
        println!("\n✓ All ID tables are in sync!");
        Ok(())
    } else {
        anyhow::bail!("ID tables are out of sync. Run 'cargo xtask ids generate' to regenerate.")
    }
}

fn validate(revision: Option<u32>) -> Result<()> {
    match revision {
        Some(r) => id_gen::validate_for_revision(r),
        None => id_gen::validate(),
    }
}

fn all() -> Result<()> {
    generate(None)?;
    println!();
    check(None)
}

fn list(revision: u32, category: Option<Category>, json: bool) -> Result<()> {
    let snapshot = soundbank_ids::snapshot(revision)?;
    let categories = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    if json {
        let entries: Vec<_> = categories
            .iter()
            .flat_map(|&category| snapshot.enumerate(category))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Revision {}: {}", snapshot.revision, snapshot.label);
    println!("Fingerprint: {:016x}", snapshot.fingerprint());
    for category in categories {
        let count = snapshot.count(category);
        if count == 0 {
            continue;
        }
        println!();
        println!("{} ({})", category, count);
        for entry in snapshot.enumerate(category) {
            println!("  {}", entry);
        }
    }

    Ok(())
}

fn lookup(revision: u32, category: Category, name: &str) -> Result<()> {
    let snapshot = soundbank_ids::snapshot(revision)?;
    let id = snapshot
        .lookup(category, name)
        .with_context(|| format!("Lookup failed in '{}'", snapshot.source))?;
    println!("{}", id);
    Ok(())
}

fn diff(old: u32, new: u32, json: bool) -> Result<()> {
    let diff = SnapshotDiff::between(
        soundbank_ids::snapshot(old)?,
        soundbank_ids::snapshot(new)?,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
        return Ok(());
    }

    println!("Revision {} -> {}", diff.from, diff.to);
    for entry in &diff.added {
        println!("  + {}", entry);
    }
    for entry in &diff.removed {
        println!("  - {}", entry);
    }
    for change in &diff.changed {
        println!("  ~ {} (was {})", change.entry, change.old_id);
    }
    println!(
        "{} added, {} removed, {} changed, {} unchanged",
        diff.added.len(),
        diff.removed.len(),
        diff.changed.len(),
        diff.unchanged
    );

    Ok(())
}
