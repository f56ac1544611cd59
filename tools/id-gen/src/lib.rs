//! Soundbank ID generator library
//!
//! Parses the authoring tool's ID headers and generates the Rust registry
//! modules of the `soundbank-ids` crate.

pub mod config;
pub mod description;
pub mod generators;
pub mod model;
pub mod parser;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use config::{GenConfig, SnapshotConfig, CONFIG_FILE};
use description::ProjectDescription;
use generators::rust::ModuleMeta;
use model::IdModel;

/// Generate every configured revision and the index
pub fn generate_all() -> Result<()> {
    generate_in(&find_workspace_root()?, None)
}

/// Generate a single revision (the index is always refreshed)
pub fn generate_for_revision(revision: u32) -> Result<()> {
    generate_in(&find_workspace_root()?, Some(revision))
}

/// Get the configured revisions, oldest first
pub fn get_revisions() -> Result<Vec<u32>> {
    let workspace_root = find_workspace_root()?;
    Ok(GenConfig::load(&workspace_root)?.revisions())
}

/// Generate modules below `workspace_root`; `None` means all revisions
pub fn generate_in(workspace_root: &Path, revision: Option<u32>) -> Result<()> {
    let config = GenConfig::load(workspace_root)?;

    for snapshot in selected(&config, revision)? {
        let module = render_revision(workspace_root, snapshot)?;
        let output = config.module_path(workspace_root, snapshot.revision);
        write_file(&output, &module)?;
        println!("Generated revision {}: {}", snapshot.revision, output.display());
    }

    let index = generators::rust::generate_index(&config.revisions())
        .context("Failed to generate snapshot index")?;
    let index_path = config.index_path(workspace_root);
    write_file(&index_path, &index)?;
    println!("Generated index: {}", index_path.display());

    Ok(())
}

/// Check generated modules are in sync for all revisions
pub fn check() -> Result<bool> {
    check_in(&find_workspace_root()?, None)
}

/// Check the generated module of one revision
pub fn check_for_revision(revision: u32) -> Result<bool> {
    check_in(&find_workspace_root()?, Some(revision))
}

/// Compare committed modules with fresh output, byte for byte
pub fn check_in(workspace_root: &Path, revision: Option<u32>) -> Result<bool> {
    let config = GenConfig::load(workspace_root)?;
    let mut in_sync = true;

    for snapshot in selected(&config, revision)? {
        let fresh = render_revision(workspace_root, snapshot)?;
        let path = config.module_path(workspace_root, snapshot.revision);
        in_sync &= compare(&path, &fresh, &format!("Revision {}", snapshot.revision))?;
    }

    let fresh_index = generators::rust::generate_index(&config.revisions())?;
    in_sync &= compare(&config.index_path(workspace_root), &fresh_index, "Index")?;

    Ok(in_sync)
}

/// Validate the source headers of all revisions
pub fn validate() -> Result<()> {
    validate_in(&find_workspace_root()?, None)
}

/// Validate the source header of one revision
pub fn validate_for_revision(revision: u32) -> Result<()> {
    validate_in(&find_workspace_root()?, Some(revision))
}

/// Parse each header, check uniqueness and report how IDs relate to `short_id`
pub fn validate_in(workspace_root: &Path, revision: Option<u32>) -> Result<()> {
    let config = GenConfig::load(workspace_root)?;

    for snapshot in selected(&config, revision)? {
        let model = load_model(workspace_root, snapshot)?;
        let report = model.hash_report();

        println!(
            "✓ Revision {}: {} symbols in {} sections, {} state groups",
            snapshot.revision,
            model.symbol_count(),
            model.sections.len(),
            model.state_groups.len()
        );
        println!(
            "  {} IDs hash from their identifier, {} from a display name",
            report.matching,
            report.derived.len()
        );
        for path in &report.derived {
            tracing::debug!(revision = snapshot.revision, "{} hashed from a display name", path);
        }
    }

    Ok(())
}

/// Render the Rust module for one configured revision
pub fn render_revision(workspace_root: &Path, snapshot: &SnapshotConfig) -> Result<String> {
    let model = load_model(workspace_root, snapshot)?;
    let source = snapshot.source_label();
    let meta = ModuleMeta {
        revision: snapshot.revision,
        label: &snapshot.label,
        source: &source,
    };
    generators::rust::generate_rust_module(&model, &meta)
        .with_context(|| format!("Failed to generate revision {}", snapshot.revision))
}

/// JSON dump of the model parsed from one revision's header
pub fn dump_revision(workspace_root: &Path, revision: u32) -> Result<String> {
    let config = GenConfig::load(workspace_root)?;
    let model = load_model(workspace_root, config.snapshot(revision)?)?;
    serde_json::to_string_pretty(&model).context("Failed to serialize model")
}

/// Canonical header for a project description file
pub fn header_from_description(path: &Path) -> Result<String> {
    let description = ProjectDescription::load(path)?;
    let model = description
        .to_model()
        .with_context(|| format!("Invalid project description {}", path.display()))?;
    tracing::debug!(symbols = model.symbol_count(), "Hashed project description");
    generators::c::generate_c_header(&model).context("Failed to generate C header")
}

fn load_model(workspace_root: &Path, snapshot: &SnapshotConfig) -> Result<IdModel> {
    let header = workspace_root.join(&snapshot.header);
    let model = parser::parse_header_file(&header)?;
    model
        .validate()
        .with_context(|| format!("Revision {} is invalid", snapshot.revision))?;
    tracing::debug!(
        revision = snapshot.revision,
        symbols = model.symbol_count(),
        "Parsed {}",
        header.display()
    );
    Ok(model)
}

fn selected(config: &GenConfig, revision: Option<u32>) -> Result<Vec<&SnapshotConfig>> {
    match revision {
        Some(revision) => Ok(vec![config.snapshot(revision)?]),
        None => Ok(config.snapshots.iter().collect()),
    }
}

fn compare(path: &Path, fresh: &str, what: &str) -> Result<bool> {
    let existing = match std::fs::read_to_string(path) {
        Ok(existing) => existing,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            println!("✗ {} missing: {}", what, path.display());
            return Ok(false);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    if existing != fresh {
        println!("✗ {} out of sync: {}", what, path.display());
        Ok(false)
    } else {
        println!("✓ {} in sync: {}", what, path.display());
        Ok(true)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Find the workspace root by looking for `soundbanks/id-gen.toml`
pub fn find_workspace_root() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;

    loop {
        if current.join(CONFIG_FILE).exists() {
            return Ok(current);
        }

        if !current.pop() {
            anyhow::bail!(
                "Could not find workspace root (no {} above the current directory)",
                CONFIG_FILE
            );
        }
    }
}
