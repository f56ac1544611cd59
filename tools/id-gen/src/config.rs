//! id-gen.toml parsing
//!
//! ```toml
//! output_dir = "soundbank-ids/src/generated"
//!
//! [[snapshot]]
//! revision = 1
//! label = "initial wave audio"
//! header = "soundbanks/v1/Wwise_IDs.h"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Location of the generator config, relative to the workspace root
pub const CONFIG_FILE: &str = "soundbanks/id-gen.toml";

/// Generator configuration
#[derive(Debug, Deserialize)]
pub struct GenConfig {
    /// Directory receiving `vN.rs` modules and `mod.rs`
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default, rename = "snapshot")]
    pub snapshots: Vec<SnapshotConfig>,
}

/// One generated revision
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    pub revision: u32,
    #[serde(default)]
    pub label: String,
    /// Path of the authoring tool's ID header, relative to the workspace root
    pub header: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("soundbank-ids/src/generated")
}

impl GenConfig {
    /// Load `soundbanks/id-gen.toml` from the workspace root
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let path = workspace_root.join(CONFIG_FILE);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse and validate config text; snapshots come back sorted by revision
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: GenConfig = toml::from_str(content)?;

        if config.snapshots.is_empty() {
            bail!("No [[snapshot]] entries configured");
        }

        let mut revisions = HashSet::new();
        for snapshot in &config.snapshots {
            if snapshot.revision == 0 {
                bail!("Snapshot revisions start at 1");
            }
            if !revisions.insert(snapshot.revision) {
                bail!("Revision {} is configured twice", snapshot.revision);
            }
        }

        config.snapshots.sort_by_key(|s| s.revision);
        Ok(config)
    }

    pub fn revisions(&self) -> Vec<u32> {
        self.snapshots.iter().map(|s| s.revision).collect()
    }

    pub fn snapshot(&self, revision: u32) -> Result<&SnapshotConfig> {
        self.snapshots
            .iter()
            .find(|s| s.revision == revision)
            .with_context(|| format!("Revision {} is not configured in {}", revision, CONFIG_FILE))
    }

    /// Path of the generated module for `revision`
    pub fn module_path(&self, workspace_root: &Path, revision: u32) -> PathBuf {
        workspace_root
            .join(&self.output_dir)
            .join(format!("v{}.rs", revision))
    }

    pub fn index_path(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.output_dir).join("mod.rs")
    }
}

impl SnapshotConfig {
    /// Header path as recorded in generated code, always with `/` separators
    pub fn source_label(&self) -> String {
        self.header.to_string_lossy().replace('\\', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_sorts_snapshots() {
        let config = GenConfig::from_toml(
            r#"
            [[snapshot]]
            revision = 2
            label = "second"
            header = "soundbanks/v2/Wwise_IDs.h"

            [[snapshot]]
            revision = 1
            header = "soundbanks/v1/Wwise_IDs.h"
            "#,
        )
        .unwrap();

        assert_eq!(config.revisions(), vec![1, 2]);
        assert_eq!(config.output_dir, PathBuf::from("soundbank-ids/src/generated"));
        assert_eq!(config.snapshot(1).unwrap().label, "");
        assert_eq!(config.snapshot(2).unwrap().source_label(), "soundbanks/v2/Wwise_IDs.h");
        assert!(config.snapshot(3).is_err());
    }

    #[test]
    fn module_paths() {
        let config = GenConfig::from_toml(
            "output_dir = \"out\"\n[[snapshot]]\nrevision = 5\nheader = \"a.h\"\n",
        )
        .unwrap();

        let root = Path::new("/work");
        assert_eq!(config.module_path(root, 5), PathBuf::from("/work/out/v5.rs"));
        assert_eq!(config.index_path(root), PathBuf::from("/work/out/mod.rs"));
    }

    #[test]
    fn rejects_duplicate_revisions() {
        let err = GenConfig::from_toml(
            "[[snapshot]]\nrevision = 1\nheader = \"a.h\"\n[[snapshot]]\nrevision = 1\nheader = \"b.h\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("configured twice"));
    }

    #[test]
    fn rejects_empty_config() {
        assert!(GenConfig::from_toml("output_dir = \"out\"\n").is_err());
        assert!(GenConfig::from_toml("[[snapshot]]\nrevision = 0\nheader = \"a.h\"\n").is_err());
    }
}
