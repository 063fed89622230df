//! Source tree synchronisation.
//!
//! The GWT sources are assembled from two upstream Java projects. Each
//! tree has a manifest listing the classes to copy verbatim and the classes
//! replaced by local, GWT-compatible versions:
//!
//! ```text
//! <upstream>/<class>           ──copy──►  src/com/actelion/research/gwt/<tree>/<class>
//! <tree>/modified/<class>      ──copy──►  (same destination, overrides win)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::paths::ProjectDirs;

/// An upstream source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTree {
    Openchemlib,
    Datawarrior,
}

impl SourceTree {
    pub const ALL: [SourceTree; 2] = [Self::Openchemlib, Self::Datawarrior];

    pub fn name(self) -> &'static str {
        match self {
            Self::Openchemlib => "openchemlib",
            Self::Datawarrior => "datawarrior",
        }
    }

    /// Package directory under `src/` the classes are copied into.
    fn package_dir(self) -> &'static str {
        match self {
            Self::Openchemlib => "com/actelion/research/gwt/chemlib",
            Self::Datawarrior => "com/actelion/research/gwt/datawarrior",
        }
    }

    /// Configured checkout of the upstream project.
    fn upstream(self, config: &Config) -> Option<&PathBuf> {
        match self {
            Self::Openchemlib => config.openchemlib.as_ref(),
            Self::Datawarrior => config.datawarrior.as_ref(),
        }
    }
}

/// `<tree>/classes.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassManifest {
    #[serde(default)]
    pub copy: Vec<String>,
    #[serde(default)]
    pub modified: Vec<String>,
}

impl ClassManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Sync(format!("failed to read {}: {e}", path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Sync(format!("{}: {e}", path.display())))
    }
}

/// Counts reported after a sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub copied: usize,
    pub modified: usize,
}

/// Copy one upstream tree into the local source root.
pub fn sync_tree(tree: SourceTree, config: &Config, dirs: &ProjectDirs) -> Result<SyncReport> {
    let upstream = tree.upstream(config).ok_or_else(|| {
        Error::InvalidConfiguration(format!(
            "config.json: \"{}\" must point at the upstream checkout",
            tree.name()
        ))
    })?;

    let tree_dir = dirs.root.join(tree.name());
    let manifest = ClassManifest::load(&tree_dir.join("classes.json"))?;
    let out_dir = dirs.src_dir.join(tree.package_dir());
    let modified_dir = tree_dir.join("modified");

    tracing::info!(
        "Copying {} classes from {}",
        manifest.copy.len(),
        tree.name()
    );
    for class in &manifest.copy {
        copy_entry(&upstream.join(class), &out_dir.join(class))?;
    }

    tracing::info!("Copying {} modified classes", manifest.modified.len());
    for class in &manifest.modified {
        copy_entry(&modified_dir.join(class), &out_dir.join(class))?;
    }

    Ok(SyncReport {
        copied: manifest.copy.len(),
        modified: manifest.modified.len(),
    })
}

/// Copy a file, or a directory recursively, creating parents as needed.
fn copy_entry(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from)
        .map_err(|e| Error::Sync(format!("cannot copy {}: {e}", from.display())))?;

    if metadata.is_dir() {
        fs::create_dir_all(to)?;
        for entry in fs::read_dir(from)? {
            let entry = entry?;
            copy_entry(&entry.path(), &to.join(entry.file_name()))?;
        }
    } else {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(from, to)?;
    }
    Ok(())
}
