//! Project directory management.
//!
//! Provides consistent paths for every file the pipeline reads or writes,
//! so the CLI and the library agree on the layout of a project:
//!
//! ```text
//! <root>/
//! ├── config.json    # Local toolchain configuration
//! ├── modules.json   # Module registry
//! ├── package.json   # Base package metadata
//! ├── src/           # Local source root (first classpath entry)
//! ├── war/           # Compiler output, one directory per module
//! └── dist/          # Exported bundles
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Directory structure of a build project.
#[derive(Debug, Clone)]
pub struct ProjectDirs {
    /// The project root.
    pub root: PathBuf,

    /// Local source root.
    pub src_dir: PathBuf,

    /// Compiler output root.
    pub war_dir: PathBuf,

    /// Export output directory.
    pub dist_dir: PathBuf,
}

impl ProjectDirs {
    /// Resolve the layout under `root`. Nothing is created.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            src_dir: root.join("src"),
            war_dir: root.join("war"),
            dist_dir: root.join("dist"),
            root,
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }

    pub fn modules_file(&self) -> PathBuf {
        self.root.join("modules.json")
    }

    pub fn package_file(&self) -> PathBuf {
        self.root.join("package.json")
    }

    /// Output directory the compiler fills for a module's `war` name.
    pub fn module_war_dir(&self, war: &str) -> PathBuf {
        self.war_dir.join(war)
    }

    /// Verbose compiler log for a module.
    pub fn compile_log(&self, module: &str) -> PathBuf {
        self.root.join(format!("compile-{module}.log"))
    }

    /// Create `dist/` if it doesn't exist.
    pub fn ensure_dist(&self) -> Result<()> {
        fs::create_dir_all(&self.dist_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout() {
        let dirs = ProjectDirs::new("/project");

        assert_eq!(dirs.src_dir, PathBuf::from("/project/src"));
        assert_eq!(dirs.module_war_dir("full"), PathBuf::from("/project/war/full"));
        assert_eq!(
            dirs.compile_log("enhanced"),
            PathBuf::from("/project/compile-enhanced.log")
        );
    }

    #[test]
    fn test_ensure_dist() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let dirs = ProjectDirs::new(temp.path());

        assert!(!dirs.dist_dir.exists());
        dirs.ensure_dist().expect("Failed to create dist");
        assert!(dirs.dist_dir.is_dir());
    }
}
