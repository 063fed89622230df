//! Compiled bundle discovery.
//!
//! GWT writes one `<hash>.cache.js` permutation per module into the module's
//! war directory, next to the loader script and other support files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Substring identifying the generated bundle.
pub const CACHE_MARKER: &str = ".cache.js";

/// Whether a file name carries the marker after a non-empty prefix.
fn matches_marker(name: &str, marker: &str) -> bool {
    name.find(marker).is_some_and(|pos| pos > 0)
}

/// Find the compiled bundle in `output_dir`.
///
/// Only direct children are considered. When several files match, they are
/// ordered by file name and the first one is returned, so the result does
/// not depend on directory iteration order.
pub fn locate_artifact(module: &str, output_dir: &Path, marker: &str) -> Result<PathBuf> {
    let not_found = || Error::ArtifactNotFound {
        module: module.to_string(),
        dir: output_dir.to_path_buf(),
    };

    let entries = match fs::read_dir(output_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
        Err(e) => return Err(e.into()),
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if matches_marker(&name.to_string_lossy(), marker) {
            candidates.push(entry.path());
        }
    }

    candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut candidates = candidates.into_iter();
    let artifact = candidates.next().ok_or_else(not_found)?;

    let others: Vec<_> = candidates.collect();
    if !others.is_empty() {
        tracing::warn!(
            "Module {module}: {} bundles match '{marker}', using {} (ignored: {})",
            others.len() + 1,
            artifact.display(),
            others
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "x").unwrap();
    }

    #[test]
    fn test_single_match() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "full.nocache.js");
        touch(temp.path(), "0A1B2C.cache.js");
        touch(temp.path(), "clear.cache.gif");

        let found = locate_artifact("full", temp.path(), CACHE_MARKER).unwrap();
        assert_eq!(found, temp.path().join("0A1B2C.cache.js"));
    }

    #[test]
    fn test_no_match() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "full.nocache.js");

        let err = locate_artifact("full", temp.path(), CACHE_MARKER).unwrap_err();
        assert!(matches!(err, Error::ArtifactNotFound { module, .. } if module == "full"));
    }

    #[test]
    fn test_missing_directory() {
        let temp = TempDir::new().unwrap();
        let err = locate_artifact("full", &temp.path().join("absent"), CACHE_MARKER).unwrap_err();
        assert!(matches!(err, Error::ArtifactNotFound { .. }));
    }

    #[test]
    fn test_marker_at_start_is_ignored() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), ".cache.js");

        assert!(locate_artifact("full", temp.path(), CACHE_MARKER).is_err());
    }

    #[test]
    fn test_ambiguous_match_picks_lowest_name() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "FFFF.cache.js");
        touch(temp.path(), "AAAA.cache.js");
        touch(temp.path(), "CCCC.cache.js");

        let found = locate_artifact("full", temp.path(), CACHE_MARKER).unwrap();
        assert_eq!(found, temp.path().join("AAAA.cache.js"));
    }

    #[test]
    fn test_directories_are_skipped() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("AAAA.cache.js")).unwrap();
        touch(temp.path(), "BBBB.cache.js");

        let found = locate_artifact("full", temp.path(), CACHE_MARKER).unwrap();
        assert_eq!(found, temp.path().join("BBBB.cache.js"));
    }
}
