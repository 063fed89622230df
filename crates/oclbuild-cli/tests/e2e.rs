//! End-to-end tests for the oclbuild CLI.
//!
//! These tests drive the binary against temporary projects. None of them
//! needs a JDK: compilation is only exercised through its failure paths.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin for tests

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Test Helpers
// =============================================================================

/// A temporary project directory.
struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let project = Self { temp_dir };
        project.write(
            "modules.json",
            r#"[
                {"name": "full", "entrypoint": "com.actelion.research.gwt.Full", "war": "full"},
                {"name": "enhanced", "entrypoint": "com.actelion.research.gwt.Enhanced", "war": "enhanced"}
            ]"#,
        );
        project.write(
            "package.json",
            r#"{"name": "openchemlib", "version": "4.2.0", "license": "BSD-3-Clause"}"#,
        );
        project
    }

    fn with_config(self, config: &str) -> Self {
        self.write("config.json", config);
        self
    }

    fn with_bundle(self, war: &str) -> Self {
        self.write(&format!("war/{war}/ABCDEF0123.cache.js"), "$wnd.OCL = {};");
        self
    }

    fn write(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("oclbuild").unwrap();
        cmd.arg("-C").arg(self.path());
        cmd
    }
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn test_export_all_modules() {
    let project = TestProject::new()
        .with_config(r#"{"gwt": "/opt/gwt"}"#)
        .with_bundle("full")
        .with_bundle("enhanced");

    project
        .cmd()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("openchemlib-full.js"))
        .stdout(predicate::str::contains("openchemlib-enhanced.js"));

    let enhanced =
        fs::read_to_string(project.path().join("dist/openchemlib-enhanced.js")).unwrap();
    assert!(enhanced.contains("@license GPL-3.0"));
    let full = fs::read_to_string(project.path().join("dist/openchemlib-full.js")).unwrap();
    assert!(full.contains("@license BSD-3-Clause"));
}

#[test]
fn test_export_single_module() {
    let project = TestProject::new()
        .with_config(r#"{"gwt": "/opt/gwt"}"#)
        .with_bundle("full");

    project
        .cmd()
        .args(["export", "--module", "full"])
        .assert()
        .success();

    assert!(project.path().join("dist/openchemlib-full.js").exists());
    assert!(!project.path().join("dist/openchemlib-enhanced.js").exists());
}

#[test]
fn test_export_missing_bundle_fails() {
    let project = TestProject::new()
        .with_config(r#"{"gwt": "/opt/gwt"}"#)
        .with_bundle("full");

    project
        .cmd()
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find compiled bundle for module enhanced"));
}

// =============================================================================
// Startup errors
// =============================================================================

#[test]
fn test_missing_config() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.json not found"));
}

#[test]
fn test_unknown_module() {
    let project = TestProject::new().with_config(r#"{"gwt": "/opt/gwt"}"#);

    project
        .cmd()
        .args(["export", "-m", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("module nope not found"));
}

#[test]
fn test_invalid_classpath_shape() {
    let project = TestProject::new().with_config(r#"{"gwt": "/opt/gwt", "classpath": 7}"#);

    project
        .cmd()
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("classpath must be a string or an array"));
}

// =============================================================================
// Compile
// =============================================================================

#[test]
fn test_compile_with_missing_launcher_fails_before_export() {
    let project = TestProject::new()
        .with_config(r#"{"gwt": "/opt/gwt", "java": "/nonexistent/bin/java"}"#)
        .with_bundle("full")
        .with_bundle("enhanced");

    project
        .cmd()
        .args(["build", "--mode", "pretty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("toolchain error"));

    assert!(!project.path().join("dist").exists());
}

// =============================================================================
// Sync
// =============================================================================

#[test]
fn test_sync_openchemlib() {
    let upstream = TempDir::new().unwrap();
    fs::create_dir_all(upstream.path().join("chem")).unwrap();
    fs::write(upstream.path().join("chem/Molecule.java"), "class Molecule {}").unwrap();

    let config = format!(
        r#"{{"gwt": "/opt/gwt", "openchemlib": {}}}"#,
        json_string(upstream.path())
    );
    let project = TestProject::new().with_config(&config);
    project.write("openchemlib/classes.json", r#"{"copy": ["chem/Molecule.java"]}"#);

    project
        .cmd()
        .args(["sync", "openchemlib"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 classes"));

    assert!(
        project
            .path()
            .join("src/com/actelion/research/gwt/chemlib/chem/Molecule.java")
            .is_file()
    );
}

/// Quote a path as a JSON string.
fn json_string(path: &Path) -> String {
    format!("{:?}", path.display().to_string())
}
