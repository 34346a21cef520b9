//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// A temporary project directory holding a `package.json`.
pub struct TestProject {
    pub dir: tempfile::TempDir,
}

impl TestProject {
    /// Create a project whose manifest has the given content.
    pub fn with_manifest(content: &str) -> Self {
        let project = Self::empty();
        std::fs::write(project.manifest_path(), content).expect("Failed to write manifest");
        project
    }

    /// Create a project with no manifest at all.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { dir }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join("package.json")
    }

    pub fn read_manifest(&self) -> String {
        std::fs::read_to_string(self.manifest_path()).expect("Failed to read manifest")
    }

    pub fn manifest_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_manifest()).expect("Manifest is not valid JSON")
    }

    /// Run the pkgbump binary inside the project directory.
    pub fn run(&self, args: &[&str]) -> Output {
        run_in(self.dir.path(), args)
    }
}

/// Run the pkgbump binary with `dir` as the working directory.
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pkgbump"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run pkgbump")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
