//! Shared testing utilities for magam CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Seed the repository's report page into the working directory.
    pub fn seed_report_page(&self) -> PathBuf {
        let path = self.work_dir.join("index.html");
        fs::write(&path, include_str!("../../index.html"))
            .expect("Failed to seed report page");
        path
    }

    /// Build a command for invoking the compiled `magam` binary.
    ///
    /// The Gemini credential is cleared so tests never talk to the real API
    /// unless they opt in explicitly.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("magam").expect("Failed to locate magam binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("GEMINI_API_KEY")
            .env_remove("GEMINI_MODEL");
        cmd
    }
}
