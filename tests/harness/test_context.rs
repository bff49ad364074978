//! Shared testing harness for `strike` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the default components folder.
    pub(crate) fn components_dir(&self) -> PathBuf {
        self.work_dir.join("strike-components")
    }

    /// Build a command for invoking the compiled `strike` binary in the work directory.
    ///
    /// Credential variables are cleared so nothing leaks in from the host.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("strike").expect("Failed to locate strike binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove("SF_STRIKE_USERNAME")
            .env_remove("SF_STRIKE_PASSWORD")
            .env_remove("STRIKE_LOG");
        cmd
    }

    /// Write a file relative to the work directory, creating parents.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }

    /// Write `strike.toml` in the work directory.
    pub(crate) fn write_config(&self, content: &str) {
        self.write_file("strike.toml", content);
    }
}
