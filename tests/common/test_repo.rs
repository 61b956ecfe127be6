//! TestRepo helper for integration tests.
//!
//! Provides a temporary Mercurial repository to act as a clone source.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Is a usable `hg` on PATH?
pub fn hg_available() -> bool {
    Command::new("hg")
        .arg("--version")
        .env("HGPLAIN", "1")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// A temporary Mercurial repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new Mercurial repository in a temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let output = Command::new("hg")
            .arg("init")
            .env("HGPLAIN", "1")
            .current_dir(dir.path())
            .output()
            .expect("Failed to execute hg init");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("hg init failed: {}", stderr);
        }

        Self { dir }
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Clone source usable by `hg clone`.
    pub fn url(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    /// Execute an hg command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn hg(&self, args: &[&str]) -> String {
        let output = Command::new("hg")
            .args(args)
            .env("HGPLAIN", "1")
            .current_dir(self.path())
            .output()
            .expect("Failed to execute hg command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "hg {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Commit all changes with a fixed author and a UTC date in unix seconds.
    ///
    /// Returns the full node hash of the new commit.
    pub fn commit(&self, message: &str, unix_secs: i64) -> String {
        let file = format!("file_{unix_secs}.txt");
        self.write_file(&file, message);
        let date = format!("{unix_secs} 0");
        self.hg(&[
            "commit",
            "--addremove",
            "-m",
            message,
            "-u",
            "Alice <alice@example.com>",
            "-d",
            &date,
        ]);
        self.node("tip")
    }

    /// Full node hash of a revision.
    pub fn node(&self, rev: &str) -> String {
        self.hg(&["log", "-r", rev, "--template", "{node}"])
            .trim()
            .to_string()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
