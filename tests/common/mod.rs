//! Shared test infrastructure for integration tests.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Result from running the osg-build binary.
#[derive(Debug)]
pub struct RunResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl RunResult {
    /// Parse stdout as JSON, panicking with stderr attached on failure.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|err| {
            panic!(
                "stdout is not JSON ({err}):\n{}\nstderr:\n{}",
                self.stdout, self.stderr
            )
        })
    }
}

/// Scratch environment with its own HOME so user paths are predictable.
pub struct TestEnv {
    pub home: TempDir,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp home"),
        }
    }

    /// Write a file below the scratch home and return its path.
    pub fn write(&self, rel: &str, contents: &str) -> std::path::PathBuf {
        let path = self.home.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent directory");
        }
        std::fs::write(&path, contents).expect("write file");
        path
    }

    /// Run osg-build with `args` and capture its output.
    pub fn run(&self, args: &[&str]) -> RunResult {
        run_in(self.home.path(), args)
    }
}

fn run_in(home: &Path, args: &[&str]) -> RunResult {
    let output = Command::new(env!("CARGO_BIN_EXE_osg-build"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn osg-build");
    RunResult {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
