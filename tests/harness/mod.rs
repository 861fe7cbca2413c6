//! Test harness utilities for fileenv integration tests.
//!
//! Provides an isolated temp directory for secret files and a
//! preconfigured command builder.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory for secret files.
pub struct TestEnv {
    /// Temporary directory holding secret files; doubles as the
    /// working directory of the spawned fileenv process
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Write a secret file into the temp directory and return its path.
    pub fn write_secret(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write secret file");
        path
    }

    /// A fileenv command running inside the temp directory.
    ///
    /// The parent environment is inherited, so `PATH` lookup works;
    /// tests add their own `*_FILE` variables via `.env()`. Any `*_FILE`
    /// variables already present in the parent environment (e.g.
    /// `SSL_CERT_FILE` on the host) are removed so they cannot leak into
    /// the resolution under test.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("fileenv").expect("failed to find fileenv binary");
        cmd.current_dir(self.dir.path());
        for (key, _) in std::env::vars_os() {
            if let Some(key) = key.to_str() {
                if key.to_ascii_lowercase().ends_with("_file") {
                    cmd.env_remove(key);
                }
            }
        }
        cmd
    }
}
