//! Test harness utilities for sigil integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use std::process::Output;
use tempfile::TempDir;

/// Test environment with an isolated temp project directory.
///
/// No process-global state is mutated — child processes use
/// `.current_dir()` so tests can safely run in parallel.
pub struct TestEnv {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with a valid key.properties and keystore.
    pub fn with_valid_config() -> Self {
        let env = Self::new();
        env.write_keystore("release.jks");
        env.write_props(
            "storeFile=release.jks\n\
             storePassword=store-secret\n\
             keyAlias=upload\n\
             keyPassword=key-secret\n",
        );
        env
    }

    /// Create a sigil command running inside the test directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("sigil").expect("failed to find sigil binary");
        cmd.current_dir(self.dir.path());
        // Keep host configuration from leaking into tests
        cmd.env_remove("SIGIL_PROPERTIES");
        cmd.env_remove("SIGIL_LOG");
        cmd
    }

    /// Write `key.properties` with the given contents.
    pub fn write_props(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("key.properties");
        std::fs::write(&path, contents).expect("failed to write key.properties");
        path
    }

    /// Write a placeholder keystore file with the given name.
    pub fn write_keystore(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, b"not a real keystore").expect("failed to write keystore");
        path
    }

    /// Shortcut for `sigil check`.
    pub fn check(&self) -> Output {
        self.cmd()
            .arg("check")
            .output()
            .expect("failed to run sigil check")
    }

    /// Shortcut for `sigil variant <build_type>`.
    pub fn variant(&self, build_type: &str) -> Output {
        self.cmd()
            .args(["variant", build_type])
            .output()
            .expect("failed to run sigil variant")
    }
}

/// Assert a command succeeded, printing stderr on failure.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Assert a command failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "command unexpectedly succeeded: {}",
        String::from_utf8_lossy(&output.stdout)
    );
}

/// Captured stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Captured stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
