//! # Test Harness
//!
//! Provides utilities for integration testing groceries without affecting user configuration.
//! Uses thread-local storage instead of environment variables to redirect the config file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use groceries::set_home_override;

/// Global lock so tests that touch the home override run one at a time.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment with a temporary "home" (for the config file) and a
/// temporary directory for list files.
pub struct TestEnv {
    /// Temporary directory simulating the user's home
    pub home_dir: TempDir,
    /// Temporary directory holding list files
    pub data_dir: TempDir,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let data_dir = TempDir::new().expect("Failed to create temp data dir");

        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            data_dir,
            test_guard,
        }
    }

    /// Returns the path of a list file inside the data directory.
    pub fn list_path(&self, name: &str) -> PathBuf {
        self.data_dir.path().join(name)
    }

    /// Returns the path where the config file would be stored.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("groceries")
            .join("config")
    }

    /// Writes the config file.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    /// Writes a list file with raw content.
    pub fn write_list(&self, name: &str, content: &str) -> PathBuf {
        let path = self.list_path(name);
        fs::write(&path, content).expect("Failed to write list file");
        path
    }

    /// Reads a list file.
    pub fn read_list(&self, name: &str) -> String {
        read(&self.list_path(name))
    }

    /// Creates a `groc` command running against this environment.
    pub fn groc(&self) -> Command {
        let mut cmd = Command::cargo_bin("groc").unwrap();
        cmd.current_dir(self.data_dir.path());
        cmd.env("HOME", self.home_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

/// Reads a file, panicking with its path on failure.
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}
