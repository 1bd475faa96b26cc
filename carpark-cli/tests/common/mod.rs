//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing: an isolated test
//! environment with its own data directory and command builders for the
//! common invocation patterns.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the carpark data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created yet; carpark creates it on
    /// first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("carpark-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("carpark").expect("Failed to find carpark binary")
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        // Shield the test from ambient overrides
        cmd.env_remove("CARPARK_TOTAL_SLOTS")
            .env_remove("CARPARK_HANDICAP_SLOTS")
            .env_remove("CARPARK_EV_SLOTS")
            .env_remove("CARPARK_LOCK_WAIT_SECONDS")
            .env_remove("CARPARK_OUTPUT_FORMAT")
            .env_remove("CARPARK_LOG_MODE")
            .env_remove("CARPARK_CONFIG")
            .env_remove("CARPARK_BUSY_TIMEOUT")
            .env_remove("CARPARK_DISABLE_AUTOINIT");
        cmd
    }

    /// Initialize the lot with the default 100-slot layout.
    ///
    /// # Panics
    /// Panics if the init command fails.
    pub fn init(&self) {
        self.command().arg("init").assert().success();
    }

    /// Park a vehicle, asserting success, and return the allocated slot id.
    ///
    /// # Panics
    /// Panics if the park command fails or prints unexpected output.
    pub fn park(&self, plate: &str, vehicle_type: &str) -> String {
        let output = self
            .command()
            .arg("park")
            .arg(plate)
            .arg("--vehicle-type")
            .arg(vehicle_type)
            .output()
            .expect("Failed to run park command");

        assert!(
            output.status.success(),
            "Park failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        // Output shape: "Parked <plate> at <slot> (<category>)"
        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout
            .split_whitespace()
            .nth(3)
            .expect("Park output missing slot id")
            .to_string()
    }
}
