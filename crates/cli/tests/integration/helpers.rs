//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;

/// Create a CLI command for the realloc binary.
pub fn realloc_cmd() -> Command {
    Command::cargo_bin("realloc").unwrap()
}

/// Absolute path to a JSON fixture.
pub fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}.json", env!("CARGO_MANIFEST_DIR"), name)
}
