//! Integration tests for the realloc CLI.
//!
//! These tests exercise the full command path against JSON fixtures, with
//! no network access.
//!
//! ```bash
//! cargo test -p realloc-rs-cli --test integration
//! ```

mod integration {
    pub mod helpers;

    pub mod cli_validation_tests;
    pub mod run_tests;
}
