#![warn(missing_docs)]
//! Library support for the build-css wrapper.

/// Command-line interface wiring.
mod cli;
/// Optional per-project configuration.
mod config;
/// Verbose notes.
mod diagnostics;
/// Error handling for the crate.
mod error;
/// Color palette and styling for CLI output.
mod palette;
/// Base directory and stylesheet path resolution.
mod paths;
/// Child process construction and execution.
mod runner;
/// Fixture for tests that need a project layout on disk.
#[cfg(test)]
mod testutil;
/// The watch-mode build sequence.
mod watch;

pub use crate::error::{Error, Result};

/// Prefix printed before the message of a fatal error.
pub const ERROR_LABEL: &str = "Error building CSS:";

/// Run the CLI, returning a structured error on failure.
pub async fn run() -> Result<()> {
    cli::run().await
}
