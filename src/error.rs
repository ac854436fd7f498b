//! Error types for the build-css wrapper.

use std::{
    env::VarError,
    io,
    path::PathBuf,
    process::{ExitCode, ExitStatus},
    result::Result as StdResult,
};

use thiserror::Error;
use toml::de::Error as TomlError;

/// Result type for build-css operations.
pub type Result<T> = StdResult<T, Error>;

/// Errors that terminate the wrapper.
#[derive(Debug, Error)]
pub enum Error {
    /// The CSS tool could not be started.
    #[error("Failed to launch `{program}`: {source}")]
    Launch {
        /// Program that failed to spawn.
        program: String,
        /// Underlying spawn error.
        source: io::Error,
    },
    /// The CSS tool exited with a failure status or was killed.
    #[error("Command failed: {command} ({status})")]
    Exit {
        /// Rendered command line of the child process.
        command: String,
        /// Exit status reported for the child.
        status: ExitStatus,
    },
    /// The running executable's location could not be determined.
    #[error("Failed to locate the build-css executable: {source}")]
    ExecutableDir {
        /// Underlying IO error.
        source: io::Error,
    },
    /// The current directory could not be read.
    #[error("Failed to read the current directory: {source}")]
    CurrentDir {
        /// Underlying IO error.
        source: io::Error,
    },
    /// A path was not a valid file system location.
    #[error("Invalid path: {path}")]
    InvalidPath {
        /// Path that could not be used.
        path: PathBuf,
    },
    /// A root path could not be expanded.
    #[error("Invalid root path: {path}: {source}")]
    PathExpansion {
        /// Input path that failed to expand.
        path: String,
        /// Underlying expansion error.
        source: shellexpand::LookupError<VarError>,
    },
    /// The configuration file could not be read.
    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The configuration file could not be parsed.
    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        source: TomlError,
    },
    /// The configured tool command could not be split into words.
    #[error("Invalid tool command `{command}`: {message}")]
    CommandParse {
        /// Command string from the config.
        command: String,
        /// Error message describing the parse failure.
        message: String,
    },
    /// The configured tool command was blank.
    #[error("Tool command in {path} is empty")]
    CommandEmpty {
        /// Path to the config file.
        path: PathBuf,
    },
}

impl Error {
    /// Map errors to exit codes for CLI termination.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }
}
