//! Error handling for aocgen.
//! Defines the error taxonomy and result alias used throughout the generator.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for scaffolding operations.
///
/// A file that is skipped because it already exists is not an error; see
/// [`crate::processor::WriteOutcome`].
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed request (day or year out of range, empty work dir).
    /// Raised before any filesystem or network operation.
    #[error("Invalid input: {0}.")]
    InvalidInput(String),

    /// Network or HTTP failure while downloading the puzzle input.
    #[error("Failed to fetch puzzle input from '{url}': {reason}.")]
    FetchError { url: String, reason: String },

    /// Filesystem failure while writing a planned file.
    #[error("Failed to write '{}': {source}.", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template rendering failed. Built-in templates only reference known
    /// tokens, so this indicates a bug rather than bad user input.
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    /// Errors while locating or parsing the configuration file.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Process exit code for this error: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidInput(_) => 2,
            _ => 1,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with [`Error::exit_code`].
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}
