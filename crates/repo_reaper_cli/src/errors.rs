use std::io;

use thiserror::Error;

use repo_reaper_core::DirectoryError;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the RepoReaper CLI application.
///
/// This enum represents all possible error conditions that can arise during
/// CLI operations, including authentication failures, configuration issues,
/// and I/O problems.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error occurred during GitHub authentication process.
    ///
    /// This error is returned when authentication with GitHub fails, such as
    /// invalid tokens, a missing token, or keyring access problems.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Configuration error occurred while loading or parsing configuration.
    ///
    /// This error is returned when there are issues with the configuration file,
    /// such as missing required fields, invalid values, or file access problems.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The repository directory reported a failure that is fatal to the run.
    ///
    /// Listing failures end up here; there is nothing to select when the
    /// listing cannot be fetched. Per-repository deletion failures do not:
    /// those are recorded in the deletion report instead.
    #[error("Repository directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Failed to read user input from the terminal.
    ///
    /// This error wraps underlying I/O errors that occur when reading from
    /// standard input, typically due to a closed or broken stream.
    #[error("Failed to read user input.")]
    ReadInput(io::Error),

    /// Failed to flush the standard output buffer.
    ///
    /// This error occurs when the CLI cannot write output to the terminal,
    /// typically due to broken pipes or terminal issues.
    #[error("Failed to flush the std out buffer.")]
    StdOutFlushFailed,
}
