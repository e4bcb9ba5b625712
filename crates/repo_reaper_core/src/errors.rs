//! Error types for the core deletion workflow.
//!
//! Two error families live here. [`SelectionError`] covers everything that
//! can go wrong while interpreting the user's selection expression; these are
//! local and recoverable, the caller re-prompts. [`DirectoryError`] covers
//! failures reported by the repository directory; a listing failure is fatal
//! to the run while a per-repository deletion failure is recorded in the
//! report and never aborts the batch.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors produced while parsing a selection expression.
///
/// Every variant names what the user got wrong with enough detail to correct
/// the input. The whole expression is rejected on the first error; no partial
/// selection is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The expression was empty after trimming whitespace.
    #[error("Selection is empty")]
    Empty,

    /// A token was not an integer literal or a range of two integer literals.
    ///
    /// This covers non-numeric tokens, empty tokens produced by stray commas,
    /// and tokens with more than one hyphen.
    #[error("Malformed selection token '{token}'")]
    Malformed {
        /// The offending token as the user entered it
        token: String,
    },

    /// A range token whose start is greater than its end, e.g. `5-3`.
    #[error("Invalid range '{token}': start is greater than end")]
    InvalidRange {
        /// The offending token as the user entered it
        token: String,
    },

    /// A resolved index that does not refer to a listed repository.
    #[error("Index {index} is out of range, valid indices are 1 to {bound}")]
    OutOfRange {
        /// The offending index
        index: usize,
        /// The highest valid index
        bound: usize,
    },
}

/// Errors reported by a repository directory.
///
/// These mirror the failure modes of the hosted forge API: the token can be
/// rejected, the user can lack permission to delete a repository, the
/// repository can be gone already, or the request can fail in transit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The directory rejected the supplied credentials.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The authenticated user is not allowed to perform the operation.
    #[error("Permission denied")]
    PermissionDenied,

    /// The repository does not exist or is not visible to the user.
    #[error("Repository not found")]
    NotFound,

    /// The request failed without a definitive answer from the directory.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<github_client::Error> for DirectoryError {
    fn from(error: github_client::Error) -> Self {
        match error {
            github_client::Error::AuthError(message) => DirectoryError::Auth(message),
            github_client::Error::PermissionDenied => DirectoryError::PermissionDenied,
            github_client::Error::NotFound => DirectoryError::NotFound,
            other => DirectoryError::Transport(other.to_string()),
        }
    }
}
