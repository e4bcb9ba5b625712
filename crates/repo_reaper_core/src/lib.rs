//! # RepoReaper Core
//!
//! This crate provides the core workflow logic for RepoReaper, a tool that
//! bulk-deletes a user's own repositories on GitHub after an explicit typed
//! confirmation.
//!
//! ## Overview
//!
//! One run moves through the following steps:
//! 1. Fetch the repository listing once through a [`RepositoryDirectory`]
//! 2. Parse the user's selection expression into a validated [`SelectionSet`]
//! 3. Gate the destructive path behind the typed confirmation keyword
//! 4. Delete the selected repositories one by one, collecting a
//!    [`DeletionReport`]
//!
//! The pieces are deliberately separate so each is testable without
//! simulating terminal input: the parser and the confirmation gate are pure
//! functions, and the executor only talks to the forge through the
//! [`RepositoryDirectory`] trait.
//!
//! ## Examples
//!
//! ```
//! use repo_reaper_core::{confirmation, selection};
//!
//! let set = selection::parse("1,3,5-8", 10).unwrap();
//! assert_eq!(set.indices(), &[1, 3, 5, 6, 7, 8]);
//!
//! assert!(confirmation::confirms_deletion("DELETE"));
//! assert!(!confirmation::confirms_deletion("delete"));
//! ```

pub mod confirmation;
pub mod directory;
pub mod errors;
pub mod executor;
pub mod repository;
pub mod selection;

pub use confirmation::{confirms_deletion, CONFIRMATION_KEYWORD};
pub use directory::RepositoryDirectory;
pub use errors::{DirectoryError, SelectionError};
pub use executor::{DeletionExecutor, DeletionOutcome, DeletionRecord, DeletionReport};
pub use repository::RepositoryRecord;
pub use selection::SelectionSet;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Resolves a selection expression against a fetched listing.
///
/// Parses `expression` against the size of `repositories` and maps the
/// resulting indices back to their records, cloned in ascending index order.
/// This is the bridge between the 1-based indices the user types and the
/// records the executor deletes.
///
/// # Errors
///
/// Returns the underlying [`SelectionError`] unchanged; the caller is
/// expected to display it and re-prompt.
pub fn resolve_selection(
    repositories: &[RepositoryRecord],
    expression: &str,
) -> Result<Vec<RepositoryRecord>, SelectionError> {
    let selection = selection::parse(expression, repositories.len())?;
    Ok(selection
        .iter()
        .map(|index| repositories[index - 1].clone())
        .collect())
}
