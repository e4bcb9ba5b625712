//! Repository domain types.
//!
//! The core's view of one listed repository. Records are produced once when
//! the listing is fetched and are read-only truth for the remainder of the
//! run; a repository deleted or renamed concurrently by another actor is not
//! detected until its deletion attempt fails.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// One repository as seen by the deletion workflow.
///
/// The identifier is `owner/name`, unique per account. The display index a
/// user selects by is not part of the record; it is the record's 1-based
/// position in the listing, stable only within a single run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    owner: String,
    name: String,
    private: bool,
}

impl RepositoryRecord {
    /// Creates a record from its parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>, private: bool) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            private,
        }
    }

    /// Returns the login of the account that owns the repository.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the name of the repository, without the owner.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the repository is private.
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Returns the `owner/name` identifier of the repository.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl From<github_client::Repository> for RepositoryRecord {
    fn from(repository: github_client::Repository) -> Self {
        Self {
            owner: repository.owner().to_string(),
            name: repository.name().to_string(),
            private: repository.is_private(),
        }
    }
}

impl std::fmt::Display for RepositoryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
