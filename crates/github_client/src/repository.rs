//! Repository domain types.
//!
//! This module contains types representing GitHub repositories as returned
//! by the repository listing endpoints.

use serde::{Deserialize, Serialize};

use crate::user::User;

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// Represents a GitHub repository.
///
/// This struct contains the information about a repository that the listing
/// and deletion workflow needs: its name, its owner, and its visibility.
/// It provides methods for accessing repository properties and building the
/// `owner/name` identifier used by the deletion endpoint.
///
/// # Examples
///
/// ```rust
/// use github_client::Repository;
///
/// let repo = Repository::new(
///     "hello-world".to_string(),
///     "octocat".to_string(),
///     false,
/// );
///
/// println!("Repository: {}", repo.full_name());
/// println!("Is private: {}", repo.is_private());
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Repository {
    /// The name of the repository
    name: String,
    /// The account that owns the repository
    owner: User,
    /// Whether the repository is private
    private: bool,
}

impl Repository {
    /// Creates a new Repository instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the repository
    /// * `owner` - The login of the owning account
    /// * `private` - Whether the repository is private
    ///
    /// # Returns
    ///
    /// A new `Repository` instance with the provided values.
    pub fn new(name: String, owner: String, private: bool) -> Self {
        Self {
            name,
            owner: User {
                id: 0,
                login: owner,
            },
            private,
        }
    }

    /// Returns the name of the repository.
    ///
    /// # Returns
    ///
    /// A string slice containing the repository name (without owner).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the login of the account that owns the repository.
    pub fn owner(&self) -> &str {
        &self.owner.login
    }

    /// Returns whether the repository is private.
    ///
    /// # Returns
    ///
    /// `true` if the repository is private, `false` if it's public.
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Returns the full `owner/name` identifier of the repository.
    ///
    /// This is the identifier the GitHub API uses to address a repository,
    /// e.g. in `DELETE /repos/{owner}/{name}`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}
