//! The repository directory seam.
//!
//! This module provides the [`RepositoryDirectory`] trait, the boundary
//! between the deletion workflow and the hosted forge. The workflow only ever
//! talks to the directory through this trait, so the executor can be tested
//! against an in-memory implementation while production runs talk to GitHub
//! through [`github_client::GitHubClient`].

use async_trait::async_trait;
use github_client::GitHubClient;

use crate::errors::DirectoryError;
use crate::repository::RepositoryRecord;

/// Lists and deletes the authenticated user's repositories.
///
/// The listing is fetched once per run; implementations are not expected to
/// cache or re-synchronize. Each deletion is a single attempt with no retry.
#[async_trait]
pub trait RepositoryDirectory: Send + Sync {
    /// Produces the ordered listing of the authenticated user's repositories.
    ///
    /// A failure here is fatal to the run; there is nothing to select if the
    /// listing cannot be fetched.
    async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>, DirectoryError>;

    /// Deletes one repository by its `owner`/`name` identifier.
    async fn delete_repository(&self, owner: &str, name: &str) -> Result<(), DirectoryError>;
}

#[async_trait]
impl RepositoryDirectory for GitHubClient {
    async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>, DirectoryError> {
        let repositories = GitHubClient::list_repositories(self).await?;
        Ok(repositories
            .into_iter()
            .map(RepositoryRecord::from)
            .collect())
    }

    async fn delete_repository(&self, owner: &str, name: &str) -> Result<(), DirectoryError> {
        GitHubClient::delete_repository(self, owner, name).await?;
        Ok(())
    }
}
