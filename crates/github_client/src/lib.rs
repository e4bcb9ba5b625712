//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub,
//! authenticating as a user with a personal access token. It covers the
//! operations the repository reaper needs: looking up the authenticated user,
//! listing the user's repositories, and deleting a repository.

use http::StatusCode;
use octocrab::Octocrab;
use serde::Serialize;
use tracing::{debug, error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod repository;
pub use repository::Repository;

pub mod user;
pub use user::User;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Number of repositories requested per page when listing.
const REPOS_PER_PAGE: u8 = 100;

/// Query parameters for paginated listing endpoints.
#[derive(Serialize)]
struct PageParams {
    page: u32,
    per_page: u8,
}

/// A client for interacting with the GitHub API, authenticated as a user.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new client from a pre-configured `Octocrab` instance.
    ///
    /// Use [`create_token_client`] to build an `Octocrab` instance that is
    /// authenticated with a personal access token.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Fetches the account the client is authenticated as.
    ///
    /// This is the first call the deletion workflow makes. Besides providing
    /// the login for display, it verifies the token before anything else
    /// happens.
    ///
    /// # Returns
    ///
    /// A `Result` containing the authenticated [`User`], or an error if the
    /// request fails.
    ///
    /// # Errors
    ///
    /// Returns an `Error::AuthError` if the token is rejected by GitHub,
    /// or a transport/API error if the request cannot be completed.
    #[instrument(skip(self))]
    pub async fn get_authenticated_user(&self) -> Result<User, Error> {
        let user: User = self
            .client
            .get("/user", None::<&()>)
            .await
            .map_err(|e| handle_octocrab_error("Failed to fetch the authenticated user", e))?;

        info!(
            login = user.login,
            user_id = user.id,
            "Fetched authenticated user"
        );
        Ok(user)
    }

    /// Lists all repositories of the authenticated user.
    ///
    /// Repositories are fetched from `GET /user/repos` page by page, 100 at a
    /// time, until GitHub returns an empty page. The result preserves the
    /// order GitHub returns, concatenated across pages.
    ///
    /// # Returns
    ///
    /// A `Result` containing all repositories visible to the authenticated
    /// user, or an error if any page request fails.
    ///
    /// # Errors
    ///
    /// Returns an `Error::AuthError` if the token is rejected, or a
    /// transport/API error for other failures. A failure on any page fails
    /// the whole listing; no partial result is returned.
    #[instrument(skip(self))]
    pub async fn list_repositories(&self) -> Result<Vec<Repository>, Error> {
        let mut repositories = Vec::new();
        let mut page = 1u32;

        loop {
            debug!(page = page, per_page = REPOS_PER_PAGE, "Fetching repository page");

            let batch: Vec<Repository> = self
                .client
                .get(
                    "/user/repos",
                    Some(&PageParams {
                        page,
                        per_page: REPOS_PER_PAGE,
                    }),
                )
                .await
                .map_err(|e| handle_octocrab_error("Failed to list repositories", e))?;

            if batch.is_empty() {
                break;
            }

            repositories.extend(batch);
            page += 1;
        }

        info!(
            count = repositories.len(),
            "Listed repositories for the authenticated user"
        );
        Ok(repositories)
    }

    /// Deletes a repository.
    ///
    /// Sends `DELETE /repos/{owner}/{repo}`. Deletion is irreversible; the
    /// caller is responsible for confirming the operation with the user
    /// before invoking this.
    ///
    /// # Arguments
    ///
    /// * `owner` - The login of the account that owns the repository.
    /// * `repo` - The name of the repository.
    ///
    /// # Errors
    ///
    /// Returns `Error::PermissionDenied` if the token lacks the `delete_repo`
    /// scope or the user does not own the repository, `Error::NotFound` if
    /// the repository does not exist, or a transport/API error otherwise.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    pub async fn delete_repository(&self, owner: &str, repo: &str) -> Result<(), Error> {
        match self.client.repos(owner, repo).delete().await {
            Ok(()) => {
                info!(owner = owner, repo = repo, "Deleted repository");
                Ok(())
            }
            Err(e) => Err(handle_octocrab_error("Failed to delete repository", e)),
        }
    }
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Arguments
///
/// * `token` - A GitHub personal access token. Deleting repositories requires
///   the `delete_repo` scope; listing requires `repo`.
///
/// # Returns
///
/// A `Result` containing an authenticated `Octocrab` client, or an `Error` if
/// the client cannot be built.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::AuthError(format!("Failed to build the GitHub client: {}", e)))
}

/// Classifies an octocrab error into this crate's error taxonomy and logs it.
///
/// GitHub responses are mapped by status code: 401 becomes `AuthError`, 403
/// becomes `PermissionDenied` (or `RateLimitExceeded` when the response says
/// so), 404 becomes `NotFound`. Errors without a GitHub response are
/// transport failures.
fn handle_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    let classified = match &e {
        octocrab::Error::GitHub { source, .. } => match source.status_code {
            StatusCode::UNAUTHORIZED => Error::AuthError(source.message.clone()),
            StatusCode::FORBIDDEN => {
                if source.message.to_lowercase().contains("rate limit") {
                    Error::RateLimitExceeded
                } else {
                    Error::PermissionDenied
                }
            }
            StatusCode::NOT_FOUND => Error::NotFound,
            _ => Error::ApiError(),
        },
        other => Error::Transport(other.to_string()),
    };

    log_octocrab_error(message, e);
    classified
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = source;
            error!(
                error_message = err.message,
                status_code = err.status_code.as_u16(),
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::UriParse { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),

        octocrab::Error::Uri { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}, Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidHeaderValue { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. One of the header values was invalid.",
            message
        ),
        other => error!(
            error_message = other.to_string(),
            "{}. Failed to process the request",
            message
        ),
    }
}
