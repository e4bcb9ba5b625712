//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub API
//! through the github_client crate. It provides enough context to distinguish authentication
//! problems, missing resources, and transport failures from each other, since callers react
//! differently to each.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// This enum represents the error conditions when working with the GitHub API,
/// including authentication failures, permission problems, rate limiting, and
/// transport issues. Each variant provides specific context about what went
/// wrong for debugging and error handling.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.delete_repository("octocat", "hello-world").await {
///     Ok(()) => println!("Repository deleted"),
///     Err(Error::PermissionDenied) => eprintln!("Token lacks the delete_repo scope"),
///     Err(Error::NotFound) => eprintln!("Repository does not exist"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic API request failure.
    ///
    /// This error occurs when a GitHub API request fails for unspecified reasons.
    /// Check the GitHub API status and ensure your request parameters are correct.
    #[error("API request failed")]
    ApiError(),

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when:
    /// - The personal access token is invalid, expired, or revoked
    /// - Network connectivity issues prevent authentication
    /// - The client cannot be constructed from the supplied credentials
    ///
    /// The contained string provides specific details about the authentication failure.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// The requested resource was not found.
    ///
    /// This error occurs when a GitHub API request returns a 404 status code,
    /// indicating that the requested repository does not exist or is not
    /// accessible with the current authentication.
    #[error("Resource not found")]
    NotFound,

    /// The authenticated user is not allowed to perform the operation.
    ///
    /// This error occurs when a GitHub API request returns a 403 status code.
    /// For repository deletion this typically means the token is missing the
    /// `delete_repo` scope, or the user does not own the repository.
    #[error("Permission denied")]
    PermissionDenied,

    /// GitHub API rate limit has been exceeded.
    ///
    /// This error occurs when the client has made too many requests in a given
    /// time window. Check the `X-RateLimit-Reset` header in the response to
    /// determine when to retry.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The request failed before a GitHub response was received.
    ///
    /// This error wraps connection failures, DNS errors, and other transport
    /// level problems where no HTTP status code is available.
    #[error("Transport error: {0}")]
    Transport(String),
}
