//! Authentication command module for GitHub credentials management.
//!
//! This module provides commands for configuring authentication with GitHub
//! using a Personal Access Token, plus the token resolution used by the
//! listing and purge commands. Deleting repositories requires a token with
//! the `repo` and `delete_repo` scopes.
//!
//! ## Security
//!
//! The token is stored in the system keyring rather than in the
//! configuration file. At run time the token is resolved from the
//! `GITHUB_TOKEN` environment variable first, then the keyring, then an
//! interactive prompt.

use clap::Subcommand;
use keyring::Entry;
use tracing::{debug, error, info, instrument};

use crate::{
    config::{get_config_path, AppConfig},
    errors::Error,
};

pub const KEY_RING_SERVICE_NAME: &str = "repo_reaper_cli";
pub const KEY_RING_USER_TOKEN: &str = "github_token";

/// Environment variable consulted before the keyring.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;

/// Authentication subcommands for managing GitHub credentials.
#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Configure GitHub authentication credentials.
    ///
    /// Stores a Personal Access Token securely in the system keyring.
    #[command(name = "github")]
    GitHub {
        /// Authentication method to configure.
        ///
        /// Only "token" (Personal Access Token) is supported; deleting your
        /// own repositories is a user operation, not an app operation.
        #[arg(default_value = "token")]
        method: String,
    },
}

/// Executes the specified authentication command.
///
/// # Arguments
///
/// * `cmd` - The authentication command to execute
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration file cannot be loaded or saved
/// - Keyring operations fail
/// - An unsupported authentication method is specified
/// - The entered token is empty
#[instrument]
pub async fn execute(cmd: &AuthCommands) -> Result<(), Error> {
    match cmd {
        AuthCommands::GitHub { method } => auth_github(method).await,
    }
}

/// Configures GitHub authentication based on the specified method.
///
/// Prompts the user for a Personal Access Token, stores it in the system
/// keyring, and records the chosen method in the application configuration.
#[instrument]
async fn auth_github(method: &str) -> Result<(), Error> {
    debug!(message = "Authenticating with GitHub", method = method);

    let config_path = get_config_path(None);
    let mut config = match AppConfig::load_or_default(&config_path) {
        Ok(c) => c,
        Err(e) => {
            error!(message = "Failed to load configuration", path = ?config_path, error = ?e);
            return Err(Error::Config("Failed to load configuration".to_string()));
        }
    };

    match method {
        "token" => {
            // Personal Access Token authentication
            info!(message = "GitHub Personal Access Token Authentication");
            println!("GitHub Personal Access Token Authentication");
            println!("------------------------------------------");
            println!("Please provide your GitHub Personal Access Token.");
            println!("Deleting repositories requires the 'repo' and 'delete_repo' scopes.");

            let mut token = String::new();
            std::io::stdin()
                .read_line(&mut token)
                .map_err(|e| Error::Auth(format!("Failed to read input: {}", e)))?;
            let token = token.trim();
            debug!(message = "Read token from stdin");

            if token.is_empty() {
                let err = Error::Auth("Token cannot be empty".to_string());
                error!(message = "Token cannot be empty", error = ?err);
                return Err(err);
            }

            let keyring = Entry::new(KEY_RING_SERVICE_NAME, KEY_RING_USER_TOKEN).map_err(|e| {
                Error::Auth(format!("Failed to create an entry in the keyring: {}", e))
            })?;
            keyring
                .set_password(token)
                .map_err(|e| Error::Auth(format!("Failed to save token to keyring: {}", e)))?;
            debug!(message = "Saved token to keyring");

            config.authentication.auth_method = "token".to_string();
            config.save(&config_path).map_err(|e| {
                error!(error = e.to_string(), "Failed to save the configuration");
                Error::Config("Failed to save the configuration.".to_string())
            })?;
            info!(
                message = "Updated configuration with auth method",
                auth_method = "token"
            );

            println!("GitHub token authentication configured successfully!");
            Ok(())
        }
        other => Err(Error::Auth(format!(
            "Unsupported authentication method: {}. Only 'token' is supported.",
            other
        ))),
    }
}

/// Reads the stored token from the system keyring, if any.
///
/// Keyring failures are treated the same as an absent entry; the caller
/// falls through to the next resolution step.
pub fn read_stored_token() -> Option<String> {
    let entry = Entry::new(KEY_RING_SERVICE_NAME, KEY_RING_USER_TOKEN).ok()?;
    entry.get_password().ok()
}

/// Resolves the GitHub token for a run.
///
/// Resolution order: the `GITHUB_TOKEN` environment variable, then the
/// system keyring, then an interactive prompt.
///
/// # Errors
///
/// Returns `Error::Auth` if no token can be resolved, including when the
/// interactive prompt yields an empty value.
pub fn resolve_token<AskFn>(ask_user_for_value: &AskFn) -> Result<String, Error>
where
    AskFn: Fn(&str) -> Result<String, Error>,
{
    let env_token = std::env::var(GITHUB_TOKEN_ENV)
        .ok()
        .filter(|token| !token.is_empty());
    select_token(env_token, read_stored_token(), ask_user_for_value)
}

/// Picks the first available token source, prompting as the last resort.
///
/// Split from [`resolve_token`] so the ordering is testable without touching
/// process environment or the real keyring.
fn select_token<AskFn>(
    env_token: Option<String>,
    stored_token: Option<String>,
    ask_user_for_value: &AskFn,
) -> Result<String, Error>
where
    AskFn: Fn(&str) -> Result<String, Error>,
{
    if let Some(token) = env_token {
        debug!(message = "Using token from environment");
        return Ok(token);
    }

    if let Some(token) = stored_token {
        debug!(message = "Using token from keyring");
        return Ok(token);
    }

    let token = ask_user_for_value("Enter your GitHub Personal Access Token: ")?;
    if token.is_empty() {
        return Err(Error::Auth(
            "A GitHub Personal Access Token is required".to_string(),
        ));
    }

    Ok(token)
}
