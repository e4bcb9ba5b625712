//! Configuration management for the RepoReaper CLI.
//!
//! This module provides functionality for loading, saving, and managing
//! configuration files for the RepoReaper CLI application. The configuration
//! holds CLI-specific settings such as the authentication method; the token
//! itself never lands in the file, it lives in the system keyring.
//!
//! The configuration is stored in TOML format and can be loaded from a
//! specified file path or from the default location in the current directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "config.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the RepoReaper CLI application.
///
/// # Example TOML Configuration
///
/// ```toml
/// [authentication]
/// auth_method = "token"
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// CLI-specific authentication configuration
    #[serde(default)]
    pub authentication: AuthenticationConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path to the configuration file to load
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(AppConfig)` - Successfully loaded and parsed configuration
    /// - `Err(Error::Config)` - If the file doesn't exist, can't be read, or contains invalid TOML
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Loads the configuration, falling back to defaults when no file exists.
    ///
    /// Commands that merely record settings (such as `auth`) should not fail
    /// on a fresh machine where the file has not been created yet.
    pub fn load_or_default(path: &Path) -> Result<Self, Error> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No configuration file at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a TOML file at the specified path.
    ///
    /// Parent directories are created automatically if they don't exist, and
    /// an existing file at the target path is overwritten. The output is
    /// pretty-formatted TOML.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the configuration file should be saved
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration cannot be serialized to TOML (should be rare)
    /// - Parent directories cannot be created due to permissions
    /// - The file cannot be written due to permissions or disk space issues
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        debug!("Saving configuration to {:?}", path);

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
        }

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write configuration file: {}", e)))?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }
}

/// Configuration for CLI authentication settings.
///
/// This structure holds authentication-related configuration for the CLI,
/// including the preferred authentication method for GitHub operations.
/// Currently supports token-based authentication.
///
/// # Fields
///
/// * `auth_method` - The authentication method to use (defaults to "token")
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthenticationConfig {
    #[serde(default = "AuthenticationConfig::default_auth_method")]
    pub auth_method: String,
}

impl AuthenticationConfig {
    /// Returns the default authentication method.
    ///
    /// This is used as the default value for the auth_method field
    /// when deserializing from TOML if the field is not present.
    fn default_auth_method() -> String {
        "token".to_string()
    }

    /// Creates a new AuthenticationConfig with default values.
    pub fn new() -> Self {
        AuthenticationConfig {
            auth_method: Self::default_auth_method(),
        }
    }
}

impl Default for AuthenticationConfig {
    fn default() -> Self {
        Self {
            auth_method: AuthenticationConfig::default_auth_method(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            authentication: AuthenticationConfig::new(),
        }
    }
}

/// Determines the path to the configuration file.
///
/// # Arguments
///
/// * `config_path` - Optional path to a specific configuration file
///
/// # Behaviour
///
/// - If `config_path` is `Some(path)`, returns that path as a `PathBuf`
/// - If `config_path` is `None`, returns `./config.toml` in the current directory
/// - Falls back to the current directory if unable to determine the working directory
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        // Look for config in current directory
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
