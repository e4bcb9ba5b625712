//! Command modules for the RepoReaper CLI.
//!
//! This module contains all the command implementations for the CLI application.
//! Each submodule handles a specific command category:
//!
//! - `auth_cmd`: Authentication-related commands and token resolution
//! - `list_cmd`: Non-destructive repository listing
//! - `purge_cmd`: The interactive bulk-deletion flow

pub mod auth_cmd;
pub mod list_cmd;
pub mod purge_cmd;
