//! Repository listing command.
//!
//! Fetches and renders the numbered repository table without touching
//! anything. The same table is shown at the start of the purge flow; the
//! numbers in the first column are the indices a selection expression
//! refers to.

use github_client::GitHubClient;
use repo_reaper_core::{RepositoryDirectory, RepositoryRecord};
use tracing::instrument;

use crate::commands::auth_cmd;
use crate::errors::Error;

#[cfg(test)]
#[path = "list_cmd_tests.rs"]
mod tests;

/// Executes the list command.
///
/// Resolves the token, authenticates, fetches the full repository listing
/// and prints it as a numbered table.
///
/// # Errors
///
/// Returns an error if the token cannot be resolved, authentication fails,
/// or the listing cannot be fetched.
#[instrument(skip(ask_user_for_value))]
pub async fn execute<AskFn>(ask_user_for_value: &AskFn) -> Result<(), Error>
where
    AskFn: Fn(&str) -> Result<String, Error>,
{
    let token = auth_cmd::resolve_token(ask_user_for_value)?;
    let octocrab = github_client::create_token_client(&token)
        .map_err(|e| Error::Auth(format!("Failed to build the GitHub client: {}", e)))?;
    let client = GitHubClient::new(octocrab);

    let user = client
        .get_authenticated_user()
        .await
        .map_err(|e| Error::Auth(format!("Failed to authenticate with GitHub: {}", e)))?;
    println!("Authenticated as {}.", user.login);
    println!();
    println!("Fetching your repositories...");

    let repositories = RepositoryDirectory::list_repositories(&client).await?;
    if repositories.is_empty() {
        println!("No repositories found.");
        return Ok(());
    }

    println!("Found {} repositories:", repositories.len());
    println!("{}", format_repository_table(&repositories));

    Ok(())
}

/// Renders a numbered repository table.
///
/// Columns are `#`, `Repository`, and `Visibility`, with widths computed
/// from the content. The first column holds the 1-based display index that
/// selection expressions refer to.
pub fn format_repository_table(repositories: &[RepositoryRecord]) -> String {
    let headers = ["#", "Repository", "Visibility"];

    let rows: Vec<[String; 3]> = repositories
        .iter()
        .enumerate()
        .map(|(position, repository)| {
            [
                (position + 1).to_string(),
                repository.full_name(),
                if repository.is_private() {
                    "Private".to_string()
                } else {
                    "Public".to_string()
                },
            ]
        })
        .collect();

    let mut widths = [headers[0].len(), headers[1].len(), headers[2].len()];
    for row in &rows {
        for (column, value) in row.iter().enumerate() {
            widths[column] = widths[column].max(value.len());
        }
    }

    let mut table = String::new();

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(column, header)| format!("{:<width$}", header, width = widths[column]))
        .collect::<Vec<_>>()
        .join("  ");
    table.push_str(header_line.trim_end());
    table.push('\n');

    let total_width = widths.iter().sum::<usize>() + (headers.len() - 1) * 2;
    table.push_str(&"-".repeat(total_width));

    for row in &rows {
        table.push('\n');
        let line = row
            .iter()
            .enumerate()
            .map(|(column, value)| format!("{:<width$}", value, width = widths[column]))
            .collect::<Vec<_>>()
            .join("  ");
        table.push_str(line.trim_end());
    }

    table
}
