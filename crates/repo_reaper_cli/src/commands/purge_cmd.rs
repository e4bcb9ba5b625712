//! The interactive bulk-deletion command.
//!
//! Walks the user through the destructive flow: list, select, confirm,
//! delete, report. The flow is split so the interactive part
//! ([`run_purge`]) only depends on the [`RepositoryDirectory`] trait and an
//! injected prompt function, which keeps it testable without a terminal or
//! a network.
//!
//! Deletion is irreversible. The flow never issues a delete call before the
//! confirmation gate has accepted the typed keyword, and once the batch has
//! started there is no mid-batch cancellation.

use github_client::GitHubClient;
use repo_reaper_core::{
    confirms_deletion, resolve_selection, DeletionExecutor, DeletionOutcome, DeletionReport,
    RepositoryDirectory, CONFIRMATION_KEYWORD,
};
use tracing::{info, instrument};

use crate::commands::auth_cmd;
use crate::commands::list_cmd::format_repository_table;
use crate::errors::Error;

#[cfg(test)]
#[path = "purge_cmd_tests.rs"]
mod tests;

/// How a purge run ended.
#[derive(Debug)]
pub enum PurgeOutcome {
    /// The account has no repositories; nothing to select.
    NoRepositories,
    /// The user did not type the confirmation keyword; nothing was deleted.
    Cancelled,
    /// The batch ran; the report holds one outcome per selected repository.
    Executed(DeletionReport),
}

/// Executes the purge command against the real GitHub directory.
///
/// Resolves the token, authenticates, then hands over to [`run_purge`].
///
/// # Errors
///
/// Returns an error if the token cannot be resolved, authentication fails,
/// or the repository listing cannot be fetched. Per-repository deletion
/// failures are not errors; they are part of the report.
#[instrument(skip(ask_user_for_value))]
pub async fn execute<AskFn>(ask_user_for_value: &AskFn) -> Result<PurgeOutcome, Error>
where
    AskFn: Fn(&str) -> Result<String, Error>,
{
    println!("RepoReaper - bulk deletion of GitHub repositories");
    println!("=================================================");
    println!("WARNING: Deleting a repository is irreversible!");
    println!("Please be absolutely sure before proceeding.");
    println!();

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

    run_purge(&client, ask_user_for_value).await
}

/// Runs the interactive deletion flow against any repository directory.
///
/// The listing is fetched once and is read-only truth for the rest of the
/// run. Selection errors are shown verbatim and the user is re-prompted;
/// anything other than the exact confirmation keyword aborts with no
/// network effect.
pub async fn run_purge<D, AskFn>(directory: &D, ask_user_for_value: &AskFn) -> Result<PurgeOutcome, Error>
where
    D: RepositoryDirectory,
    AskFn: Fn(&str) -> Result<String, Error>,
{
    let repositories = directory.list_repositories().await?;

    if repositories.is_empty() {
        println!("No repositories found.");
        return Ok(PurgeOutcome::NoRepositories);
    }

    println!("Found {} repositories:", repositories.len());
    println!("{}", format_repository_table(&repositories));
    println!();
    println!("Enter the numbers of the repositories you want to delete, separated by commas.");
    println!("Example: 1,3,5-8 (to delete repositories 1, 3, and 5 through 8)");

    let selected = loop {
        let expression = ask_user_for_value("Repositories to delete: ")?;
        match resolve_selection(&repositories, &expression) {
            Ok(selected) => break selected,
            Err(err) => println!("{err}"),
        }
    };

    println!();
    println!(
        "WARNING: You are about to delete {} repositories!",
        selected.len()
    );
    println!("The following repositories will be deleted:");
    for repository in &selected {
        println!("- {} (owner: {})", repository.name(), repository.owner());
    }
    println!();

    let confirmation = ask_user_for_value(&format!(
        "To confirm deletion, type '{}': ",
        CONFIRMATION_KEYWORD
    ))?;
    if !confirms_deletion(&confirmation) {
        info!(message = "Confirmation refused, aborting");
        println!("Operation cancelled.");
        return Ok(PurgeOutcome::Cancelled);
    }

    println!();
    println!("Deleting repositories...");

    let executor = DeletionExecutor::new(directory);
    let report = executor.execute(&selected).await;

    println!("{}", format_deletion_report(&report));

    Ok(PurgeOutcome::Executed(report))
}

/// Renders the final per-repository report plus the summary line.
pub fn format_deletion_report(report: &DeletionReport) -> String {
    let mut output = String::new();

    for record in report.records() {
        let line = match record.outcome() {
            DeletionOutcome::Deleted => {
                format!("✓ {} deleted\n", record.repository().full_name())
            }
            DeletionOutcome::Failed { reason } => {
                format!("✗ {} failed: {}\n", record.repository().full_name(), reason)
            }
        };
        output.push_str(&line);
    }

    output.push_str(&format!(
        "{}/{} repositories deleted.",
        report.deleted_count(),
        report.len()
    ));

    output
}
