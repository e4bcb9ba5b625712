//! Deletion execution and reporting.
//!
//! The executor walks the selected repositories in the ascending-index order
//! the parser established and issues one delete call per repository. Each
//! call is independent: a failure is recorded and the batch continues. The
//! report is only handed out once every selected repository has been
//! attempted; no partial state is exposed mid-run.

use tracing::{info, warn};

use crate::directory::RepositoryDirectory;
use crate::errors::DirectoryError;
use crate::repository::RepositoryRecord;

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;

/// The result of one deletion attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The repository was deleted.
    Deleted,
    /// The deletion attempt failed; the batch continued regardless.
    Failed {
        /// Why the directory refused or failed the deletion
        reason: DirectoryError,
    },
}

impl DeletionOutcome {
    /// Returns whether this outcome is a successful deletion.
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeletionOutcome::Deleted)
    }
}

/// One repository paired with the outcome of its deletion attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeletionRecord {
    repository: RepositoryRecord,
    outcome: DeletionOutcome,
}

impl DeletionRecord {
    /// Returns the repository this record is about.
    pub fn repository(&self) -> &RepositoryRecord {
        &self.repository
    }

    /// Returns the outcome of the deletion attempt.
    pub fn outcome(&self) -> &DeletionOutcome {
        &self.outcome
    }
}

/// The ordered, immutable record of one run's deletion attempts.
///
/// Contains exactly one entry per selected repository, in the order the
/// deletions were attempted (ascending display index).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeletionReport {
    records: Vec<DeletionRecord>,
}

impl DeletionReport {
    /// Returns the per-repository records in attempt order.
    pub fn records(&self) -> &[DeletionRecord] {
        &self.records
    }

    /// Returns the total number of attempted deletions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the report contains no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns how many repositories were deleted.
    pub fn deleted_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.outcome.is_deleted())
            .count()
    }

    /// Returns how many deletion attempts failed.
    pub fn failed_count(&self) -> usize {
        self.len() - self.deleted_count()
    }
}

/// Deletes a batch of repositories through a [`RepositoryDirectory`].
pub struct DeletionExecutor<'a, D: RepositoryDirectory> {
    directory: &'a D,
}

impl<'a, D: RepositoryDirectory> DeletionExecutor<'a, D> {
    /// Creates an executor that deletes through the given directory.
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// Attempts to delete every repository in `selected`, in order.
    ///
    /// Exactly one delete call is issued per repository; there is no retry.
    /// A per-repository failure is caught, recorded as
    /// [`DeletionOutcome::Failed`], and never aborts the batch. The returned
    /// report contains one record per selected repository, in the order the
    /// attempts were made.
    pub async fn execute(&self, selected: &[RepositoryRecord]) -> DeletionReport {
        let mut records = Vec::with_capacity(selected.len());

        for repository in selected {
            info!(repository = %repository.full_name(), "Deleting repository");

            let outcome = match self
                .directory
                .delete_repository(repository.owner(), repository.name())
                .await
            {
                Ok(()) => DeletionOutcome::Deleted,
                Err(reason) => {
                    warn!(
                        repository = %repository.full_name(),
                        error = %reason,
                        "Failed to delete repository, continuing with the batch"
                    );
                    DeletionOutcome::Failed { reason }
                }
            };

            records.push(DeletionRecord {
                repository: repository.clone(),
                outcome,
            });
        }

        let deleted = records
            .iter()
            .filter(|record| record.outcome.is_deleted())
            .count();
        info!(
            attempted = records.len(),
            deleted = deleted,
            "Finished deletion batch"
        );

        DeletionReport { records }
    }
}
