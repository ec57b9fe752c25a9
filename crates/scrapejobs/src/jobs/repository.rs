//! The persistence capability the job service is built on.

use super::model::{Job, JobStatus};
use crate::error::RepositoryError;

/// Filter for [`JobRepository::select`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectParams {
    pub status: Option<JobStatus>,
    pub limit: Option<usize>,
}

/// Storage for jobs. Any engine providing these five operations can back a
/// [`crate::jobs::JobService`]; engine-specific failures are reported as
/// [`RepositoryError::Backend`].
pub trait JobRepository: Send + Sync {
    /// Fails with [`RepositoryError::AlreadyExists`] for a duplicate id.
    fn create(&self, job: &Job) -> Result<(), RepositoryError>;

    /// Fails with [`RepositoryError::NotFound`] for an unknown id.
    fn get(&self, id: &str) -> Result<Job, RepositoryError>;

    /// Fails with [`RepositoryError::NotFound`] for an unknown id.
    fn update(&self, job: &Job) -> Result<(), RepositoryError>;

    /// Deleting an unknown id is not an error.
    fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    /// Jobs matching `params`, oldest first.
    fn select(&self, params: &SelectParams) -> Result<Vec<Job>, RepositoryError>;
}
