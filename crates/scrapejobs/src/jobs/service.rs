use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::model::{Job, JobStatus};
use super::repository::{JobRepository, SelectParams};
use crate::error::{DecodeError, Result, ServiceError};
use crate::results::{DecodeOptions, DecodedResults, ResultDecoder, ResultRecord};
use crate::storage::ResultPaths;

/// Entry point for job management and result retrieval.
///
/// Job bookkeeping is delegated to the injected [`JobRepository`]; this type
/// adds the coupling to each job's result file under the data folder.
pub struct JobService {
    repo: Arc<dyn JobRepository>,
    paths: ResultPaths,
    decoder: ResultDecoder,
}

impl JobService {
    /// Creates a service that decodes result files leniently.
    pub fn new<P: AsRef<Path>>(repo: Arc<dyn JobRepository>, data_folder: P) -> Self {
        Self::with_options(repo, data_folder, DecodeOptions::default())
    }

    pub fn with_options<P: AsRef<Path>>(
        repo: Arc<dyn JobRepository>,
        data_folder: P,
        options: DecodeOptions,
    ) -> Self {
        Self {
            repo,
            paths: ResultPaths::new(data_folder),
            decoder: ResultDecoder::new(options),
        }
    }

    pub fn data_folder(&self) -> &Path {
        self.paths.data_folder()
    }

    pub fn create(&self, job: &Job) -> Result<()> {
        job.validate().map_err(|source| ServiceError::InvalidJob {
            id: job.id.clone(),
            source,
        })?;
        self.repo.create(job)?;
        log::info!("Created job {} ({})", job.id, job.name);
        Ok(())
    }

    pub fn all(&self) -> Result<Vec<Job>> {
        Ok(self.repo.select(&SelectParams::default())?)
    }

    pub fn get(&self, id: &str) -> Result<Job> {
        Ok(self.repo.get(id)?)
    }

    pub fn update(&self, job: &Job) -> Result<()> {
        Ok(self.repo.update(job)?)
    }

    /// Returns at most one pending job, the oldest, for a worker to pick up.
    pub fn select_pending(&self) -> Result<Vec<Job>> {
        Ok(self.repo.select(&SelectParams {
            status: Some(JobStatus::Pending),
            limit: Some(1),
        })?)
    }

    /// Deletes the job's result file (if any), then the job itself.
    ///
    /// A failure removing the file aborts before the repository is touched.
    pub fn delete(&self, id: &str) -> Result<()> {
        let _span = tracing::info_span!("jobs.delete", job_id = %id).entered();

        if self.paths.remove(id)? {
            log::info!("Removed result file for job {}", id);
        }
        self.repo.delete(id)?;
        log::info!("Deleted job {}", id);
        Ok(())
    }

    /// Path of the job's result file. The file must exist.
    pub fn result_path(&self, id: &str) -> Result<PathBuf> {
        let path = self.paths.resolve(id)?;
        if !self.paths.exists(&path)? {
            return Err(ServiceError::NotFound { id: id.to_string() });
        }
        self.paths.ensure_contained(id, &path)?;
        Ok(path)
    }

    /// Decoded rows of the job's result file.
    pub fn results(&self, id: &str) -> Result<Vec<ResultRecord>> {
        Ok(self.results_with_diagnostics(id)?.records)
    }

    /// Decoded rows plus the cells that were skipped while decoding.
    pub fn results_with_diagnostics(&self, id: &str) -> Result<DecodedResults> {
        let _span = tracing::info_span!("jobs.results", job_id = %id).entered();

        let path = self.result_path(id)?;
        let decoded = self.decoder.decode(&path).map_err(|e| match e {
            // Deleted between the existence check and the read.
            DecodeError::NotFound(_) => ServiceError::NotFound { id: id.to_string() },
            other => ServiceError::Decode {
                id: id.to_string(),
                source: other,
            },
        })?;

        if !decoded.diagnostics.is_empty() {
            log::warn!(
                "Job {}: {} result cell(s) could not be decoded and were left empty",
                id,
                decoded.diagnostics.len()
            );
        }
        Ok(decoded)
    }
}
