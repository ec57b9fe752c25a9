use std::path::PathBuf;
use thiserror::Error;

use crate::results::FieldDiagnostic;

/// Errors surfaced by [`crate::jobs::JobService`].
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid job id '{id}': must not contain '/', '\\' or '..'")]
    InvalidIdentifier { id: String },

    #[error("csv file not found for job {id}")]
    NotFound { id: String },

    #[error("invalid job '{id}': {source}")]
    InvalidJob {
        id: String,
        #[source]
        source: JobValidationError,
    },

    #[error("failed to decode results for job {id}: {source}")]
    Decode {
        id: String,
        #[source]
        source: DecodeError,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Result file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read result file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse csv '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid field value: {0}")]
    Field(FieldDiagnostic),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to remove file '{path}': {source}")]
    RemoveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to inspect '{path}': {source}")]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Job not found: {id}")]
    NotFound { id: String },

    #[error("Job already exists: {id}")]
    AlreadyExists { id: String },

    /// Failure inside the storage engine behind the repository.
    #[error("Repository backend error: {source}")]
    Backend {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Reasons a job is refused before it reaches the repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobValidationError {
    #[error("missing id")]
    MissingId,

    #[error("missing name")]
    MissingName,

    #[error("missing keywords")]
    MissingKeywords,

    #[error("missing lang")]
    MissingLang,

    #[error("invalid lang '{0}'")]
    InvalidLang(String),

    #[error("missing depth")]
    MissingDepth,

    #[error("missing max time")]
    MissingMaxTime,

    #[error("fast mode requires lat and lon")]
    MissingCoordinates,
}

/// Why a single result cell could not be decoded into its field.
#[derive(Error, Debug)]
pub enum CellError {
    #[error("invalid integer {value:?}: {source}")]
    Integer {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid float {value:?}: {source}")]
    Float {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error("Invalid value for environment variable '{name}': {value}")]
    InvalidEnv { name: String, value: String },

    #[error("Invalid tracing filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ServiceError>;
