pub mod config;
pub mod error;
pub mod jobs;
pub mod results;
pub mod sanitize;
pub mod storage;
pub mod telemetry;

pub use config::{load_config, Config, LogFormat, LoggingConfig};
pub use error::{
    CellError, ConfigError, DecodeError, JobValidationError, RepositoryError, Result, ServiceError,
    StorageError,
};
pub use jobs::{Job, JobData, JobRepository, JobService, JobStatus, SelectParams};
pub use results::{DecodeOptions, DecodedResults, FieldDiagnostic, ResultDecoder, ResultRecord};
pub use sanitize::validate_job_id;
pub use storage::ResultPaths;
