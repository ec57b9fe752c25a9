//! Jobs: the data model, the repository capability, and the service that
//! ties jobs to their result files.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{Job, JobData, JobStatus};
pub use repository::{JobRepository, SelectParams};
pub use service::JobService;
