use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::jobs::{JobRepository, JobService};
use crate::results::DecodeOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Folder holding one `<job_id>.csv` result file per job.
    pub data_folder: String,
    #[serde(default)]
    pub decode: DecodeOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Builds a [`JobService`] over `repo` using this config's data folder
    /// and decode options.
    pub fn build_service(&self, repo: Arc<dyn JobRepository>) -> JobService {
        JobService::with_options(repo, &self.data_folder, self.decode)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `"info"` or `"info,scrapejobs=debug"`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human readable output.
    #[default]
    Compact,
    /// JSON lines.
    Json,
}
