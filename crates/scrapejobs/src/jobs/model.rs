use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::JobValidationError;

/// Lifecycle state of a job. Transitions are driven by the scraping
/// workers, not by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Pending,
    Working,
    Ok,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Working => "working",
            JobStatus::Ok => "ok",
            JobStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_zoom() -> u8 {
    15
}

fn default_radius() -> u32 {
    10_000
}

fn default_depth() -> u32 {
    1
}

fn default_max_time() -> u64 {
    3600
}

/// Scrape parameters submitted with a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobData {
    pub keywords: Vec<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<String>,
    #[serde(default)]
    pub fast_mode: bool,
    /// Search radius in meters.
    #[serde(default = "default_radius")]
    pub radius: u32,
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Also visit each place's website to collect emails.
    #[serde(default)]
    pub email: bool,
    /// Upper bound on the scrape duration, in seconds.
    #[serde(default = "default_max_time")]
    pub max_time: u64,
    #[serde(default)]
    pub proxies: Vec<String>,
}

impl Default for JobData {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            lang: default_lang(),
            zoom: default_zoom(),
            lat: None,
            lon: None,
            fast_mode: false,
            radius: default_radius(),
            depth: default_depth(),
            email: false,
            max_time: default_max_time(),
            proxies: Vec::new(),
        }
    }
}

impl JobData {
    pub fn validate(&self) -> Result<(), JobValidationError> {
        if self.keywords.is_empty() {
            return Err(JobValidationError::MissingKeywords);
        }
        if self.lang.is_empty() {
            return Err(JobValidationError::MissingLang);
        }
        if self.lang.chars().count() != 2 {
            return Err(JobValidationError::InvalidLang(self.lang.clone()));
        }
        if self.depth == 0 {
            return Err(JobValidationError::MissingDepth);
        }
        if self.max_time == 0 {
            return Err(JobValidationError::MissingMaxTime);
        }
        let has_coords = self.lat.as_deref().is_some_and(|s| !s.is_empty())
            && self.lon.as_deref().is_some_and(|s| !s.is_empty());
        if self.fast_mode && !has_coords {
            return Err(JobValidationError::MissingCoordinates);
        }
        Ok(())
    }
}

/// A unit of scraping work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub status: JobStatus,
    pub data: JobData,
}

impl Job {
    /// Creates a pending job with a fresh UUID.
    pub fn new(name: impl Into<String>, data: JobData) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            date: Utc::now(),
            status: JobStatus::Pending,
            data,
        }
    }

    pub fn validate(&self) -> Result<(), JobValidationError> {
        if self.id.is_empty() {
            return Err(JobValidationError::MissingId);
        }
        if self.name.is_empty() {
            return Err(JobValidationError::MissingName);
        }
        self.data.validate()
    }
}
