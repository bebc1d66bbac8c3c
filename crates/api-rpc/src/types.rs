//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.

use jobwatch_core::application::SubscribeOutput;
use jobwatch_core::domain::{ExternalJobRecord, JobsOutput};
use serde::{Deserialize, Serialize};

/// jobs.subscribe.v1 - Create or update a subscriber
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub name: String,
    pub email: String,
    pub job_titles: Vec<String>,
    pub country: Vec<String>,
    #[serde(default)]
    pub salary_min: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscribeResponse {
    pub id: String,
    pub name: String,
    /// RFC 3339
    pub timestamp: String,
    pub message: String,
}

impl From<SubscribeOutput> for SubscribeResponse {
    fn from(out: SubscribeOutput) -> Self {
        Self {
            id: out.id,
            name: out.name,
            timestamp: out.timestamp.to_rfc3339(),
            message: out.message,
        }
    }
}

/// jobs.search.v1 - Search internal and external jobs
///
/// Omitted lists fall back to the subscriber's stored preferences.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub id: Option<String>,
    pub job_titles: Option<Vec<String>>,
    #[serde(default)]
    pub salary_min: i64,
    /// RFC 3339
    pub posted_date: String,
    pub country: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExternalJob {
    pub title: String,
    pub salary: i64,
    pub skills: Vec<String>,
}

impl From<ExternalJobRecord> for ExternalJob {
    fn from(record: ExternalJobRecord) -> Self {
        Self {
            title: record.title,
            salary: record.salary,
            skills: record.skills,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub internal_jobs: Vec<String>,
    pub external_jobs: Vec<ExternalJob>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<JobsOutput> for SearchResponse {
    fn from(out: JobsOutput) -> Self {
        Self {
            internal_jobs: out.internal_jobs,
            external_jobs: out.external_jobs.into_iter().map(Into::into).collect(),
            message: out.message,
        }
    }
}
