// Job Domain Model

use serde::{Deserialize, Serialize};

/// Internal job ID (UUID v4, opaque to the core)
pub type InternalJobId = String;

/// Job listing decoded from the external source (never persisted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalJobRecord {
    pub title: String,
    pub salary: i64,
    pub skills: Vec<String>,
}

impl ExternalJobRecord {
    pub fn new(title: impl Into<String>, salary: i64, skills: Vec<String>) -> Self {
        Self {
            title: title.into(),
            salary,
            skills,
        }
    }
}

/// Combined answer of one search request
///
/// Built once by the aggregation coordinator. Hard failures are reported
/// through the `Err` arm instead, so this never carries partial data next
/// to an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobsOutput {
    pub internal_jobs: Vec<InternalJobId>,
    pub external_jobs: Vec<ExternalJobRecord>,
    /// Advisory note when the external source was dropped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
