//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types from the api-rpc crate.

use serde::{Deserialize, Serialize};

/// Create or update a subscriber (keyed by email)
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeRequest {
    pub name: String,
    pub email: String,
    pub job_titles: Vec<String>,
    pub country: Vec<String>,
    pub salary_min: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubscribeResponse {
    pub id: String,
    pub name: String,
    pub timestamp: String,
    pub message: String,
}

/// Job search parameters
///
/// Lists left as `None` fall back to the subscriber's stored preferences.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_titles: Option<Vec<String>>,
    pub salary_min: i64,
    /// RFC 3339; internal jobs posted before it are listed first
    pub posted_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Vec<String>>,
}

impl SearchRequest {
    pub fn new(posted_date: impl Into<String>) -> Self {
        Self {
            id: None,
            job_titles: None,
            salary_min: 0,
            posted_date: posted_date.into(),
            country: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_job_titles(mut self, titles: Vec<String>) -> Self {
        self.job_titles = Some(titles);
        self
    }

    pub fn with_countries(mut self, countries: Vec<String>) -> Self {
        self.country = Some(countries);
        self
    }

    pub fn with_salary_min(mut self, salary_min: i64) -> Self {
        self.salary_min = salary_min;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalJob {
    pub title: String,
    pub salary: i64,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub internal_jobs: Vec<String>,
    pub external_jobs: Vec<ExternalJob>,
    #[serde(default)]
    pub message: Option<String>,
}
