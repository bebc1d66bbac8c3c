// HTTP ExternalJobSource Implementation

use crate::decode::decode_response;
use async_trait::async_trait;
use jobwatch_core::domain::ExternalJobRecord;
use jobwatch_core::error::{AppError, Result};
use jobwatch_core::port::{ExternalJobQuery, ExternalJobSource};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

const JOBS_PATH: &str = "/jobs";

/// Client for the external listings service (`GET {base_url}/jobs`)
pub struct HttpExternalJobSource {
    client: Client,
    base_url: String,
}

impl HttpExternalJobSource {
    /// Build a client with a per-request timeout
    ///
    /// # Errors
    /// - AppError::Config if the HTTP client cannot be constructed
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("could not build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, JOBS_PATH)
    }
}

// Zero salaries and an empty country are left out of the query string
fn query_params(query: &ExternalJobQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("name", query.name.clone())];
    if query.salary_min > 0 {
        params.push(("salary_min", query.salary_min.to_string()));
    }
    if query.salary_max > 0 {
        params.push(("salary_max", query.salary_max.to_string()));
    }
    if !query.country.is_empty() {
        params.push(("country", query.country.clone()));
    }
    params
}

#[async_trait]
impl ExternalJobSource for HttpExternalJobSource {
    async fn fetch_jobs(&self, query: &ExternalJobQuery) -> Result<Vec<ExternalJobRecord>> {
        let response = self
            .client
            .get(self.url())
            .query(&query_params(query))
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("could not reach job source: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::Transport(format!(
                "unexpected status code: {}",
                status.as_u16()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Transport(format!("could not read response body: {}", e)))?;

        let jobs = decode_response(&body, &query.country)?;
        debug!(
            name = %query.name,
            country = %query.country,
            count = jobs.len(),
            "External jobs decoded"
        );
        Ok(jobs)
    }
}
