// External job fetch: one request per (title, country) pair

use super::constants::DEFAULT_COUNTRY;
use crate::domain::{ExternalJobRecord, ResolvedCriteria};
use crate::error::Result;
use crate::port::{ExternalJobQuery, ExternalJobSource};
use std::sync::Arc;
use tracing::{error, info};

pub struct ExternalJobFetcher {
    source: Arc<dyn ExternalJobSource>,
    default_country: String,
}

impl ExternalJobFetcher {
    pub fn new(source: Arc<dyn ExternalJobSource>) -> Self {
        Self {
            source,
            default_country: DEFAULT_COUNTRY.to_string(),
        }
    }

    /// Fetch every (title, country) pair, titles outer and countries inner
    ///
    /// Fails fast: the first failing pair aborts the fetch and records from
    /// pairs already completed are dropped.
    pub async fn fetch_all(&self, criteria: &ResolvedCriteria) -> Result<Vec<ExternalJobRecord>> {
        let default_countries;
        let countries = if criteria.preferred_countries.is_empty() {
            default_countries = [self.default_country.clone()];
            &default_countries[..]
        } else {
            &criteria.preferred_countries[..]
        };

        let mut all_jobs = Vec::new();
        for title in &criteria.job_titles {
            for country in countries {
                let query = ExternalJobQuery {
                    name: title.clone(),
                    salary_min: criteria.salary_min,
                    salary_max: 0,
                    country: country.clone(),
                };

                let jobs = self.source.fetch_jobs(&query).await.map_err(|e| {
                    error!(title = %title, country = %country, error = %e, "External fetch failed");
                    e
                })?;
                info!(title = %title, country = %country, count = jobs.len(), "Fetched external jobs");
                all_jobs.extend(jobs);
            }
        }

        Ok(all_jobs)
    }
}
