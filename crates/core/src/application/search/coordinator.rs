// Aggregation: runs pagination and external fetch concurrently, then merges

use super::constants::EXTERNAL_FETCH_WARNING;
use super::fetcher::ExternalJobFetcher;
use super::paginator::InternalJobPaginator;
use crate::domain::{ExternalJobRecord, InternalJobId, JobsOutput, ResolvedCriteria};
use crate::error::{AppError, Result};
use std::sync::Arc;
use tokio::task::JoinError;
use tracing::{error, info, warn};

/// Join barrier over the two search tasks
///
/// Neither task is cancelled when the other fails; the merge only runs once
/// both have finished.
pub struct AggregationCoordinator {
    paginator: Arc<InternalJobPaginator>,
    fetcher: Arc<ExternalJobFetcher>,
}

impl AggregationCoordinator {
    pub fn new(paginator: Arc<InternalJobPaginator>, fetcher: Arc<ExternalJobFetcher>) -> Self {
        Self { paginator, fetcher }
    }

    pub async fn aggregate(&self, criteria: ResolvedCriteria) -> Result<JobsOutput> {
        let criteria = Arc::new(criteria);

        info!("Starting internal and external job fetch");
        let internal = {
            let paginator = self.paginator.clone();
            let criteria = criteria.clone();
            tokio::spawn(async move { paginator.collect(&criteria).await })
        };
        let external = {
            let fetcher = self.fetcher.clone();
            let criteria = criteria.clone();
            tokio::spawn(async move { fetcher.fetch_all(&criteria).await })
        };

        let (internal, external) = tokio::join!(internal, external);
        merge(flatten(internal), flatten(external))
    }
}

/// A panicked task counts as a failure of that task
fn flatten<T>(joined: std::result::Result<Result<T>, JoinError>) -> Result<T> {
    joined.unwrap_or_else(|e| Err(AppError::Internal(format!("search task aborted: {}", e))))
}

/// Merge policy
///
/// 1. Internal failure wins over anything the external side produced.
/// 2. External failure is downgraded to an advisory message when internal
///    jobs were found, and surfaced unchanged otherwise.
/// 3. Both succeeded: both result sets are returned as they are.
pub fn merge(
    internal: Result<Vec<InternalJobId>>,
    external: Result<Vec<ExternalJobRecord>>,
) -> Result<JobsOutput> {
    let internal_jobs = match internal {
        Ok(ids) => ids,
        Err(e) => {
            error!(error = %e, "Internal job fetch failed");
            return Err(e);
        }
    };

    match external {
        Ok(external_jobs) => {
            info!(
                internal = internal_jobs.len(),
                external = external_jobs.len(),
                "Got jobs"
            );
            Ok(JobsOutput {
                internal_jobs,
                external_jobs,
                message: None,
            })
        }
        Err(e) if !internal_jobs.is_empty() => {
            warn!(
                error = %e,
                internal = internal_jobs.len(),
                "External job fetch failed, returning internal jobs only"
            );
            Ok(JobsOutput {
                internal_jobs,
                external_jobs: Vec::new(),
                message: Some(EXTERNAL_FETCH_WARNING.to_string()),
            })
        }
        Err(e) => {
            error!(error = %e, "External job fetch failed with no internal jobs to fall back on");
            Err(e)
        }
    }
}
