// Job Search Service - resolve criteria, then aggregate both sources

pub mod constants;
pub mod coordinator;
pub mod criteria;
pub mod fetcher;
pub mod paginator;

pub use coordinator::AggregationCoordinator;
pub use criteria::CriteriaResolver;
pub use fetcher::ExternalJobFetcher;
pub use paginator::InternalJobPaginator;

use crate::domain::{JobsOutput, SearchCriteria};
use crate::error::Result;
use crate::port::{ExternalJobSource, InternalJobStore, SubscriberRepository};
use std::sync::Arc;
use tracing::{info, instrument};

/// Job Search Service
pub struct JobSearchService {
    resolver: CriteriaResolver,
    coordinator: AggregationCoordinator,
}

impl JobSearchService {
    pub fn new(
        subscribers: Arc<dyn SubscriberRepository>,
        store: Arc<dyn InternalJobStore>,
        source: Arc<dyn ExternalJobSource>,
    ) -> Self {
        Self {
            resolver: CriteriaResolver::new(subscribers),
            coordinator: AggregationCoordinator::new(
                Arc::new(InternalJobPaginator::new(store)),
                Arc::new(ExternalJobFetcher::new(source)),
            ),
        }
    }

    /// Search internal and external jobs for a subscriber
    ///
    /// Resolution failures (unknown subscriber) abort before any query runs.
    #[instrument(skip_all, fields(subscriber_id = ?criteria.subscriber_id))]
    pub async fn search(&self, criteria: SearchCriteria) -> Result<JobsOutput> {
        let resolved = self.resolver.resolve(criteria).await?;
        let output = self.coordinator.aggregate(resolved).await?;

        info!(
            internal = output.internal_jobs.len(),
            external = output.external_jobs.len(),
            degraded = output.message.is_some(),
            "Search complete"
        );
        Ok(output)
    }
}
