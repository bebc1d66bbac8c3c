// Criteria resolution: fills unsupplied filters from the subscriber profile

use crate::domain::{ResolvedCriteria, SearchCriteria};
use crate::error::{AppError, Result};
use crate::port::SubscriberRepository;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct CriteriaResolver {
    subscribers: Arc<dyn SubscriberRepository>,
}

impl CriteriaResolver {
    pub fn new(subscribers: Arc<dyn SubscriberRepository>) -> Self {
        Self { subscribers }
    }

    /// Resolve caller criteria against the stored profile
    ///
    /// Job titles and countries supplied by the caller are kept as-is; an
    /// unsupplied field is replaced by the stored preference as a whole.
    ///
    /// # Errors
    /// - AppError::NotFound if the subscriber ID is missing or unknown
    pub async fn resolve(&self, criteria: SearchCriteria) -> Result<ResolvedCriteria> {
        let Some(id) = criteria.subscriber_id.clone() else {
            warn!("Search request without subscriber ID");
            return Err(AppError::NotFound("subscriber ID not supplied".to_string()));
        };

        let profile = self
            .subscribers
            .find_profile(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user with ID {} not found", id)))?;

        let resolved = criteria.resolve_with(profile);
        debug!(
            subscriber_id = %resolved.subscriber_id,
            job_titles = ?resolved.job_titles,
            countries = ?resolved.preferred_countries,
            "Criteria resolved"
        );
        Ok(resolved)
    }
}
