//! RPC Method Handlers
//!
//! Boundary validation and translation between wire types and use cases.

use crate::error::to_rpc_error;
use crate::types::{SearchRequest, SearchResponse, SubscribeRequest, SubscribeResponse};
use chrono::{DateTime, Utc};
use jobwatch_core::application::{self, JobSearchService, SubscriptionService};
use jobwatch_core::domain::SearchCriteria;
use jobwatch_core::error::{AppError, Result};
use jsonrpsee::types::ErrorObjectOwned;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// RPC Handler with injected use cases
pub struct RpcHandler {
    subscriptions: Arc<SubscriptionService>,
    search: Arc<JobSearchService>,
}

impl RpcHandler {
    pub fn new(subscriptions: Arc<SubscriptionService>, search: Arc<JobSearchService>) -> Self {
        Self {
            subscriptions,
            search,
        }
    }

    /// jobs.subscribe.v1
    pub async fn subscribe(
        &self,
        params: SubscribeRequest,
    ) -> std::result::Result<SubscribeResponse, ErrorObjectOwned> {
        let req = application::SubscribeRequest {
            name: params.name,
            email: params.email,
            job_titles: params.job_titles,
            preferred_countries: params.country,
            salary_min: params.salary_min,
        };

        let out = self
            .subscriptions
            .subscribe(req)
            .await
            .map_err(log_and_convert)?;
        Ok(out.into())
    }

    /// jobs.search.v1
    pub async fn search(
        &self,
        params: SearchRequest,
    ) -> std::result::Result<SearchResponse, ErrorObjectOwned> {
        let criteria = to_criteria(params).map_err(to_rpc_error)?;
        let out = self.search.search(criteria).await.map_err(log_and_convert)?;
        Ok(out.into())
    }
}

fn log_and_convert(err: AppError) -> ErrorObjectOwned {
    warn!(error = %err, "Request failed");
    to_rpc_error(err)
}

fn to_criteria(params: SearchRequest) -> Result<SearchCriteria> {
    if let Some(id) = &params.id {
        Uuid::parse_str(id)
            .map_err(|_| AppError::Validation(format!("id '{}' is not a valid UUID", id)))?;
    }

    let posted_date = DateTime::parse_from_rfc3339(&params.posted_date)
        .map_err(|e| {
            AppError::Validation(format!(
                "posted_date '{}' is not an RFC 3339 timestamp: {}",
                params.posted_date, e
            ))
        })?
        .with_timezone(&Utc);

    Ok(SearchCriteria {
        subscriber_id: params.id,
        job_titles: params.job_titles,
        salary_min: params.salary_min,
        posted_date,
        preferred_countries: params.country,
    })
}
