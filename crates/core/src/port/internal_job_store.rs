// Internal Job Store Port (Interface)

use crate::domain::InternalJobId;
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// One filtered page read against the internal store
///
/// Title and country are set filters with exact matching. An empty set
/// matches no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPageQuery {
    pub salary_min: i64,
    pub posted_date: DateTime<Utc>,
    pub job_titles: Vec<String>,
    pub countries: Vec<String>,
    pub limit: i64,
    pub offset: i64,
}

/// Read-only access to store-resident jobs
#[async_trait]
pub trait InternalJobStore: Send + Sync {
    /// Fetch the IDs of one page; an empty page marks the end of the results
    async fn fetch_page(&self, query: &JobPageQuery) -> Result<Vec<InternalJobId>>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::sync::Mutex;

    /// Fixture row of the in-memory store
    #[derive(Debug, Clone)]
    pub struct StoredJob {
        pub id: InternalJobId,
        pub title: String,
        pub country: String,
        pub salary_min: i64,
        pub posted_date: DateTime<Utc>,
    }

    /// In-memory job store that records every page request
    #[derive(Default)]
    pub struct InMemoryJobStore {
        rows: Vec<StoredJob>,
        fail_at_offset: Option<i64>,
        offsets: Mutex<Vec<i64>>,
    }

    impl InMemoryJobStore {
        pub fn new(rows: Vec<StoredJob>) -> Self {
            Self {
                rows,
                ..Default::default()
            }
        }

        /// Make the page at `offset` fail with a store error
        pub fn failing_at(mut self, offset: i64) -> Self {
            self.fail_at_offset = Some(offset);
            self
        }

        /// Offsets requested so far, in order
        pub fn requested_offsets(&self) -> Vec<i64> {
            self.offsets.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl InternalJobStore for InMemoryJobStore {
        async fn fetch_page(&self, query: &JobPageQuery) -> Result<Vec<InternalJobId>> {
            self.offsets.lock().unwrap().push(query.offset);

            if self.fail_at_offset == Some(query.offset) {
                return Err(AppError::Persistence("connection reset".to_string()));
            }

            let mut matching: Vec<&StoredJob> = self
                .rows
                .iter()
                .filter(|r| r.salary_min >= query.salary_min)
                .filter(|r| query.job_titles.contains(&r.title))
                .filter(|r| query.countries.contains(&r.country))
                .collect();
            // Posted before the threshold first; stable sort keeps fixture order within a group
            matching.sort_by_key(|r| r.posted_date >= query.posted_date);

            Ok(matching
                .into_iter()
                .skip(query.offset.max(0) as usize)
                .take(query.limit.max(0) as usize)
                .map(|r| r.id.clone())
                .collect())
        }
    }
}
