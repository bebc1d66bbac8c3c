// Internal job pagination: page-until-empty against the internal store

use super::constants::PAGE_SIZE;
use crate::domain::{InternalJobId, ResolvedCriteria};
use crate::error::{AppError, Result};
use crate::port::{InternalJobStore, JobPageQuery};
use std::sync::Arc;
use tracing::{debug, info};

/// Collects every matching internal job ID, one fixed-size page at a time
pub struct InternalJobPaginator {
    store: Arc<dyn InternalJobStore>,
    page_size: i64,
}

impl InternalJobPaginator {
    pub fn new(store: Arc<dyn InternalJobStore>) -> Self {
        Self::with_page_size(store, PAGE_SIZE)
    }

    fn with_page_size(store: Arc<dyn InternalJobStore>, page_size: i64) -> Self {
        Self {
            store,
            page_size: page_size.max(1),
        }
    }

    /// Query pages at offsets 0, n, 2n, ... until a page comes back empty
    ///
    /// Pages are concatenated in the order they were read. A store failure
    /// on any page discards everything collected so far.
    pub async fn collect(&self, criteria: &ResolvedCriteria) -> Result<Vec<InternalJobId>> {
        let mut query = JobPageQuery {
            salary_min: criteria.salary_min,
            posted_date: criteria.posted_date,
            job_titles: criteria.job_titles.clone(),
            countries: criteria.preferred_countries.clone(),
            limit: self.page_size,
            offset: 0,
        };
        let mut all_ids = Vec::new();

        loop {
            let page = self
                .store
                .fetch_page(&query)
                .await
                .map_err(|e| page_error(query.offset, e))?;

            if page.is_empty() {
                break;
            }

            debug!(offset = query.offset, rows = page.len(), "Fetched internal page");
            all_ids.extend(page);
            query.offset += self.page_size;
        }

        info!(count = all_ids.len(), "Collected internal jobs");
        Ok(all_ids)
    }
}

fn page_error(offset: i64, err: AppError) -> AppError {
    match err {
        AppError::Persistence(msg) => AppError::Persistence(format!(
            "could not get internal jobs (offset {}): {}",
            offset, msg
        )),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::internal_job_store::mocks::{InMemoryJobStore, StoredJob};
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::HashSet;

    fn threshold() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn job(i: usize, title: &str, country: &str, salary: i64) -> StoredJob {
        StoredJob {
            id: format!("job-{:03}", i),
            title: title.to_string(),
            country: country.to_string(),
            salary_min: salary,
            posted_date: threshold() + Duration::days(i as i64 % 3 - 1),
        }
    }

    fn criteria(titles: &[&str], countries: &[&str], salary_min: i64) -> ResolvedCriteria {
        ResolvedCriteria {
            subscriber_id: "sub-1".to_string(),
            job_titles: titles.iter().map(|s| s.to_string()).collect(),
            salary_min,
            posted_date: threshold(),
            preferred_countries: countries.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_collects_45_rows_over_three_pages() {
        let rows = (0..45).map(|i| job(i, "Rust Dev", "Spain", 60_000)).collect();
        let store = Arc::new(InMemoryJobStore::new(rows));
        let paginator = InternalJobPaginator::new(store.clone());

        let ids = paginator
            .collect(&criteria(&["Rust Dev"], &["Spain"], 0))
            .await
            .unwrap();

        // Every third fixture row predates the threshold and sorts ahead of the rest
        let expected: Vec<String> = (0..45)
            .filter(|i| i % 3 == 0)
            .chain((0..45).filter(|i| i % 3 != 0))
            .map(|i| format!("job-{:03}", i))
            .collect();
        assert_eq!(ids, expected, "pages concatenated in page order");
        assert_eq!(store.requested_offsets(), vec![0, 20, 40, 60]);
    }

    #[tokio::test]
    async fn test_page_size_sets_offset_stride() {
        let rows = (0..5).map(|i| job(i, "Rust Dev", "Spain", 60_000)).collect();
        let store = Arc::new(InMemoryJobStore::new(rows));
        let paginator = InternalJobPaginator::with_page_size(store.clone(), 2);

        let ids = paginator
            .collect(&criteria(&["Rust Dev"], &["Spain"], 0))
            .await
            .unwrap();

        assert_eq!(ids.len(), 5);
        assert_eq!(store.requested_offsets(), vec![0, 2, 4, 6]);

        // A non-positive size is clamped to one row per page
        let store = Arc::new(InMemoryJobStore::new(vec![job(0, "Rust Dev", "Spain", 60_000)]));
        InternalJobPaginator::with_page_size(store.clone(), 0)
            .collect(&criteria(&["Rust Dev"], &["Spain"], 0))
            .await
            .unwrap();
        assert_eq!(store.requested_offsets(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_exact_page_multiple_ends_with_one_empty_page() {
        let rows = (0..40).map(|i| job(i, "Rust Dev", "Spain", 60_000)).collect();
        let store = Arc::new(InMemoryJobStore::new(rows));
        let paginator = InternalJobPaginator::new(store.clone());

        let ids = paginator
            .collect(&criteria(&["Rust Dev"], &["Spain"], 0))
            .await
            .unwrap();

        assert_eq!(ids.len(), 40);
        assert_eq!(store.requested_offsets(), vec![0, 20, 40]);
    }

    #[tokio::test]
    async fn test_returns_exactly_the_matching_rows() {
        let rows = vec![
            job(0, "Rust Dev", "Spain", 70_000),
            job(1, "Rust Dev", "Spain", 30_000), // salary below floor
            job(2, "Go Dev", "Spain", 90_000),   // title not requested
            job(3, "Rust Dev", "France", 90_000), // country not requested
            job(4, "SRE", "USA", 50_000),
            job(5, "SRE", "Spain", 50_000),
        ];
        let store = Arc::new(InMemoryJobStore::new(rows));
        let paginator = InternalJobPaginator::new(store);

        let ids = paginator
            .collect(&criteria(&["Rust Dev", "SRE"], &["Spain", "USA"], 50_000))
            .await
            .unwrap();

        let got: HashSet<_> = ids.into_iter().collect();
        let want: HashSet<_> = ["job-000", "job-004", "job-005"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn test_empty_title_set_matches_nothing() {
        let rows = vec![job(0, "Rust Dev", "Spain", 70_000)];
        let store = Arc::new(InMemoryJobStore::new(rows));
        let paginator = InternalJobPaginator::new(store.clone());

        let ids = paginator.collect(&criteria(&[], &["Spain"], 0)).await.unwrap();

        assert!(ids.is_empty());
        assert_eq!(store.requested_offsets(), vec![0]);
    }

    #[tokio::test]
    async fn test_store_failure_discards_collected_pages() {
        let rows = (0..45).map(|i| job(i, "Rust Dev", "Spain", 60_000)).collect();
        let store = Arc::new(InMemoryJobStore::new(rows).failing_at(20));
        let paginator = InternalJobPaginator::new(store.clone());

        let err = paginator
            .collect(&criteria(&["Rust Dev"], &["Spain"], 0))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Persistence(_)));
        assert!(err.to_string().contains("offset 20"));
        assert_eq!(store.requested_offsets(), vec![0, 20], "no page after failure");
    }
}
