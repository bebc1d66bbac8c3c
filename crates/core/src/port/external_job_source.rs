// External Job Source Port (Interface)
// Abstraction over the third-party job listings service

use crate::domain::ExternalJobRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Parameters of one request to the external source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalJobQuery {
    /// Search name (job title)
    pub name: String,
    /// Omitted from the request when zero
    pub salary_min: i64,
    /// Omitted from the request when zero
    pub salary_max: i64,
    pub country: String,
}

/// External job source trait
///
/// Implementations:
/// - HttpExternalJobSource: `GET /jobs` over HTTP (infra-http)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExternalJobSource: Send + Sync {
    /// Fetch and decode the listings for one (title, country) pair
    ///
    /// # Errors
    /// - AppError::Transport on connection failure or non-success status
    /// - AppError::NotFound if the response lacks the requested country
    /// - AppError::Decode on a malformed body or skills payload
    async fn fetch_jobs(&self, query: &ExternalJobQuery) -> Result<Vec<ExternalJobRecord>>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Stub source answering from a (title, country) table
    ///
    /// Pairs missing from the table answer with an empty list.
    #[derive(Default)]
    pub struct StubExternalJobSource {
        responses: HashMap<(String, String), Vec<ExternalJobRecord>>,
        failure: Option<String>,
        delay: Option<Duration>,
        calls: Mutex<Vec<ExternalJobQuery>>,
        finished: AtomicBool,
    }

    impl StubExternalJobSource {
        pub fn new() -> Self {
            Self::default()
        }

        /// Fail every request with a transport error
        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                failure: Some(message.into()),
                ..Default::default()
            }
        }

        pub fn with_jobs(
            mut self,
            title: impl Into<String>,
            country: impl Into<String>,
            jobs: Vec<ExternalJobRecord>,
        ) -> Self {
            self.responses.insert((title.into(), country.into()), jobs);
            self
        }

        /// Sleep before answering each request
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn calls(&self) -> Vec<ExternalJobQuery> {
            self.calls.lock().unwrap().clone()
        }

        /// True once at least one request has run to completion
        pub fn has_finished(&self) -> bool {
            self.finished.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ExternalJobSource for StubExternalJobSource {
        async fn fetch_jobs(&self, query: &ExternalJobQuery) -> Result<Vec<ExternalJobRecord>> {
            self.calls.lock().unwrap().push(query.clone());

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.finished.store(true, Ordering::SeqCst);

            if let Some(msg) = &self.failure {
                return Err(AppError::Transport(msg.clone()));
            }

            Ok(self
                .responses
                .get(&(query.name.clone(), query.country.clone()))
                .cloned()
                .unwrap_or_default())
        }
    }
}
