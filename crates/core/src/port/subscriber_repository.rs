// Subscriber Repository Port (Interface)

use crate::domain::{NewSubscriber, SubscriberId, SubscriberProfile};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for subscriber persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Insert or update a subscriber by email, returning its (stable) ID
    async fn upsert(&self, subscriber: &NewSubscriber) -> Result<SubscriberId>;

    /// Load stored search preferences; `None` when the ID is unknown
    async fn find_profile(&self, id: &SubscriberId) -> Result<Option<SubscriberProfile>>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// In-memory subscriber table keyed by email
    #[derive(Default)]
    pub struct InMemorySubscriberRepository {
        rows: Mutex<Vec<NewSubscriber>>,
    }

    impl InMemorySubscriberRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed a profile directly
        pub fn with_profile(self, profile: SubscriberProfile) -> Self {
            let email = format!("{}@example.com", profile.id);
            self.rows.lock().unwrap().push(NewSubscriber {
                id: profile.id.clone(),
                name: profile.id,
                email,
                job_titles: profile.job_titles,
                preferred_countries: profile.preferred_countries,
                salary_min: 0,
                created_at: 0,
            });
            self
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl SubscriberRepository for InMemorySubscriberRepository {
        async fn upsert(&self, subscriber: &NewSubscriber) -> Result<SubscriberId> {
            let mut rows = self.rows.lock().unwrap();
            if let Some(existing) = rows.iter_mut().find(|r| r.email == subscriber.email) {
                let id = existing.id.clone();
                *existing = NewSubscriber {
                    id: id.clone(),
                    created_at: existing.created_at,
                    ..subscriber.clone()
                };
                return Ok(id);
            }
            rows.push(subscriber.clone());
            Ok(subscriber.id.clone())
        }

        async fn find_profile(&self, id: &SubscriberId) -> Result<Option<SubscriberProfile>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|r| &r.id == id).map(|r| SubscriberProfile {
                id: r.id.clone(),
                job_titles: r.job_titles.clone(),
                preferred_countries: r.preferred_countries.clone(),
            }))
        }
    }
}
