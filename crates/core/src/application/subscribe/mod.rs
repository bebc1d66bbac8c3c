// Subscription Service - upsert subscriber preferences by email

mod validate;

pub use validate::validate_request;

use crate::domain::{NewSubscriber, SubscriberId};
use crate::error::{AppError, Result};
use crate::port::{IdProvider, SubscriberRepository, TimeProvider};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub const SUBSCRIBED_MESSAGE: &str = "User successfully subscribed";

/// Subscribe request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(custom(function = "validate::not_blank"))]
    pub name: String,
    #[validate(email(message = "is not a valid address"))]
    pub email: String,
    #[validate(
        length(min = 1, message = "requires at least one entry"),
        custom(function = "validate::no_blank_entries")
    )]
    pub job_titles: Vec<String>,
    #[serde(rename = "country")]
    #[validate(
        length(min = 1, message = "requires at least one entry"),
        custom(function = "validate::no_blank_entries")
    )]
    pub preferred_countries: Vec<String>,
    #[validate(range(min = 0, message = "must be >= 0"))]
    pub salary_min: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeOutput {
    pub id: SubscriberId,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

pub struct SubscriptionService {
    subscribers: Arc<dyn SubscriberRepository>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl SubscriptionService {
    pub fn new(
        subscribers: Arc<dyn SubscriberRepository>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            subscribers,
            id_provider,
            time_provider,
        }
    }

    /// Validate and upsert; an existing email keeps its subscriber ID
    pub async fn subscribe(&self, req: SubscribeRequest) -> Result<SubscribeOutput> {
        validate_request(&req)?;

        let now = self.time_provider.now();
        let subscriber = NewSubscriber {
            id: self.id_provider.generate_id(),
            name: req.name,
            email: req.email,
            job_titles: req.job_titles,
            preferred_countries: req.preferred_countries,
            salary_min: req.salary_min,
            created_at: now.timestamp_millis(),
        };

        let id = self.subscribers.upsert(&subscriber).await.map_err(|e| match e {
            AppError::Persistence(msg) => AppError::Persistence(format!(
                "could not upsert user to subscriber table: {}",
                msg
            )),
            other => other,
        })?;

        info!(subscriber_id = %id, "Subscriber recorded");
        Ok(SubscribeOutput {
            id,
            name: subscriber.name,
            timestamp: now,
            message: SUBSCRIBED_MESSAGE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::subscriber_repository::mocks::InMemorySubscriberRepository;
    use crate::port::time_provider::FixedTimeProvider;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct SeqIds(AtomicU64);

    impl IdProvider for SeqIds {
        fn generate_id(&self) -> String {
            format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn service(repo: Arc<InMemorySubscriberRepository>) -> SubscriptionService {
        SubscriptionService::new(
            repo,
            Arc::new(SeqIds(AtomicU64::new(1))),
            Arc::new(FixedTimeProvider(
                Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            )),
        )
    }

    fn request(email: &str, titles: &[&str]) -> SubscribeRequest {
        SubscribeRequest {
            name: "Ada".to_string(),
            email: email.to_string(),
            job_titles: titles.iter().map(|s| s.to_string()).collect(),
            preferred_countries: vec!["Spain".to_string()],
            salary_min: 40_000,
        }
    }

    #[tokio::test]
    async fn test_subscribe_new_user() {
        let repo = Arc::new(InMemorySubscriberRepository::new());
        let out = service(repo.clone())
            .subscribe(request("ada@example.com", &["Rust Dev"]))
            .await
            .unwrap();

        assert_eq!(out.id, "id-1");
        assert_eq!(out.name, "Ada");
        assert_eq!(out.message, SUBSCRIBED_MESSAGE);
        assert_eq!(out.timestamp, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_resubscribe_same_email_keeps_id_and_replaces_preferences() {
        let repo = Arc::new(InMemorySubscriberRepository::new());
        let svc = service(repo.clone());

        let first = svc.subscribe(request("ada@example.com", &["Rust Dev"])).await.unwrap();
        let second = svc.subscribe(request("ada@example.com", &["SRE"])).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(repo.len(), 1);
        let profile = repo.find_profile(&first.id).await.unwrap().unwrap();
        assert_eq!(profile.job_titles, vec!["SRE"]);
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected_before_persistence() {
        let repo = Arc::new(InMemorySubscriberRepository::new());

        let err = service(repo.clone())
            .subscribe(request("not-an-email", &["Rust Dev"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(repo.is_empty());
    }
}
