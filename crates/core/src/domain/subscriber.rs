// Subscriber Domain Model

use serde::{Deserialize, Serialize};

/// Subscriber ID (UUID v4)
pub type SubscriberId = String;

/// Stored search preferences of a subscriber (read-only for search)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberProfile {
    pub id: SubscriberId,
    pub job_titles: Vec<String>,
    pub preferred_countries: Vec<String>,
}

/// Subscriber record to upsert (keyed by email)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubscriber {
    /// Used only when no subscriber with this email exists yet
    pub id: SubscriberId,
    pub name: String,
    pub email: String,
    pub job_titles: Vec<String>,
    pub preferred_countries: Vec<String>,
    pub salary_min: i64,
    pub created_at: i64, // epoch ms
}
