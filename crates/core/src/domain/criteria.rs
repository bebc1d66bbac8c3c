// Search Criteria Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::subscriber::{SubscriberId, SubscriberProfile};

/// Search request as supplied by the caller
///
/// `None` for a list means "not supplied": the subscriber's stored
/// preference is used instead. `Some(vec![])` is an explicit empty filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub subscriber_id: Option<SubscriberId>,
    pub job_titles: Option<Vec<String>>,
    pub salary_min: i64,
    pub posted_date: DateTime<Utc>,
    pub preferred_countries: Option<Vec<String>>,
}

impl SearchCriteria {
    pub fn new(subscriber_id: impl Into<String>, posted_date: DateTime<Utc>) -> Self {
        Self {
            subscriber_id: Some(subscriber_id.into()),
            job_titles: None,
            salary_min: 0,
            posted_date,
            preferred_countries: None,
        }
    }

    pub fn with_job_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.job_titles = Some(titles.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_countries = Some(countries.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_salary_min(mut self, salary_min: i64) -> Self {
        self.salary_min = salary_min;
        self
    }

    /// Merge with a stored profile: each list is taken whole from the
    /// caller when supplied, otherwise whole from the profile.
    pub fn resolve_with(self, profile: SubscriberProfile) -> ResolvedCriteria {
        ResolvedCriteria {
            subscriber_id: profile.id,
            job_titles: self.job_titles.unwrap_or(profile.job_titles),
            salary_min: self.salary_min,
            posted_date: self.posted_date,
            preferred_countries: self
                .preferred_countries
                .unwrap_or(profile.preferred_countries),
        }
    }
}

/// Criteria after profile resolution; immutable input of both aggregation tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCriteria {
    pub subscriber_id: SubscriberId,
    pub job_titles: Vec<String>,
    pub salary_min: i64,
    pub posted_date: DateTime<Utc>,
    pub preferred_countries: Vec<String>,
}
