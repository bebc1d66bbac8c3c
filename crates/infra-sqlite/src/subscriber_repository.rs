// SQLite SubscriberRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use jobwatch_core::domain::{NewSubscriber, SubscriberId, SubscriberProfile};
use jobwatch_core::error::{AppError, Result};
use jobwatch_core::port::SubscriberRepository;
use sqlx::SqlitePool;

pub struct SqliteSubscriberRepository {
    pool: SqlitePool,
}

impl SqliteSubscriberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// Title/country lists are stored as JSON arrays
fn decode_list(column: &str, raw: &str) -> Result<Vec<String>> {
    serde_json::from_str(raw).map_err(|e| {
        AppError::Persistence(format!("corrupt {} column: {}", column, e))
    })
}

fn encode_list(values: &[String]) -> Result<String> {
    serde_json::to_string(values).map_err(|e| AppError::Internal(e.to_string()))
}

#[async_trait]
impl SubscriberRepository for SqliteSubscriberRepository {
    async fn upsert(&self, subscriber: &NewSubscriber) -> Result<SubscriberId> {
        let id: String = sqlx::query_scalar(
            r#"
            INSERT INTO subscribers (
                id, user_name, email, job_titles, salary_min,
                preferred_countries, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (email) DO UPDATE SET
                user_name = excluded.user_name,
                job_titles = excluded.job_titles,
                salary_min = excluded.salary_min,
                preferred_countries = excluded.preferred_countries,
                updated_at = excluded.updated_at
            RETURNING id
            "#,
        )
        .bind(&subscriber.id)
        .bind(&subscriber.name)
        .bind(&subscriber.email)
        .bind(encode_list(&subscriber.job_titles)?)
        .bind(subscriber.salary_min)
        .bind(encode_list(&subscriber.preferred_countries)?)
        .bind(subscriber.created_at)
        .bind(subscriber.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(id)
    }

    async fn find_profile(&self, id: &SubscriberId) -> Result<Option<SubscriberProfile>> {
        let row: Option<(String, String, String)> = sqlx::query_as(
            r#"
            SELECT id, COALESCE(job_titles, '[]'), COALESCE(preferred_countries, '[]')
            FROM subscribers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(|(id, titles, countries)| {
            Ok(SubscriberProfile {
                id,
                job_titles: decode_list("job_titles", &titles)?,
                preferred_countries: decode_list("preferred_countries", &countries)?,
            })
        })
        .transpose()
    }
}
