// SQLite InternalJobStore Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use jobwatch_core::domain::InternalJobId;
use jobwatch_core::error::{AppError, Result};
use jobwatch_core::port::{InternalJobStore, JobPageQuery};
use sqlx::SqlitePool;
use tracing::debug;

/// Job posting row (seeding / admin import)
#[derive(Debug, Clone)]
pub struct JobPosting {
    pub id: InternalJobId,
    pub title: String,
    pub country: String,
    pub salary_min: i64,
    pub posted_date: i64, // epoch ms
    pub created_at: i64,  // epoch ms
}

pub struct SqliteJobStore {
    pool: SqlitePool,
}

impl SqliteJobStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a job posting
    pub async fn insert(&self, job: &JobPosting) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO jobs (id, title, country, salary_min, posted_date, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&job.id)
        .bind(&job.title)
        .bind(&job.country)
        .bind(job.salary_min)
        .bind(job.posted_date)
        .bind(job.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[async_trait]
impl InternalJobStore for SqliteJobStore {
    async fn fetch_page(&self, query: &JobPageQuery) -> Result<Vec<InternalJobId>> {
        // Set filters are bound as JSON arrays and expanded by json_each
        let titles = serde_json::to_string(&query.job_titles)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let countries = serde_json::to_string(&query.countries)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let ids: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT id
            FROM jobs
            WHERE salary_min >= ?
              AND title IN (SELECT value FROM json_each(?))
              AND country IN (SELECT value FROM json_each(?))
            ORDER BY posted_date >= ? ASC, id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(query.salary_min)
        .bind(titles)
        .bind(countries)
        .bind(query.posted_date.timestamp_millis())
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(offset = query.offset, rows = ids.len(), "Job page read");
        Ok(ids)
    }
}
