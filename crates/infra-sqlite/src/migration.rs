// Schema migrations

use crate::error::map_sqlx_error;
use jobwatch_core::error::Result;
use sqlx::SqlitePool;
use tracing::{debug, info};

/// Ordered migrations: (version, description, sql)
const MIGRATIONS: &[(i64, &str, &str)] = &[(
    1,
    "Subscribers and internal jobs",
    include_str!("../migrations/001_initial_schema.sql"),
)];

/// Bring the schema up to the latest version; applied versions are skipped
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let current = schema_version(pool).await?;

    let pending: Vec<_> = MIGRATIONS.iter().filter(|(v, _, _)| *v > current).collect();
    if pending.is_empty() {
        debug!(version = current, "Schema up to date");
        return Ok(());
    }

    for (version, description, sql) in pending {
        info!(version, description, "Applying migration");
        let mut tx = pool.begin().await.map_err(map_sqlx_error)?;
        // Each file records its own version in schema_version
        sqlx::raw_sql(sql)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        tx.commit().await.map_err(map_sqlx_error)?;
    }

    Ok(())
}

// 0 on a fresh database
async fn schema_version(pool: &SqlitePool) -> Result<i64> {
    let has_table: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version')",
    )
    .fetch_one(pool)
    .await
    .map_err(map_sqlx_error)?;

    if !has_table {
        return Ok(0);
    }

    let version: Option<i64> = sqlx::query_scalar("SELECT MAX(version) FROM schema_version")
        .fetch_one(pool)
        .await
        .map_err(map_sqlx_error)?;
    Ok(version.unwrap_or(0))
}
