// sqlx::Error -> AppError mapping

use jobwatch_core::error::AppError;

pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.code() {
            // SQLite error codes: https://www.sqlite.org/rescode.html
            Some(code) if code == "2067" || code == "1555" => AppError::Persistence(format!(
                "Unique constraint violation: {} ({})",
                db_err.message(),
                code
            )),
            Some(code) if code == "5" => AppError::Persistence(format!(
                "Database locked (SQLITE_BUSY): {}",
                db_err.message()
            )),
            Some(code) => AppError::Persistence(format!(
                "Database error [{}]: {}",
                code,
                db_err.message()
            )),
            None => AppError::Persistence(format!("Database error: {}", db_err.message())),
        },
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Persistence(format!("Column not found: {}", col))
        }
        sqlx::Error::ColumnDecode { index, source } => {
            AppError::Persistence(format!("Column {} could not be decoded: {}", index, source))
        }
        // Connection, pool, protocol errors
        _ => AppError::Persistence(err.to_string()),
    }
}
