// Jobwatch Infrastructure - SQLite Adapter
// Implements: SubscriberRepository, InternalJobStore

mod connection;
mod error;
mod job_store;
mod migration;
mod subscriber_repository;

pub use connection::create_pool;
pub use job_store::{JobPosting, SqliteJobStore};
pub use migration::run_migrations;
pub use subscriber_repository::SqliteSubscriberRepository;

// Note: sqlx::Error conversion is handled by wrapping in helper functions
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
