// Port Layer - Interfaces for external dependencies

pub mod external_job_source;
pub mod id_provider; // For deterministic testing
pub mod internal_job_store;
pub mod subscriber_repository;
pub mod time_provider;

// Re-exports
pub use external_job_source::{ExternalJobQuery, ExternalJobSource};
pub use id_provider::IdProvider;
pub use internal_job_store::{InternalJobStore, JobPageQuery};
pub use subscriber_repository::SubscriberRepository;
pub use time_provider::TimeProvider;
