// Domain Layer - Pure business logic and entities

pub mod criteria;
pub mod job;
pub mod subscriber;

// Re-exports
pub use criteria::{ResolvedCriteria, SearchCriteria};
pub use job::{ExternalJobRecord, InternalJobId, JobsOutput};
pub use subscriber::{NewSubscriber, SubscriberId, SubscriberProfile};
