// Application Layer - Use Cases and Business Logic

pub mod search;
pub mod subscribe;

// Re-exports
pub use search::JobSearchService;
pub use subscribe::{SubscribeOutput, SubscribeRequest, SubscriptionService};
