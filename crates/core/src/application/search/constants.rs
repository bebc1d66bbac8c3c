// Search constants (No magic values)

/// Rows requested per internal store page
pub const PAGE_SIZE: i64 = 20;

/// Country searched externally when the criteria name none
pub const DEFAULT_COUNTRY: &str = "Argentina";

/// Advisory message attached when external results are dropped
pub const EXTERNAL_FETCH_WARNING: &str = "Warning: failed to fetch external jobs";
