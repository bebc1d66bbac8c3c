//! Jobwatch SDK - Rust Client Library
//!
//! Client for the Jobwatch daemon's JSON-RPC API.
//!
//! # Example
//!
//! ```no_run
//! use jobwatch_sdk::{JobwatchClient, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JobwatchClient::connect("http://127.0.0.1:9630").await?;
//!
//!     let response = client
//!         .search(
//!             SearchRequest::new("2024-01-01T00:00:00Z")
//!                 .with_id("6f1c2a8e-3b7d-4c55-9a0e-2d4b8f9e1a11"),
//!         )
//!         .await?;
//!
//!     println!("{} internal jobs", response.internal_jobs.len());
//!     if let Some(message) = response.message {
//!         println!("{}", message);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::JobwatchClient;
pub use error::{Result, SdkError};
pub use types::{ExternalJob, SearchRequest, SearchResponse, SubscribeRequest, SubscribeResponse};
