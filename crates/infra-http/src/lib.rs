// Jobwatch Infrastructure - HTTP Adapter
// Implements: ExternalJobSource (GET /jobs)

mod client;
pub mod decode;
pub mod skills;

pub use client::HttpExternalJobSource;
pub use decode::decode_response;
pub use skills::parse_skills;
