//! Jobwatch Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{SearchRequest, SearchResponse, SubscribeRequest, SubscribeResponse};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use serde::Serialize;
use std::time::Duration;

const SUBSCRIBE_METHOD: &str = "jobs.subscribe.v1";
const SEARCH_METHOD: &str = "jobs.search.v1";

/// Jobwatch daemon client
///
/// # Example
///
/// ```no_run
/// use jobwatch_sdk::JobwatchClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = JobwatchClient::connect("http://127.0.0.1:9630").await?;
/// # Ok(())
/// # }
/// ```
pub struct JobwatchClient {
    client: HttpClient,
}

impl JobwatchClient {
    /// Connect to the daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9630`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Endpoint(format!("{}: {}", url, e)))?;

        Ok(Self { client })
    }

    /// Create or update a subscriber
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use jobwatch_sdk::{JobwatchClient, SubscribeRequest};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = JobwatchClient::connect("http://127.0.0.1:9630").await?;
    /// let response = client.subscribe(SubscribeRequest {
    ///     name: "Ada".to_string(),
    ///     email: "ada@example.com".to_string(),
    ///     job_titles: vec!["Data Engineer".to_string()],
    ///     country: vec!["Spain".to_string()],
    ///     salary_min: 40_000,
    /// }).await?;
    ///
    /// println!("Subscriber ID: {}", response.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn subscribe(&self, request: SubscribeRequest) -> Result<SubscribeResponse> {
        let response: SubscribeResponse = self
            .client
            .request(SUBSCRIBE_METHOD, object_params(&request)?)
            .await?;

        Ok(response)
    }

    /// Search internal and external jobs
    ///
    /// An unreachable external source is not an error: the response then
    /// carries only internal jobs and a warning in `message`.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        let response: SearchResponse = self
            .client
            .request(SEARCH_METHOD, object_params(&request)?)
            .await?;

        Ok(response)
    }
}

// Send requests as by-name params
fn object_params<T: Serialize>(request: &T) -> Result<ObjectParams> {
    let mut params = ObjectParams::new();
    match serde_json::to_value(request)? {
        serde_json::Value::Object(fields) => {
            for (name, value) in fields {
                params.insert(&name, value)?;
            }
            Ok(params)
        }
        other => Err(SdkError::Encode(format!(
            "request must serialize to an object, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonrpsee::core::traits::ToRpcParams;

    #[test]
    fn test_search_params_omit_unset_lists() {
        let params = object_params(&SearchRequest::new("2024-01-01T00:00:00Z").with_id("abc"))
            .unwrap()
            .to_rpc_params()
            .unwrap()
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(params.get()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "abc",
                "salary_min": 0,
                "posted_date": "2024-01-01T00:00:00Z"
            })
        );
    }

    #[test]
    fn test_non_object_request_is_an_encode_error() {
        let err = object_params(&"jobs").unwrap_err();
        assert!(matches!(err, SdkError::Encode(_)));
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let err = JobwatchClient::connect("not a url").await.err().unwrap();
        assert!(matches!(err, SdkError::Endpoint(_)));
        assert_eq!(err.code(), None);
    }
}
