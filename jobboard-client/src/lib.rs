//! Job Board HTTP Client
//!
//! A typed async client for the job board directory API.
//!
//! # Example
//!
//! ```no_run
//! use jobboard_client::JobBoardClient;
//! use jobboard_core::domain::company::CompanyProfile;
//! use jobboard_core::dto::job::JobPayload;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = JobBoardClient::new("http://localhost:8000");
//!
//!     let job = client
//!         .create_job(&JobPayload {
//!             title: "Engineer".to_string(),
//!             job_type: "Full-time".to_string(),
//!             description: "Build systems".to_string(),
//!             location: "Remote".to_string(),
//!             salary: "100000".to_string(),
//!             company: CompanyProfile {
//!                 name: "Acme".to_string(),
//!                 description: "Tech co".to_string(),
//!                 contact_email: "hr@acme.com".to_string(),
//!                 contact_phone: "555-0100".to_string(),
//!             },
//!         })
//!         .await?;
//!
//!     println!("Created job: {}", job.id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;

pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the job board API
#[derive(Debug, Clone)]
pub struct JobBoardClient {
    /// Base URL of the server (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl JobBoardClient {
    /// Create a new client for the server at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use jobboard_client::JobBoardClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = JobBoardClient::with_client("http://localhost:8000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the server is up
    pub async fn health(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(())
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Build an error from a failed response, preferring the `detail` message
    async fn error_from(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        tracing::debug!("Request failed with status {}: {}", status, body);

        ClientError::api_error(status, error_detail(&body))
    }
}

fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
