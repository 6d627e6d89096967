//! HTTP client for the TVMaze API
//!
//! Thin wrapper over `reqwest` that fetches JSON bodies and maps
//! non-success statuses onto [`ShowfinderError`]. There is no retry:
//! a failed request is reported to the caller as-is.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Result, ShowfinderError};
use crate::url::BASE_URL;

const USER_AGENT: &str = concat!("showfinder/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL without trailing slash (default: https://api.tvmaze.com)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointing at another base URL
    ///
    /// Useful for mirrors and mock servers.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

/// HTTP client wrapper for TVMaze
pub struct TvMazeClient {
    client: reqwest::Client,
    base_url: String,
}

impl TvMazeClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(ShowfinderError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch a JSON body from a path on the API
    ///
    /// # Arguments
    /// * `path` - The path and query to fetch (e.g., "/shows/1/episodes")
    ///
    /// # Returns
    /// The response body as a string
    ///
    /// # Errors
    /// - `HttpError` - Network errors, timeouts, unreadable bodies
    /// - `NotFound` - Server returned 404
    /// - `Status` - Any other non-2xx status
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "requesting");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ShowfinderError::HttpError)?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            warn!(%url, "resource not found");
            return Err(ShowfinderError::NotFound(url));
        }

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "request failed");
            return Err(ShowfinderError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response.text().await.map_err(ShowfinderError::HttpError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.tvmaze.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("showfinder/"));
    }

    #[test]
    fn test_client_config_with_base_url_trims_slash() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_client_creation() {
        let client = TvMazeClient::new();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shows/1/episodes"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let client = TvMazeClient::with_config(ClientConfig::with_base_url(server.uri())).unwrap();
        let body = client.fetch("/shows/1/episodes").await.unwrap();
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = TvMazeClient::with_config(ClientConfig::with_base_url(server.uri())).unwrap();
        match client.fetch("/shows/424242/episodes").await {
            Err(ShowfinderError::NotFound(url)) => assert!(url.ends_with("/shows/424242/episodes")),
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = TvMazeClient::with_config(ClientConfig::with_base_url(server.uri())).unwrap();
        match client.fetch("/search/shows?q=x").await {
            Err(ShowfinderError::Status { status, .. }) => assert_eq!(status, 503),
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_rate_limited_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = TvMazeClient::with_config(ClientConfig::with_base_url(server.uri())).unwrap();
        let result = client.fetch("/shows/1/episodes").await;
        assert!(matches!(result, Err(ShowfinderError::Status { status: 429, .. })));
    }
}
