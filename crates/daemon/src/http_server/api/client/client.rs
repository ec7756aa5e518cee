use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use url::Url;

use super::error::ApiError;
use super::{endpoint, ApiRequest};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Talks to a running daemon
#[derive(Debug, Clone)]
pub struct ApiClient {
    remote: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(remote: &Url) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(default_headers)
            .user_agent(concat!("epochlock/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            remote: remote.clone(),
            client,
        })
    }

    /// Send a typed request. Non-success statuses come back as
    /// [`ApiError::HttpStatus`] carrying the response body.
    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, ApiError> {
        let request_builder = request.build_request(&self.remote, &self.client);
        let response = request_builder.send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T::Response>().await?)
        } else {
            Err(ApiError::HttpStatus(status, response.text().await?))
        }
    }

    /// GET `path` and report only the status code
    pub async fn probe(&self, path: &str) -> Result<StatusCode, ApiError> {
        let response = self
            .client
            .get(endpoint(&self.remote, path))
            .send()
            .await?;
        Ok(response.status())
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> &Url {
        &self.remote
    }
}
