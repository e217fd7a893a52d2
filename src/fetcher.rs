//! HTTP retrieval of remote lists

use crate::config::SourceConfig;
use crate::error::{Error, FetchError, Result};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Fetches remote lists over HTTP with a fixed per-request timeout
///
/// One request per call, no retries. Redirects follow the reqwest default policy.
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl Fetcher {
    /// Build a fetcher from the source settings
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created
    pub fn new(source: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(source.timeout)
            .user_agent(source.user_agent.as_str())
            .build()
            .map_err(Error::Network)?;

        Ok(Self {
            client,
            timeout: source.timeout,
        })
    }

    /// Timeout applied to every request
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and return the body bytes unchanged
    ///
    /// # Errors
    /// Returns [`FetchError`] if:
    /// - the connection fails or the timeout elapses
    /// - the server answers with a non-2xx status
    /// - the body cannot be read
    pub async fn fetch(&self, url: &Url) -> std::result::Result<Vec<u8>, FetchError> {
        debug!(url = %url, "fetching list");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                self.classify(url, e)
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        debug!(url = %url, bytes = body.len(), "fetched list");
        Ok(body.to_vec())
    }

    fn classify(&self, url: &Url, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else if e.is_connect() {
            FetchError::Connect {
                url: url.to_string(),
                reason: e.to_string(),
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    }
}
