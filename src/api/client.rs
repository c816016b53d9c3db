//! HTTP transport for fetching configuration and meeting documents.
//!
//! The loader only cares about two things from the transport: whether the
//! response succeeded, and the JSON body. No retries, no header inspection,
//! no streaming.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::LoaderError;

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Thin wrapper around `reqwest::Client`.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, LoaderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and decode the body as JSON.
    ///
    /// The status is checked before the body is read, so a non-success
    /// response is a transport failure and a body that is not valid JSON is
    /// a decode failure - the two never blur together. `label` is the file
    /// identifier used in error messages, which may differ from the
    /// resolved `url`.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        label: &str,
    ) -> Result<T, LoaderError> {
        debug!(url, "fetching");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(LoaderError::from_status(label, response.status()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| LoaderError::Decode {
            path: label.to_string(),
            source: e,
        })
    }
}
