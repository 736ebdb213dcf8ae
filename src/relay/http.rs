//! Reqwest-backed `ChatUpstream`.

use std::time::Duration;

use super::{ChatUpstream, RelayError};
use crate::config::UpstreamConfig;

pub struct HttpUpstream {
    http: reqwest::Client,
    url: String,
}

impl HttpUpstream {
    /// Build a client with the configured request and connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::HttpClientBuild`] if the reqwest client fails to build.
    pub fn new(config: &UpstreamConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: config.url.clone() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(serde::Serialize)]
struct UpstreamRequest<'a> {
    question: &'a str,
}

#[async_trait::async_trait]
impl ChatUpstream for HttpUpstream {
    async fn ask(&self, question: &str) -> Result<serde_json::Value, RelayError> {
        let response = self
            .http
            .post(&self.url)
            .json(&UpstreamRequest { question })
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(RelayError::Upstream { status });
        }

        let text = response.text().await.map_err(classify_send_error)?;
        serde_json::from_str(&text).map_err(|e| RelayError::Decode(e.to_string()))
    }
}

fn classify_send_error(e: reqwest::Error) -> RelayError {
    if e.is_timeout() { RelayError::Timeout } else { RelayError::Connect(e.to_string()) }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
