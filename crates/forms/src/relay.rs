//! Client side of the third-party form relay.
//!
//! The relay accepts a JSON object, forwards it as an e-mail, and answers with
//! a JSON body carrying a boolean `success`. Nothing else about its schema is
//! relied on.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

pub const DEFAULT_RELAY_URL: &str = "https://api.web3forms.com/submit";

/// Relay answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("could not encode payload: {0}")]
    Encode(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("relay returned HTTP {0}: {1}")]
    Status(u16, String),
    #[error("could not decode relay response: {0}")]
    Decode(String),
    #[error("relay rejected the submission: {0}")]
    Rejected(String),
}

/// One-shot delivery of a payload to the relay.
///
/// Implementations make exactly one attempt; retrying is the visitor's call.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn submit(&self, payload: &JsonValue) -> Result<RelayResponse, RelayError>;
}

/// `reqwest`-backed relay client.
#[derive(Debug, Clone)]
pub struct HttpFormRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFormRelay {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RelayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RelayError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl FormRelay for HttpFormRelay {
    async fn submit(&self, payload: &JsonValue) -> Result<RelayResponse, RelayError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        // Refusals arrive as JSON on non-2xx statuses too. A non-2xx answer is
        // only trusted when it reports `success: false`.
        match serde_json::from_str::<RelayResponse>(&body) {
            Ok(parsed) if status.is_success() || !parsed.success => Ok(parsed),
            Ok(_) => Err(RelayError::Status(status.as_u16(), body)),
            Err(_) if !status.is_success() => Err(RelayError::Status(status.as_u16(), body)),
            Err(e) => Err(RelayError::Decode(e.to_string())),
        }
    }
}
