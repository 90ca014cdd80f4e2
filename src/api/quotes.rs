//! HTTP client for the random quote endpoint.
//!
//! Issues a single `GET {base_url}{path}` and maps the JSON payload to a
//! [`Quote`] through the configured field names. Decoding is lenient:
//!
//! - unknown fields are ignored
//! - a missing or non-string field becomes an empty string
//! - a top-level array (as returned by zenquotes-style services) yields its
//!   first element
//!
//! Any transport failure, non-2xx status or undecodable body is returned as a
//! [`QuoteError`].

use super::QuoteSource;
use crate::libs::config::QuoteApiConfig;
use crate::libs::quote::Quote;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("taskmate/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum QuoteError {
    /// DNS, connection or timeout failure.
    #[error("quote request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("quote service responded with status {0}")]
    Status(StatusCode),
    #[error("quote payload could not be decoded: {0}")]
    Decode(String),
}

#[derive(Debug, Clone)]
pub struct QuoteClient {
    client: Client,
    config: QuoteApiConfig,
}

impl QuoteClient {
    pub fn new(config: &QuoteApiConfig) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Full URL of the random quote endpoint.
    pub fn endpoint(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = self.config.path.trim_start_matches('/');
        match path.is_empty() {
            true => base.to_string(),
            false => format!("{}/{}", base, path),
        }
    }
}

impl QuoteSource for QuoteClient {
    async fn fetch_random_quote(&self) -> Result<Quote, QuoteError> {
        let url = self.endpoint();
        debug!(%url, "fetching random quote");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status));
        }

        let payload = response.json::<Value>().await.map_err(|e| QuoteError::Decode(e.to_string()))?;
        decode_quote(&payload, &self.config)
    }
}

/// Maps a decoded JSON payload to a quote using the configured field names.
pub fn decode_quote(payload: &Value, mapping: &QuoteApiConfig) -> Result<Quote, QuoteError> {
    let object = match payload {
        Value::Array(items) => items.first().ok_or_else(|| QuoteError::Decode("empty quote list".to_string()))?,
        other => other,
    };
    let Value::Object(fields) = object else {
        return Err(QuoteError::Decode(format!("expected a JSON object, got {}", object)));
    };

    let text = |name: &str| fields.get(name).and_then(Value::as_str).unwrap_or_default().to_string();

    Ok(Quote {
        content: text(&mapping.content_field),
        author: text(&mapping.author_field),
    })
}
