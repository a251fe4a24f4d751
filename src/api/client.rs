//! HTTP client for the PokeAPI record endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::{Duration, Instant};

use crate::config::ApiConfig;

use super::error::LookupError;
use super::model::{PokemonPayload, Record};
use super::source::RecordSource;

/// Fetches records over HTTP.
///
/// No request timeout is set: a hung request stays pending until the server
/// or the OS gives up. Only connection establishment is bounded.
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, query: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, query)
    }
}

#[async_trait]
impl RecordSource for PokeApiClient {
    async fn fetch(&self, query: &str) -> Result<Record, LookupError> {
        let url = self.record_url(query);
        tracing::debug!(url = %url, "Sending lookup request");

        let start = Instant::now();
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Lookup request failed");
            LookupError::transport(e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::warn!(url = %url, status = %status, error = %e, "Failed to read lookup body");
            LookupError::transport(e)
        })?;

        let result = classify_response(query, status, &body);
        let latency_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(record) => tracing::info!(
                query = %query,
                name = %record.name,
                latency_ms,
                "Lookup succeeded"
            ),
            Err(err) => tracing::info!(
                query = %query,
                status = %status,
                latency_ms,
                error = %err.details(),
                "Lookup failed"
            ),
        }
        result
    }
}

/// Decide what a response means for the user.
///
/// - A JSON body with an `error` field, or one without the record fields,
///   is NotFound.
/// - A JSON body with the record fields is a record, whatever the status.
/// - A body that is not JSON is a transport failure, except for 404: the API
///   answers unknown names with a plain-text `Not Found`.
pub fn classify_response(
    query: &str,
    status: StatusCode,
    body: &[u8],
) -> Result<Record, LookupError> {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) if status == StatusCode::NOT_FOUND => {
            return Err(LookupError::not_found(query));
        }
        Err(e) => {
            return Err(LookupError::transport(format!(
                "HTTP {}: body is not JSON: {}",
                status, e
            )));
        }
    };

    if value.get("error").is_some() {
        return Err(LookupError::not_found(query));
    }

    serde_json::from_value::<PokemonPayload>(value)
        .map(Record::from)
        .map_err(|e| {
            tracing::debug!(query = %query, error = %e, "Payload is not record-shaped");
            LookupError::not_found(query)
        })
}
