use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};
use crate::config::redact_credentials;
use crate::models::{Category, FailureReason, FetchOutcome, QuerySpec, RemoteCredentials, RemoteRecord};
use super::source::ReportSource;

pub const MISSING_API_KEY_MESSAGE: &str = "Orca API key not configured. Please set it in the settings.";

/// HTTP client for the Orca Security REST API.
#[derive(Clone, Default)]
pub struct OrcaClient {
    client: Client,
}

impl OrcaClient {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

#[async_trait]
impl ReportSource for OrcaClient {
    async fn fetch(&self, spec: &QuerySpec, creds: &RemoteCredentials) -> FetchOutcome {
        if !creds.has_api_key() {
            warn!(endpoint = %spec.endpoint, "Orca API key missing, skipping request");
            return FetchOutcome::failure(FailureReason::MissingCredential, MISSING_API_KEY_MESSAGE);
        }
        let api_key = creds.api_key.as_deref().unwrap_or_default();

        let url = creds.url_for(spec);
        debug!(url = %url, "Requesting Orca data");

        let resp = match self.client
            .get(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                let message = redact_credentials(&e.to_string(), &[api_key]);
                warn!(endpoint = %spec.endpoint, error = %message, "Orca request failed");
                return FetchOutcome::failure(
                    FailureReason::TransportError,
                    format!("Failed to fetch from Orca: {}", message),
                );
            }
        };

        let status = resp.status();
        if !status.is_success() {
            warn!(endpoint = %spec.endpoint, status = status.as_u16(), "Orca API returned error status");
            return FetchOutcome::failure(
                FailureReason::RemoteStatusError,
                format!(
                    "Orca API error: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                ),
            );
        }

        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(endpoint = %spec.endpoint, error = %e, "Failed to read Orca response body");
                return FetchOutcome::failure(
                    FailureReason::TransportError,
                    format!("Failed to fetch from Orca: {}", e),
                );
            }
        };

        match decode_records(spec.category, &body) {
            Ok(items) => {
                info!(endpoint = %spec.endpoint, status = status.as_u16(), items = items.len(), "Fetched Orca data");
                FetchOutcome::Success { items }
            }
            Err(e) => {
                warn!(endpoint = %spec.endpoint, error = %e, "Failed to decode Orca response");
                FetchOutcome::failure(FailureReason::DecodeError, format!("Failed to fetch from Orca: {}", e))
            }
        }
    }

    fn source_name(&self) -> &str { "orca" }
}

/// Decode a list response body (`{"data": [...]}`) into records of the
/// category's shape. A missing or null `data` is an empty result.
pub fn decode_records(category: Category, body: &str) -> Result<Vec<RemoteRecord>, String> {
    let parsed: Value = serde_json::from_str(body)
        .map_err(|e| format!("invalid JSON response: {}", e))?;

    let obj = parsed.as_object()
        .ok_or_else(|| "invalid response: expected a JSON object".to_string())?;

    let entries = match obj.get("data") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err("invalid response: `data` is not an array".to_string()),
    };

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            RemoteRecord::decode(category, entry.clone())
                .map_err(|e| format!("invalid record at index {}: {}", i, e))
        })
        .collect()
}
