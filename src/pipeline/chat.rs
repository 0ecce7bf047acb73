use serde::Deserialize;
use tracing::{info, warn};
use crate::errors::OrcaChatError;
use crate::intent::classify;
use crate::models::{ChatMessage, RemoteCredentials, Role};
use crate::orca::ReportSource;
use crate::reporting::format_outcome;

/// Body of a chat turn as sent by the front-end.
#[derive(Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
    #[serde(rename = "orcaApiKey", default)]
    pub api_key: Option<String>,
    #[serde(rename = "orcaApiUrl", default)]
    pub base_url: Option<String>,
}

impl ChatRequest {
    pub fn single(question: &str, api_key: Option<String>, base_url: Option<String>) -> Self {
        Self {
            messages: Some(vec![ChatMessage::user(question)]),
            api_key,
            base_url,
        }
    }
}

/// Return the message to answer: the transcript must be non-empty and end
/// with a user turn.
pub fn validate_messages(messages: &[ChatMessage]) -> Result<&ChatMessage, OrcaChatError> {
    let last = messages
        .last()
        .ok_or_else(|| OrcaChatError::Validation("No messages provided".into()))?;
    if last.role != Role::User {
        return Err(OrcaChatError::Validation("Last message must be from user".into()));
    }
    Ok(last)
}

/// Answer the latest user message: classify, fetch once, format.
///
/// Only validation problems are returned as errors. Remote failures are part
/// of the reply text.
pub async fn run_chat(
    request: ChatRequest,
    source: &dyn ReportSource,
    default_base_url: &str,
) -> Result<String, OrcaChatError> {
    let messages = request.messages.unwrap_or_default();
    let question = validate_messages(&messages)?;

    let spec = classify(&question.content);
    let creds = RemoteCredentials::with_default_base(request.api_key, request.base_url, default_base_url);

    let outcome = source.fetch(&spec, &creds).await;
    match outcome.failure_reason() {
        Some(reason) => warn!(
            source = source.source_name(),
            category = %spec.category,
            reason = %reason,
            "Fetch failed, replying with diagnostic"
        ),
        None => info!(source = source.source_name(), category = %spec.category, "Fetch succeeded"),
    }

    Ok(format_outcome(&outcome, spec.category))
}
