use axum::{body::Bytes, extract::State, Json};
use tracing::{info_span, Instrument};
use crate::api::AppState;
use crate::api::models::{ChatRequest, ChatResponse};
use crate::errors::OrcaChatError;
use crate::pipeline::run_chat;

/// The body is parsed as JSON whatever its declared content type.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, OrcaChatError> {
    let request: ChatRequest = serde_json::from_slice(&body)
        .map_err(|e| OrcaChatError::Internal(format!("Malformed chat request: {}", e)))?;

    let request_id = uuid::Uuid::new_v4();
    let message = run_chat(request, state.source.as_ref(), &state.default_base_url)
        .instrument(info_span!("chat", request_id = %request_id))
        .await?;

    Ok(Json(ChatResponse { message }))
}
