use std::any::Any;
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use crate::api::models::ErrorResponse;
use tracing::error;
use crate::errors::OrcaChatError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl IntoResponse for OrcaChatError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            OrcaChatError::Validation(_) | OrcaChatError::Config(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            _ => {
                error!(error = %self, "Chat API error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Response for a handler that panicked mid-request.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    OrcaChatError::Internal(format!("handler panicked: {}", detail)).into_response()
}
