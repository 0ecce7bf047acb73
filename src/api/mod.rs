pub mod routes;
pub mod models;
pub mod errors;

use std::sync::Arc;
use axum::{routing::{get, post}, Router};
use axum::http::Method;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::models::DEFAULT_BASE_URL;
use crate::orca::{OrcaClient, ReportSource};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ReportSource>,
    /// Base URL used when a request does not name its own.
    pub default_base_url: String,
}

impl AppState {
    pub fn new(source: Arc<dyn ReportSource>, default_base_url: Option<&str>) -> Self {
        Self {
            source,
            default_base_url: default_base_url.unwrap_or(DEFAULT_BASE_URL).to_string(),
        }
    }
}

pub fn create_app_state(default_base_url: Option<&str>) -> AppState {
    AppState::new(Arc::new(OrcaClient::new()), default_base_url)
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/chat", post(routes::chat::chat))
        .layer(CatchPanicLayer::custom(errors::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
