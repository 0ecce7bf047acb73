use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::OrcaChatConfig;
use crate::errors::OrcaChatError;
use tracing::info;

pub async fn handle_serve(args: ServeArgs, config: &OrcaChatConfig) -> Result<(), OrcaChatError> {
    let host = args.host.as_deref().unwrap_or(config.host());
    let port = args.port.unwrap_or(config.port());
    info!(host = %host, port, base_url = %config.base_url(), "Starting chat API server");

    let state = api::create_app_state(Some(config.base_url()));
    let app = api::build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| OrcaChatError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
