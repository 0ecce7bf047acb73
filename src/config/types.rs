use serde::{Deserialize, Serialize};
use crate::models::DEFAULT_BASE_URL;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration. Orca API keys are deliberately absent: they arrive
/// with each request.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OrcaChatConfig {
    pub server: Option<ServerConfig>,
    pub orca: Option<OrcaConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OrcaConfig {
    /// Replaces the built-in API root for requests that omit `orcaApiUrl`.
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of human-readable ones.
    pub json: Option<bool>,
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: Option<String>,
}

impl OrcaChatConfig {
    pub fn host(&self) -> &str {
        self.server.as_ref().and_then(|s| s.host.as_deref()).unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.server.as_ref().and_then(|s| s.port).unwrap_or(DEFAULT_PORT)
    }

    pub fn base_url(&self) -> &str {
        self.orca.as_ref().and_then(|o| o.base_url.as_deref()).unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}
