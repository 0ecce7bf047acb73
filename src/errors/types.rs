use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrcaChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed chat request, rejected before the pipeline runs.
    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl OrcaChatError {
    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            OrcaChatError::Config(_) | OrcaChatError::Yaml(_) => 2,
            OrcaChatError::Validation(_) => 3,
            _ => 1,
        }
    }
}
