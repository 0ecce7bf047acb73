use std::path::Path;
use crate::errors::OrcaChatError;
use super::types::OrcaChatConfig;
use super::security::validate_security_patterns;
use super::schema::CONFIG_SCHEMA;
use tracing::{info, warn};

pub async fn parse_config(path: &Path) -> Result<OrcaChatConfig, OrcaChatError> {
    if !path.exists() {
        return Err(OrcaChatError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(OrcaChatError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    validate_security_patterns(&yaml)?;
    validate_schema(&yaml)?;

    let config: OrcaChatConfig = serde_yaml::from_value(yaml)?;
    validate_semantics(&config)?;

    Ok(config)
}

/// Parse `path` when given, otherwise fall back to defaults.
pub async fn load_or_default(path: Option<&Path>) -> Result<OrcaChatConfig, OrcaChatError> {
    match path {
        Some(p) => {
            let config = parse_config(p).await?;
            info!(path = %p.display(), "Loaded configuration");
            Ok(config)
        }
        None => Ok(OrcaChatConfig::default()),
    }
}

/// Advisory structural check: problems are logged, not fatal.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), OrcaChatError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| OrcaChatError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| OrcaChatError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

fn validate_semantics(config: &OrcaChatConfig) -> Result<(), OrcaChatError> {
    if let Some(base) = config.orca.as_ref().and_then(|o| o.base_url.as_deref()) {
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(OrcaChatError::Config(format!(
                "orca.base_url must be an http(s) URL, got '{}'",
                base
            )));
        }
        if base.ends_with('/') {
            warn!(base_url = %base, "orca.base_url ends with '/', endpoint paths will contain '//'");
        }
    }

    if config.server.as_ref().and_then(|s| s.port) == Some(0) {
        return Err(OrcaChatError::Config("server.port must be non-zero".into()));
    }

    Ok(())
}
