use console::style;
use serde_json::json;
use crate::cli::commands::AskArgs;
use crate::config::{resolve_credential, OrcaChatConfig};
use crate::errors::OrcaChatError;
use crate::orca::OrcaClient;
use crate::pipeline::{run_chat, ChatRequest};
use tracing::debug;

/// Resolve the `--api-key` argument. An unset `$VAR` resolves to itself and
/// counts as no key, as does an empty value.
pub fn resolve_api_key(raw: &str) -> Option<String> {
    let resolved = resolve_credential(raw);
    if resolved.is_empty() || resolved.starts_with('$') {
        None
    } else {
        Some(resolved)
    }
}

pub async fn handle_ask(args: AskArgs, config: &OrcaChatConfig) -> Result<(), OrcaChatError> {
    let api_key = resolve_api_key(&args.api_key);
    debug!(has_key = api_key.is_some(), "Running one-shot chat query");

    let request = ChatRequest::single(&args.question, api_key, args.base_url.clone());
    let client = OrcaClient::new();
    let reply = run_chat(request, &client, config.base_url()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&json!({ "message": reply }))?);
    } else {
        println!("{} {}", style("?").cyan().bold(), style(&args.question).bold());
        println!("{}", reply.trim_end());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_key_literal() {
        assert_eq!(resolve_api_key("orca-key-1"), Some("orca-key-1".to_string()));
    }

    #[test]
    fn test_resolve_api_key_from_env() {
        std::env::set_var("TEST_ORCACHAT_ASK_KEY", "env-key");
        assert_eq!(resolve_api_key("$TEST_ORCACHAT_ASK_KEY"), Some("env-key".to_string()));
        std::env::remove_var("TEST_ORCACHAT_ASK_KEY");
    }

    #[test]
    fn test_resolve_api_key_unset_env_is_none() {
        assert_eq!(resolve_api_key("$NONEXISTENT_ORCACHAT_ASK_KEY"), None);
    }

    #[test]
    fn test_resolve_api_key_empty_is_none() {
        assert_eq!(resolve_api_key(""), None);
    }
}
