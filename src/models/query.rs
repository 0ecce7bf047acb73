use serde::{Deserialize, Serialize};

/// Documented root of the Orca Security REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.orcasecurity.io/api";

/// Report category a question resolves to. Selects both the remote record
/// shape and the formatter's rendering branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Alerts,
    Assets,
    Vulnerabilities,
    ComplianceIssues,
    Misconfigurations,
}

impl Category {
    /// Plural noun used in every rendered sentence.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alerts => "alerts",
            Self::Assets => "assets",
            Self::Vulnerabilities => "vulnerabilities",
            Self::ComplianceIssues => "compliance issues",
            Self::Misconfigurations => "misconfigurations",
        }
    }

    pub fn is_asset_shaped(&self) -> bool {
        matches!(self, Self::Assets)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolved remote query: resource path (with optional filter) plus category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub endpoint: String,
    pub category: Category,
}

impl QuerySpec {
    pub fn new(endpoint: &str, category: Category) -> Self {
        Self { endpoint: endpoint.to_string(), category }
    }
}

/// Per-request credentials for the platform. Never stored by the service.
#[derive(Clone)]
pub struct RemoteCredentials {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl RemoteCredentials {
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        Self::with_default_base(api_key, base_url, DEFAULT_BASE_URL)
    }

    /// Like `new`, but falls back to `default_base` instead of the built-in root.
    pub fn with_default_base(api_key: Option<String>, base_url: Option<String>, default_base: &str) -> Self {
        let base_url = base_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| default_base.to_string());
        Self { api_key, base_url }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().map_or(false, |k| !k.is_empty())
    }

    pub fn url_for(&self, spec: &QuerySpec) -> String {
        format!("{}{}", self.base_url, spec.endpoint)
    }
}

impl std::fmt::Debug for RemoteCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteCredentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::ComplianceIssues.label(), "compliance issues");
        assert_eq!(format!("{}", Category::Vulnerabilities), "vulnerabilities");
        assert_eq!(serde_json::to_string(&Category::ComplianceIssues).unwrap(), "\"compliance-issues\"");
    }

    #[test]
    fn test_credentials_default_base_url() {
        let creds = RemoteCredentials::new(Some("key".into()), None);
        assert_eq!(creds.base_url, DEFAULT_BASE_URL);
        let creds = RemoteCredentials::new(None, Some("".into()));
        assert_eq!(creds.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_credentials_custom_base_url() {
        let creds = RemoteCredentials::new(None, Some("http://localhost:9000/api".into()));
        let spec = QuerySpec::new("/assets", Category::Assets);
        assert_eq!(creds.url_for(&spec), "http://localhost:9000/api/assets");
    }

    #[test]
    fn test_empty_api_key_is_missing() {
        assert!(!RemoteCredentials::new(Some(String::new()), None).has_api_key());
        assert!(!RemoteCredentials::new(None, None).has_api_key());
        assert!(RemoteCredentials::new(Some("k".into()), None).has_api_key());
    }

    #[test]
    fn test_debug_redacts_key() {
        let creds = RemoteCredentials::new(Some("super-secret-key".into()), None);
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("super-secret-key"));
        assert!(printed.contains("[REDACTED]"));
    }
}
