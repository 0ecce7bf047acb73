use crate::errors::OrcaChatError;

/// Substrings that never belong in a server config. Every string value is
/// eventually a host, a URL or a log setting.
const DANGEROUS_PATTERNS: &[&str] = &[
    "../",
    "..\\",
    "<script",
    "javascript:",
    "data:",
    "file:",
];

pub fn validate_security_patterns(value: &serde_yaml::Value) -> Result<(), OrcaChatError> {
    check_value(value, &mut Vec::new())
}

fn check_value(value: &serde_yaml::Value, path: &mut Vec<String>) -> Result<(), OrcaChatError> {
    match value {
        serde_yaml::Value::String(s) => {
            let lower = s.to_lowercase();
            if let Some(pattern) = DANGEROUS_PATTERNS.iter().find(|p| lower.contains(*p)) {
                let location = if path.is_empty() { "root".to_string() } else { path.join(".") };
                return Err(OrcaChatError::Config(format!(
                    "Dangerous pattern '{}' found at config path: {}",
                    pattern, location
                )));
            }
            Ok(())
        }
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                path.push(k.as_str().unwrap_or("unknown").to_string());
                check_value(v, path)?;
                path.pop();
            }
            Ok(())
        }
        serde_yaml::Value::Sequence(seq) => {
            for (i, v) in seq.iter().enumerate() {
                path.push(format!("[{}]", i));
                check_value(v, path)?;
                path.pop();
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> serde_yaml::Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_default_style_config_passes() {
        let value = yaml("server:\n  host: 0.0.0.0\n  port: 8080\norca:\n  base_url: https://api.orcasecurity.io/api");
        assert!(validate_security_patterns(&value).is_ok());
    }

    #[test]
    fn test_file_base_url_blocked() {
        let err = validate_security_patterns(&yaml("orca:\n  base_url: 'file:///etc/passwd'")).unwrap_err();
        assert!(err.to_string().contains("orca.base_url"));
    }

    #[test]
    fn test_javascript_uri_blocked() {
        assert!(validate_security_patterns(&yaml("orca:\n  base_url: 'JavaScript:alert(1)'")).is_err());
    }

    #[test]
    fn test_traversal_in_sequence_blocked() {
        let err = validate_security_patterns(&yaml("cors:\n  - ok\n  - '../../x'")).unwrap_err();
        assert!(err.to_string().contains("cors.[1]"));
    }

    #[test]
    fn test_scalars_pass() {
        assert!(validate_security_patterns(&yaml("port: 8080\njson: true")).is_ok());
    }
}
