use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use super::query::Category;

/// Inventory entry returned by `/assets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    #[serde(rename = "asset_unique_id", default, deserialize_with = "scalar_text")]
    pub id: Option<String>,
    #[serde(rename = "asset_name", default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(rename = "asset_type", default, deserialize_with = "scalar_text")]
    pub asset_type: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub cloud_provider: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub state: Option<String>,
}

/// Alert-shaped entry returned by `/alerts`, filtered or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    #[serde(default, deserialize_with = "scalar_text")]
    pub id: Option<String>,
    #[serde(rename = "type_string", default, deserialize_with = "scalar_text")]
    pub type_label: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub asset_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: Option<String>,
}

/// One entry of a result set. The variant is chosen by the query category,
/// never by inspecting which fields happen to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteRecord {
    Asset(AssetRecord),
    Alert(AlertRecord),
}

impl RemoteRecord {
    pub fn decode(category: Category, value: Value) -> Result<Self, serde_json::Error> {
        // Derived structs would also accept a positional array.
        if !value.is_object() {
            return Err(serde_json::Error::custom("expected a JSON object"));
        }
        if category.is_asset_shaped() {
            serde_json::from_value(value).map(RemoteRecord::Asset)
        } else {
            serde_json::from_value(value).map(RemoteRecord::Alert)
        }
    }
}

/// Accepts any JSON scalar as text. Nested values keep their JSON rendering.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_asset_by_category() {
        let value = json!({
            "asset_unique_id": "vm-1",
            "asset_name": "web-server",
            "asset_type": "VM",
            "cloud_provider": "aws"
        });
        match RemoteRecord::decode(Category::Assets, value).unwrap() {
            RemoteRecord::Asset(asset) => {
                assert_eq!(asset.id.as_deref(), Some("vm-1"));
                assert_eq!(asset.name.as_deref(), Some("web-server"));
                assert_eq!(asset.cloud_provider.as_deref(), Some("aws"));
                assert!(asset.state.is_none());
            }
            other => panic!("expected asset, got {:?}", other),
        }
    }

    #[test]
    fn test_alert_shape_even_with_asset_fields() {
        let value = json!({"asset_unique_id": "x", "severity": "high", "state": "open"});
        let record = RemoteRecord::decode(Category::Vulnerabilities, value).unwrap();
        assert!(matches!(record, RemoteRecord::Alert(ref a) if a.severity.as_deref() == Some("high")));
    }

    #[test]
    fn test_non_string_scalars_become_text() {
        let value = json!({"id": 42, "severity": 4.5, "state": null, "description": {"k": "v"}});
        let RemoteRecord::Alert(alert) = RemoteRecord::decode(Category::Alerts, value).unwrap() else {
            panic!("expected alert");
        };
        assert_eq!(alert.id.as_deref(), Some("42"));
        assert_eq!(alert.severity.as_deref(), Some("4.5"));
        assert!(alert.state.is_none());
        assert_eq!(alert.description.as_deref(), Some(r#"{"k":"v"}"#));
    }

    #[test]
    fn test_non_object_record_fails() {
        assert!(RemoteRecord::decode(Category::Alerts, json!("oops")).is_err());
        assert!(RemoteRecord::decode(Category::Assets, json!([1, 2])).is_err());
    }
}
