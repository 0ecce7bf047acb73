use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 }
                }
            },
            "orca": {
                "type": "object",
                "properties": {
                    "base_url": { "type": "string", "pattern": "^https?://" }
                }
            },
            "logging": {
                "type": "object",
                "properties": {
                    "json": { "type": "boolean" },
                    "level": { "type": "string" }
                }
            }
        }
    })
});
