// ABOUTME: Shared helpers for catalog tool handlers - argument extraction,
// ABOUTME: filter building, and the dry-run/confirm convention.

use serde_json::{Map, Value, json};

/// Extract a required string argument.
pub(crate) fn require_str(args: &Map<String, Value>, key: &str) -> anyhow::Result<String> {
    args.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("missing required parameter: {key}"))
}

/// Extract a required numeric ID argument.
pub(crate) fn require_id(args: &Map<String, Value>, key: &str) -> anyhow::Result<u64> {
    args.get(key)
        .and_then(Value::as_u64)
        .ok_or_else(|| anyhow::anyhow!("missing required parameter: {key}"))
}

/// Copy the named arguments into a filter map, skipping absent ones.
pub(crate) fn pick_filters(args: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    let mut filters = Map::new();
    for key in keys {
        if let Some(value) = args.get(*key) {
            filters.insert((*key).to_string(), value.clone());
        }
    }
    filters
}

/// Whether the caller confirmed a mutating operation.
pub(crate) fn confirmed(args: &Map<String, Value>) -> bool {
    args.get("confirm").and_then(Value::as_bool).unwrap_or(false)
}

/// Dry-run preview for an unconfirmed mutating operation.
pub(crate) fn dry_run(action: &str, endpoint: &str, detail: Value) -> Value {
    json!({
        "dry_run": true,
        "action": action,
        "endpoint": endpoint,
        "detail": detail,
        "hint": "Pass confirm=true to apply this change",
    })
}
