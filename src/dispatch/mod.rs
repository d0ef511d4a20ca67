// ABOUTME: Dispatch module - resolves a registered tool or prompt by name
// ABOUTME: and invokes it with the injected client and forwarded arguments.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::client::NetBoxApi;
use crate::error::DispatchError;
use crate::registry::Registry;

#[cfg(test)]
mod dispatch_test;

/// Execute a registered tool by name.
///
/// The client is always the one passed here; a caller-supplied `client` key
/// in the argument map is discarded so the injected client can never be
/// shadowed. Remaining arguments are forwarded verbatim - no coercion and no
/// schema validation (the extracted schema is advisory for discovery only).
/// Errors from the tool body propagate untranslated.
pub async fn execute_tool(
    registry: &Registry,
    name: &str,
    client: Arc<dyn NetBoxApi>,
    mut arguments: Map<String, Value>,
) -> Result<Value, DispatchError> {
    let tool = registry
        .get_tool(name)
        .await
        .ok_or_else(|| DispatchError::ToolNotFound(name.to_string()))?;

    if arguments.remove("client").is_some() {
        tracing::debug!(tool = name, "discarded caller-supplied client argument");
    }

    tracing::debug!(tool = name, "executing tool");
    (tool.handler)(client, arguments)
        .await
        .map_err(DispatchError::Execution)
}

/// Execute a registered prompt by name, awaiting asynchronous bodies.
pub async fn execute_prompt(
    registry: &Registry,
    name: &str,
    arguments: Map<String, Value>,
) -> Result<String, DispatchError> {
    let prompt = registry
        .get_prompt(name)
        .await
        .ok_or_else(|| DispatchError::PromptNotFound(name.to_string()))?;

    tracing::debug!(prompt = name, "executing prompt");
    prompt
        .handler
        .invoke(arguments)
        .await
        .map_err(DispatchError::Execution)
}
