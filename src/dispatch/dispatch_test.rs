// ABOUTME: Tests for dispatch - client injection, argument forwarding,
// ABOUTME: not-found errors, and sync/async prompt execution.

use async_trait::async_trait;
use serde_json::json;

use super::*;
use crate::error::ClientError;
use crate::registry::{PromptSpec, ToolSpec};

/// Mock API that answers every call with a fixed marker.
struct MockApi;

#[async_trait]
impl NetBoxApi for MockApi {
    async fn get(&self, _endpoint: &str, _id: u64) -> Result<Value, ClientError> {
        Ok(json!({"mock": "get"}))
    }

    async fn list(&self, _endpoint: &str, _filters: &Map<String, Value>) -> Result<Value, ClientError> {
        Ok(json!({"mock": "list"}))
    }

    async fn create(&self, _endpoint: &str, _payload: Value) -> Result<Value, ClientError> {
        Ok(json!({"mock": "create"}))
    }

    async fn update(&self, _endpoint: &str, _id: u64, _payload: Value) -> Result<Value, ClientError> {
        Ok(json!({"mock": "update"}))
    }

    async fn delete(&self, _endpoint: &str, _id: u64) -> Result<Value, ClientError> {
        Ok(Value::Null)
    }

    async fn status(&self) -> Result<Value, ClientError> {
        Ok(json!({"mock": "status"}))
    }
}

fn mock_client() -> Arc<dyn NetBoxApi> {
    Arc::new(MockApi)
}

async fn registry_with_echo() -> Registry {
    let registry = Registry::new();
    let spec = ToolSpec::new("echo")
        .doc("Echo the arguments and the injected client's status.")
        .handler(|client, args| async move {
            let status = client.status().await?;
            Ok(json!({ "args": Value::Object(args), "status": status }))
        });
    registry.register_tool("test", spec).await.unwrap();
    registry
}

#[tokio::test]
async fn test_execute_tool_injects_client() {
    let registry = registry_with_echo().await;

    let mut arguments = Map::new();
    arguments.insert("foo".to_string(), json!(1));

    let result = execute_tool(&registry, "echo", mock_client(), arguments)
        .await
        .unwrap();

    assert_eq!(result["args"]["foo"], 1);
    assert_eq!(result["status"]["mock"], "status");
}

#[tokio::test]
async fn test_caller_supplied_client_is_discarded() {
    let registry = registry_with_echo().await;

    let mut arguments = Map::new();
    arguments.insert("client".to_string(), json!("bogus"));
    arguments.insert("foo".to_string(), json!(1));

    let result = execute_tool(&registry, "echo", mock_client(), arguments)
        .await
        .unwrap();

    // Exactly one client reached the tool - the injected one.
    assert!(result["args"].get("client").is_none());
    assert_eq!(result["args"]["foo"], 1);
    assert_eq!(result["status"]["mock"], "status");
}

#[tokio::test]
async fn test_unknown_tool_error_names_it() {
    let registry = Registry::new();

    let error = execute_tool(&registry, "does_not_exist", mock_client(), Map::new())
        .await
        .unwrap_err();

    assert!(matches!(error, DispatchError::ToolNotFound(_)));
    assert!(error.to_string().contains("does_not_exist"));
}

#[tokio::test]
async fn test_tool_errors_propagate_untranslated() {
    let registry = Registry::new();
    let spec = ToolSpec::new("failing")
        .handler(|_, _| async move { anyhow::bail!("device is unreachable") });
    registry.register_tool("test", spec).await.unwrap();

    let error = execute_tool(&registry, "failing", mock_client(), Map::new())
        .await
        .unwrap_err();

    match error {
        DispatchError::Execution(inner) => {
            assert_eq!(inner.to_string(), "device is unreachable");
        }
        other => panic!("Expected Execution, got {other}"),
    }
}

#[tokio::test]
async fn test_execute_sync_prompt() {
    let registry = Registry::new();
    let prompt = PromptSpec::new("greet", "Greeting").sync_handler(|args| {
        let name = args
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("operator");
        Ok(format!("Hello, {name}."))
    });
    registry.register_prompt(prompt).await.unwrap();

    let mut arguments = Map::new();
    arguments.insert("name".to_string(), json!("Ada"));
    let text = execute_prompt(&registry, "greet", arguments).await.unwrap();
    assert_eq!(text, "Hello, Ada.");

    // Zero arguments still works.
    let text = execute_prompt(&registry, "greet", Map::new()).await.unwrap();
    assert_eq!(text, "Hello, operator.");
}

#[tokio::test]
async fn test_execute_async_prompt() {
    let registry = Registry::new();
    let prompt = PromptSpec::new("async_greet", "Greeting")
        .async_handler(|_| async move { Ok("from async".to_string()) });
    registry.register_prompt(prompt).await.unwrap();

    let text = execute_prompt(&registry, "async_greet", Map::new())
        .await
        .unwrap();
    assert_eq!(text, "from async");
}

#[tokio::test]
async fn test_unknown_prompt_error_names_it() {
    let registry = Registry::new();

    let error = execute_prompt(&registry, "missing_prompt", Map::new())
        .await
        .unwrap_err();

    assert!(error.to_string().contains("missing_prompt"));
}
