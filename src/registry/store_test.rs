// ABOUTME: Tests for the Registry - registration, last-wins overwrite,
// ABOUTME: lookup, category filtering, stats, and shared-state cloning.

use serde_json::{Value, json};

use super::*;
use crate::error::RegistryError;
use crate::schema::Param;

fn spec(name: &str, category: &str) -> ToolSpec {
    ToolSpec::new(name)
        .category(category)
        .doc(format!("{} summary.", name))
        .param(Param::of::<String>("name"))
        .handler(|_, args| async move { Ok(Value::Object(args)) })
}

#[tokio::test]
async fn test_register_and_get() {
    let registry = Registry::new();
    registry.register_tool("catalog.dcim", spec("netbox_get_device", "dcim"))
        .await
        .unwrap();

    let tool = registry.get_tool("netbox_get_device").await.unwrap();
    assert_eq!(tool.name, "netbox_get_device");
    assert_eq!(tool.category, "dcim");
    assert_eq!(tool.module, "catalog.dcim");
    assert_eq!(tool.description, "netbox_get_device summary.");
    assert_eq!(tool.parameters.len(), 1);
}

#[tokio::test]
async fn test_get_nonexistent_returns_none() {
    let registry = Registry::new();
    assert!(registry.get_tool("nonexistent").await.is_none());
    assert!(registry.describe_tool("nonexistent").await.is_none());
}

#[tokio::test]
async fn test_reregistration_last_wins() {
    let registry = Registry::new();
    registry.register_tool("m", spec("alias", "dcim")).await.unwrap();
    registry
        .register_tool("m", spec("alias", "ipam").description("replacement"))
        .await
        .unwrap();

    assert_eq!(registry.tool_count().await, 1);
    let tool = registry.get_tool("alias").await.unwrap();
    assert_eq!(tool.category, "ipam");
    assert_eq!(tool.description, "replacement");
}

#[tokio::test]
async fn test_register_without_handler_fails() {
    let registry = Registry::new();
    let spec = ToolSpec::new("broken").doc("No handler attached.");

    match registry.register_tool("m", spec).await {
        Err(RegistryError::MissingToolHandler(name)) => assert_eq!(name, "broken"),
        other => panic!("Expected MissingToolHandler, got {:?}", other.err()),
    }
    assert_eq!(registry.tool_count().await, 0);
}

#[tokio::test]
async fn test_category_filter_is_exact() {
    let registry = Registry::new();
    registry.register_tool("m", spec("a", "dcim")).await.unwrap();
    registry.register_tool("m", spec("b", "dcim")).await.unwrap();
    registry.register_tool("m", spec("c", "ipam")).await.unwrap();

    let dcim = registry.tools_in_category("dcim").await;
    assert_eq!(dcim.len(), 2);
    assert_eq!(dcim[0].name, "a");
    assert_eq!(dcim[1].name, "b");

    assert!(registry.tools_in_category("DCIM").await.is_empty());
    assert!(registry.tools_in_category("unknown").await.is_empty());
}

#[tokio::test]
async fn test_categories_partition_registry() {
    let registry = Registry::new();
    registry.register_tool("m", spec("a", "dcim")).await.unwrap();
    registry.register_tool("m", spec("b", "dcim")).await.unwrap();
    registry.register_tool("m", spec("c", "ipam")).await.unwrap();

    let stats = registry.stats().await;
    let mut union: Vec<String> = Vec::new();
    for category in stats.categories.keys() {
        for tool in registry.tools_in_category(category).await {
            assert!(!union.contains(&tool.name), "tool in two categories");
            union.push(tool.name.clone());
        }
    }
    union.sort();
    assert_eq!(union, registry.tool_names().await);
}

#[tokio::test]
async fn test_stats_histogram() {
    let registry = Registry::new();
    registry.register_tool("m", spec("a", "dcim")).await.unwrap();
    registry.register_tool("m", spec("b", "dcim")).await.unwrap();
    registry.register_tool("m", spec("c", "ipam")).await.unwrap();

    let stats = registry.stats().await;
    assert_eq!(stats.total_tools, 3);
    assert_eq!(stats.categories.get("dcim"), Some(&2));
    assert_eq!(stats.categories.get("ipam"), Some(&1));
}

#[tokio::test]
async fn test_tool_names_sorted() {
    let registry = Registry::new();
    registry.register_tool("m", spec("zulu", "x")).await.unwrap();
    registry.register_tool("m", spec("alpha", "x")).await.unwrap();

    assert_eq!(registry.tool_names().await, vec!["alpha", "zulu"]);
}

#[tokio::test]
async fn test_register_and_get_prompt() {
    let registry = Registry::new();
    let prompt = PromptSpec::new("onboarding", "Device onboarding checklist")
        .doc("Walks through onboarding.")
        .sync_handler(|_| Ok("checklist".to_string()));
    registry.register_prompt(prompt).await.unwrap();

    let metadata = registry.get_prompt("onboarding").await.unwrap();
    assert_eq!(metadata.description, "Device onboarding checklist");
    assert_eq!(metadata.kind(), "sync");
    assert!(registry.get_prompt("missing").await.is_none());
    assert_eq!(registry.prompt_names().await, vec!["onboarding"]);
}

#[tokio::test]
async fn test_prompt_without_handler_fails() {
    let registry = Registry::new();
    let result = registry
        .register_prompt(PromptSpec::new("broken", "no body"))
        .await;
    assert!(matches!(result, Err(RegistryError::MissingPromptHandler(_))));
}

#[tokio::test]
async fn test_clone_shares_state() {
    let registry = Registry::new();
    let clone = registry.clone();

    registry.register_tool("m", spec("a", "dcim")).await.unwrap();
    assert_eq!(clone.tool_count().await, 1);
}

#[tokio::test]
async fn test_parameter_count_matches_spec() {
    let registry = Registry::new();
    let spec = ToolSpec::new("multi")
        .param(Param::of::<String>("one"))
        .param(Param::of::<Option<i64>>("two"))
        .param(Param::of::<bool>("three").default_value(false))
        .handler(|_, _| async move { Ok(json!(null)) });
    registry.register_tool("m", spec).await.unwrap();

    let tool = registry.get_tool("multi").await.unwrap();
    assert_eq!(tool.parameters.len(), 3);
}
