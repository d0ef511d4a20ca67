// ABOUTME: Tests for serialized descriptors - exact wire shape, handler
// ABOUTME: stripping, and JSON Schema generation.

use serde_json::{Value, json};

use super::*;
use crate::schema::{Param, ReturnInfo};

async fn sample_registry() -> Registry {
    let registry = Registry::new();
    let spec = ToolSpec::new("netbox_get_device")
        .category("dcim")
        .doc("Retrieve a device by name.\n\nArgs:\n    name: Device name.\n\nReturns:\n    The device object.")
        .param(Param::of::<String>("name").describe("Device name"))
        .param(Param::of::<Option<String>>("site").describe("Site slug filter"))
        .param(Param::of::<bool>("brief").default_value(false))
        .returns(ReturnInfo::of::<Value>("The device object"))
        .handler(|_, args| async move { Ok(Value::Object(args)) });
    registry.register_tool("catalog.dcim", spec).await.unwrap();

    let prompt = PromptSpec::new("onboarding", "Device onboarding checklist")
        .doc("Guided onboarding.")
        .sync_handler(|_| Ok(String::new()));
    registry.register_prompt(prompt).await.unwrap();

    registry
}

#[tokio::test]
async fn test_descriptor_wire_shape() {
    let registry = sample_registry().await;
    let descriptor = registry.describe_tool("netbox_get_device").await.unwrap();
    let json = serde_json::to_value(&descriptor).unwrap();

    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "category",
            "description",
            "docstring",
            "module",
            "name",
            "parameters",
            "return_info",
            "source_file",
        ]
    );

    assert_eq!(json["name"], "netbox_get_device");
    assert_eq!(json["description"], "Retrieve a device by name.");
    assert!(json["docstring"]["full"].as_str().unwrap().contains("Args:"));
    assert_eq!(json["docstring"]["parsed"]["args"], "name: Device name.");
    assert_eq!(json["return_info"]["type"], "Value");
    assert_eq!(json["module"], "catalog.dcim");
    assert!(json["source_file"].as_str().unwrap().ends_with(".rs"));
}

#[tokio::test]
async fn test_descriptor_never_contains_handler() {
    let registry = sample_registry().await;

    for descriptor in registry.describe_tools().await {
        let json = serde_json::to_value(&descriptor).unwrap();
        assert!(json.get("function").is_none());
        assert!(json.get("handler").is_none());
    }
    for descriptor in registry.describe_prompts().await {
        let json = serde_json::to_value(&descriptor).unwrap();
        assert!(json.get("function").is_none());
        assert!(json.get("handler").is_none());
        assert!(json.get("signature").is_none());
    }
}

#[tokio::test]
async fn test_describe_does_not_mutate_stored_entry() {
    let registry = sample_registry().await;

    let _ = registry.describe_tool("netbox_get_device").await.unwrap();
    // The stored entry still dispatches after serialization.
    let tool = registry.get_tool("netbox_get_device").await.unwrap();
    assert_eq!(tool.parameters.len(), 3);
}

#[tokio::test]
async fn test_parameter_wire_shape() {
    let registry = sample_registry().await;
    let descriptor = registry.describe_tool("netbox_get_device").await.unwrap();
    let json = serde_json::to_value(&descriptor).unwrap();

    assert_eq!(
        json["parameters"][0],
        json!({
            "name": "name",
            "type": "String",
            "required": true,
            "description": "Device name",
        })
    );
    assert_eq!(json["parameters"][1]["type"], "String");
    assert_eq!(json["parameters"][1]["required"], false);
    assert_eq!(json["parameters"][2]["default"], false);
}

#[tokio::test]
async fn test_input_schema_generation() {
    let registry = sample_registry().await;
    let descriptor = registry.describe_tool("netbox_get_device").await.unwrap();
    let schema = descriptor.input_schema();

    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["name"]["type"], "string");
    assert_eq!(schema["properties"]["site"]["type"], "string");
    assert_eq!(schema["properties"]["brief"]["type"], "boolean");
    assert_eq!(schema["properties"]["brief"]["default"], false);
    assert_eq!(schema["required"], json!(["name"]));
}

#[tokio::test]
async fn test_prompt_descriptor_shape() {
    let registry = sample_registry().await;
    let descriptor = registry.describe_prompt("onboarding").await.unwrap();
    let json = serde_json::to_value(&descriptor).unwrap();

    assert_eq!(json["name"], "onboarding");
    assert_eq!(json["kind"], "sync");
    assert_eq!(json["docstring"], "Guided onboarding.");
}
