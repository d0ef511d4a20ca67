// ABOUTME: API-facing serialized views of registry entries - metadata copies
// ABOUTME: with handlers stripped, plus JSON Schema generation for MCP.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Value, json};

use super::{PromptMetadata, ToolMetadata};
use crate::schema::{DocSections, Param, ReturnInfo};

/// Raw and parsed documentation, as transported to external callers.
#[derive(Debug, Clone, Serialize)]
pub struct Docstring {
    pub full: String,
    pub parsed: DocSections,
}

/// Transportable copy of a tool's metadata. Never carries the handler.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub category: String,
    pub description: String,
    pub docstring: Docstring,
    pub parameters: Vec<Param>,
    pub return_info: ReturnInfo,
    pub module: String,
    pub source_file: String,
}

impl ToolDescriptor {
    /// Copy the serializable fields out of a stored entry.
    pub fn from_metadata(metadata: &ToolMetadata) -> Self {
        Self {
            name: metadata.name.clone(),
            category: metadata.category.clone(),
            description: metadata.description.clone(),
            docstring: Docstring {
                full: metadata.docstring.clone(),
                parsed: metadata.sections.clone(),
            },
            parameters: metadata.parameters.clone(),
            return_info: metadata.return_info.clone(),
            module: metadata.module.clone(),
            source_file: metadata.source_file.clone(),
        }
    }

    /// Render the parameter list as a JSON Schema object for MCP
    /// `tools/list`. The schema is advisory - dispatch does not enforce it.
    pub fn input_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &self.parameters {
            let mut property = serde_json::Map::new();
            if let Some(ty) = json_type(&param.ty) {
                property.insert("type".to_string(), json!(ty));
            }
            if let Some(description) = &param.description {
                property.insert("description".to_string(), json!(description));
            }
            if let Some(default) = &param.default {
                property.insert("default".to_string(), default.clone());
            }
            properties.insert(param.name.clone(), Value::Object(property));

            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// Map a rendered Rust type to a JSON Schema type. `Any` has no constraint.
fn json_type(ty: &str) -> Option<&'static str> {
    match ty {
        "String" | "str" => Some("string"),
        "bool" => Some("boolean"),
        "f32" | "f64" => Some("number"),
        "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" | "u64" | "usize" | "isize" => {
            Some("integer")
        }
        "Value" => Some("object"),
        _ if ty.starts_with("Vec<") => Some("array"),
        _ if ty.starts_with("Map<") || ty.starts_with("HashMap<") => Some("object"),
        _ => None,
    }
}

/// Transportable copy of a prompt's metadata. The handler and its call
/// signature are not representable on the wire; only the body kind is kept.
#[derive(Debug, Clone, Serialize)]
pub struct PromptDescriptor {
    pub name: String,
    pub description: String,
    pub docstring: String,
    pub kind: &'static str,
}

impl PromptDescriptor {
    pub fn from_metadata(metadata: &PromptMetadata) -> Self {
        Self {
            name: metadata.name.clone(),
            description: metadata.description.clone(),
            docstring: metadata.docstring.clone(),
            kind: metadata.kind(),
        }
    }
}

/// Aggregate registry counts for discovery endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryStats {
    pub total_tools: usize,
    pub total_prompts: usize,
    pub categories: HashMap<String, usize>,
}
