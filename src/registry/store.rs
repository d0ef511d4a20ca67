// ABOUTME: Implements the Registry - a thread-safe container owning tool and
// ABOUTME: prompt metadata, with lookup, filtering, stats, and serialization.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{PromptDescriptor, PromptMetadata, PromptSpec, RegistryStats, ToolDescriptor, ToolMetadata, ToolSpec};
use crate::error::RegistryError;

/// A thread-safe registry of tools and prompts.
///
/// Populated once during startup by the catalog loader, then read-only.
/// Lookups on unknown names return `None` rather than erroring, keeping
/// discovery surfaces crash-free under malformed input.
#[derive(Default)]
pub struct Registry {
    tools: Arc<RwLock<HashMap<String, Arc<ToolMetadata>>>>,
    prompts: Arc<RwLock<HashMap<String, Arc<PromptMetadata>>>>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under the given module name.
    ///
    /// Re-registration under an existing name silently overwrites - last
    /// registration wins. Modules may legitimately redefine a tool for
    /// legacy-compatibility aliases.
    pub async fn register_tool(&self, module: &str, spec: ToolSpec) -> Result<(), RegistryError> {
        let metadata = spec.build(module)?;
        let mut tools = self.tools.write().await;
        if let Some(previous) = tools.insert(metadata.name.clone(), Arc::new(metadata)) {
            tracing::debug!(tool = %previous.name, "replaced existing tool registration");
        }
        Ok(())
    }

    /// Register a prompt.
    pub async fn register_prompt(&self, spec: PromptSpec) -> Result<(), RegistryError> {
        let metadata = spec.build()?;
        let mut prompts = self.prompts.write().await;
        if let Some(previous) = prompts.insert(metadata.name.clone(), Arc::new(metadata)) {
            tracing::debug!(prompt = %previous.name, "replaced existing prompt registration");
        }
        Ok(())
    }

    /// Get a tool by name.
    pub async fn get_tool(&self, name: &str) -> Option<Arc<ToolMetadata>> {
        let tools = self.tools.read().await;
        tools.get(name).cloned()
    }

    /// Get a prompt by name.
    pub async fn get_prompt(&self, name: &str) -> Option<Arc<PromptMetadata>> {
        let prompts = self.prompts.read().await;
        prompts.get(name).cloned()
    }

    /// List all tool names, sorted alphabetically.
    pub async fn tool_names(&self) -> Vec<String> {
        let tools = self.tools.read().await;
        let mut names: Vec<_> = tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// List all prompt names, sorted alphabetically.
    pub async fn prompt_names(&self) -> Vec<String> {
        let prompts = self.prompts.read().await;
        let mut names: Vec<_> = prompts.keys().cloned().collect();
        names.sort();
        names
    }

    /// All tools whose category matches exactly (case-sensitive).
    pub async fn tools_in_category(&self, category: &str) -> Vec<Arc<ToolMetadata>> {
        let tools = self.tools.read().await;
        let mut matching: Vec<_> = tools
            .values()
            .filter(|t| t.category == category)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));
        matching
    }

    /// Number of registered tools.
    pub async fn tool_count(&self) -> usize {
        let tools = self.tools.read().await;
        tools.len()
    }

    /// Number of registered prompts.
    pub async fn prompt_count(&self) -> usize {
        let prompts = self.prompts.read().await;
        prompts.len()
    }

    /// Aggregate counts: totals plus a per-category histogram, computed in
    /// a single pass.
    pub async fn stats(&self) -> RegistryStats {
        let tools = self.tools.read().await;
        let mut categories: HashMap<String, usize> = HashMap::new();
        for tool in tools.values() {
            *categories.entry(tool.category.clone()).or_insert(0) += 1;
        }
        RegistryStats {
            total_tools: tools.len(),
            total_prompts: self.prompts.read().await.len(),
            categories,
        }
    }

    /// Serializable view of one tool, without its handler. The stored entry
    /// is copied, never mutated.
    pub async fn describe_tool(&self, name: &str) -> Option<ToolDescriptor> {
        let tools = self.tools.read().await;
        tools.get(name).map(|t| ToolDescriptor::from_metadata(t))
    }

    /// Serializable views of every tool, sorted by name.
    pub async fn describe_tools(&self) -> Vec<ToolDescriptor> {
        let tools = self.tools.read().await;
        let mut descriptors: Vec<_> = tools
            .values()
            .map(|t| ToolDescriptor::from_metadata(t))
            .collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    /// Serializable view of one prompt, without its handler.
    pub async fn describe_prompt(&self, name: &str) -> Option<PromptDescriptor> {
        let prompts = self.prompts.read().await;
        prompts.get(name).map(|p| PromptDescriptor::from_metadata(p))
    }

    /// Serializable views of every prompt, sorted by name.
    pub async fn describe_prompts(&self) -> Vec<PromptDescriptor> {
        let prompts = self.prompts.read().await;
        let mut descriptors: Vec<_> = prompts
            .values()
            .map(|p| PromptDescriptor::from_metadata(p))
            .collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        Self {
            tools: Arc::clone(&self.tools),
            prompts: Arc::clone(&self.prompts),
        }
    }
}
