// ABOUTME: ToolSpec/PromptSpec builders and the immutable metadata records
// ABOUTME: the registry stores, including the boxed handler closures.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::{Map, Value};

use crate::client::NetBoxApi;
use crate::error::RegistryError;
use crate::schema::{DocSections, NO_DESCRIPTION, Param, ReturnInfo, first_line, parse_docstring};

/// Uniform call shape every tool is normalized to at registration time:
/// the injected client plus the caller's argument map.
pub type ToolHandler = Arc<
    dyn Fn(Arc<dyn NetBoxApi>, Map<String, Value>) -> BoxFuture<'static, anyhow::Result<Value>>
        + Send
        + Sync,
>;

/// Declarative description of one tool, built by catalog modules and
/// handed to the registry.
pub struct ToolSpec {
    name: String,
    category: String,
    description: Option<String>,
    doc: String,
    params: Vec<Param>,
    returns: ReturnInfo,
    handler: Option<ToolHandler>,
    source_file: &'static str,
}

impl ToolSpec {
    /// Start a spec for the named tool. Captures the caller's source file
    /// for discovery metadata.
    #[track_caller]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: "general".to_string(),
            description: None,
            doc: String::new(),
            params: Vec::new(),
            returns: ReturnInfo::any(),
            handler: None,
            source_file: std::panic::Location::caller().file(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category used for discovery filtering, e.g. "dcim".
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Explicit description override. Without one, the first line of the
    /// doc text is used.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Documentation block, parsed into sections at registration.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, returns: ReturnInfo) -> Self {
        self.returns = returns;
        self
    }

    /// The tool body. Receives the injected client and the forwarded
    /// argument map.
    pub fn handler<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Arc<dyn NetBoxApi>, Map<String, Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
    {
        self.handler = Some(Arc::new(move |client, args| f(client, args).boxed()));
        self
    }

    /// Finalize into an immutable metadata record under the given module
    /// name. Fails only when no handler was attached.
    pub(crate) fn build(self, module: &str) -> Result<ToolMetadata, RegistryError> {
        let handler = self
            .handler
            .ok_or_else(|| RegistryError::MissingToolHandler(self.name.clone()))?;

        let sections = parse_docstring(&self.doc);
        let description = self
            .description
            .or_else(|| first_line(&self.doc).map(str::to_string))
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        Ok(ToolMetadata {
            name: self.name,
            category: self.category,
            description,
            docstring: self.doc,
            sections,
            parameters: self.params,
            return_info: self.returns,
            module: module.to_string(),
            source_file: self.source_file.to_string(),
            handler,
        })
    }
}

/// One registered tool. Created at registration time, immutable thereafter.
/// The handler is the only live-callable reference and is never serialized.
pub struct ToolMetadata {
    pub name: String,
    pub category: String,
    pub description: String,
    pub docstring: String,
    pub sections: DocSections,
    pub parameters: Vec<Param>,
    pub return_info: ReturnInfo,
    pub module: String,
    pub source_file: String,
    pub(crate) handler: ToolHandler,
}

/// A prompt body - synchronous or asynchronous.
#[derive(Clone)]
pub enum PromptHandler {
    Sync(Arc<dyn Fn(Map<String, Value>) -> anyhow::Result<String> + Send + Sync>),
    Async(Arc<dyn Fn(Map<String, Value>) -> BoxFuture<'static, anyhow::Result<String>> + Send + Sync>),
}

impl PromptHandler {
    pub fn kind(&self) -> &'static str {
        match self {
            PromptHandler::Sync(_) => "sync",
            PromptHandler::Async(_) => "async",
        }
    }

    /// Call the handler, awaiting it when asynchronous.
    pub(crate) async fn invoke(&self, args: Map<String, Value>) -> anyhow::Result<String> {
        match self {
            PromptHandler::Sync(f) => f(args),
            PromptHandler::Async(f) => f(args).await,
        }
    }
}

/// Declarative description of one guided workflow prompt.
pub struct PromptSpec {
    name: String,
    description: String,
    doc: String,
    handler: Option<PromptHandler>,
}

impl PromptSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            doc: String::new(),
            handler: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn sync_handler(
        mut self,
        f: impl Fn(Map<String, Value>) -> anyhow::Result<String> + Send + Sync + 'static,
    ) -> Self {
        self.handler = Some(PromptHandler::Sync(Arc::new(f)));
        self
    }

    pub fn async_handler<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Map<String, Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
    {
        self.handler = Some(PromptHandler::Async(Arc::new(move |args| f(args).boxed())));
        self
    }

    pub(crate) fn build(self) -> Result<PromptMetadata, RegistryError> {
        let handler = self
            .handler
            .ok_or_else(|| RegistryError::MissingPromptHandler(self.name.clone()))?;

        Ok(PromptMetadata {
            name: self.name,
            description: self.description,
            docstring: self.doc,
            handler,
        })
    }
}

/// One registered prompt.
pub struct PromptMetadata {
    pub name: String,
    pub description: String,
    pub docstring: String,
    pub(crate) handler: PromptHandler,
}

impl PromptMetadata {
    /// Whether the body is sync or async, for discovery display.
    pub fn kind(&self) -> &'static str {
        self.handler.kind()
    }
}
