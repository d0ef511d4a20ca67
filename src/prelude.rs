// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use netbox_mcp::prelude::*;` to get started quickly.

pub use crate::catalog::{CatalogModule, ModuleProvider, builtin_modules, load_all, load_modules};
pub use crate::client::{
    ClientProvider, NetBoxApi, NetBoxClient, NetBoxConfig, ProviderStatus, query_string,
};
pub use crate::dispatch::{execute_prompt, execute_tool};
pub use crate::error::{ClientError, DispatchError, McpError, NetBoxMcpError, RegistryError};
pub use crate::mcp::{
    JsonRpcRequest, JsonRpcResponse, McpServer, PROTOCOL_VERSION, RpcError, text_content,
};
pub use crate::registry::{
    PromptDescriptor, PromptHandler, PromptMetadata, PromptSpec, Registry, RegistryStats,
    ToolDescriptor, ToolHandler, ToolMetadata, ToolSpec,
};
pub use crate::schema::{DocSections, Param, ReturnInfo, display_type, parse_docstring};
