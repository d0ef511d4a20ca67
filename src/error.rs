// ABOUTME: Defines all error types for the netbox-mcp library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under NetBoxMcpError.

/// Top-level error type for the netbox-mcp library.
#[derive(Debug, thiserror::Error)]
pub enum NetBoxMcpError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("MCP error: {0}")]
    Mcp(#[from] McpError),
}

/// Errors from the NetBox API client and its configuration.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Errors from registry operations.
///
/// Lookups never produce these - a missing name is `None`, not an error.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Tool '{0}' registered without a handler")]
    MissingToolHandler(String),

    #[error("Prompt '{0}' registered without a handler")]
    MissingPromptHandler(String),
}

/// Errors from tool and prompt dispatch.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    #[error("Execution failed: {0}")]
    Execution(anyhow::Error),
}

/// Errors from the MCP server transport.
#[derive(Debug, thiserror::Error)]
pub enum McpError {
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
