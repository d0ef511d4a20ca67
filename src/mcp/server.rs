// ABOUTME: McpServer - serves the registry over JSON-RPC 2.0, one JSON
// ABOUTME: object per line, on stdio or any AsyncBufRead/AsyncWrite pair.

use std::sync::Arc;

use serde_json::{Map, Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::{
    JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION, PromptGetParams, RpcError, ToolCallParams,
    text_content,
};
use crate::client::ClientProvider;
use crate::dispatch::{execute_prompt, execute_tool};
use crate::error::{DispatchError, McpError};
use crate::registry::Registry;

/// MCP server over a fully loaded registry.
///
/// The registry must be populated (via the catalog loader) before serving
/// begins; the server itself never registers anything.
pub struct McpServer {
    registry: Registry,
    provider: Arc<ClientProvider>,
}

impl McpServer {
    pub fn new(registry: Registry, provider: Arc<ClientProvider>) -> Self {
        Self { registry, provider }
    }

    /// Serve on stdin/stdout. Logs must go to stderr - stdout is the
    /// protocol channel.
    pub async fn serve_stdio(&self) -> Result<(), McpError> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve one JSON object per line until the reader is exhausted.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<(), McpError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<JsonRpcRequest>(line) {
                Ok(request) => self.handle(request).await,
                Err(error) => Some(JsonRpcResponse::failure(
                    Value::Null,
                    RpcError::parse_error(error.to_string()),
                )),
            };

            if let Some(response) = response {
                let json = serde_json::to_string(&response)?;
                writer.write_all(json.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }
        Ok(())
    }

    /// Handle a single request. Notifications produce no response.
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            tracing::debug!(method = %request.method, "ignoring notification");
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let response = match self.dispatch_method(&request.method, request.params).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        };
        Some(response)
    }

    async fn dispatch_method(
        &self,
        method: &str,
        params: Option<Value>,
    ) -> Result<Value, RpcError> {
        match method {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {},
                    "prompts": {}
                },
                "serverInfo": {
                    "name": "netbox-mcp",
                    "version": env!("CARGO_PKG_VERSION")
                }
            })),

            "ping" => Ok(json!({})),

            "tools/list" => {
                let tools: Vec<Value> = self
                    .registry
                    .describe_tools()
                    .await
                    .iter()
                    .map(|d| {
                        json!({
                            "name": d.name,
                            "description": d.description,
                            "inputSchema": d.input_schema(),
                        })
                    })
                    .collect();
                Ok(json!({ "tools": tools }))
            }

            "tools/call" => {
                let params: ToolCallParams = parse_params(params)?;
                let arguments = match params.arguments {
                    Some(Value::Object(map)) => map,
                    Some(Value::Null) | None => Map::new(),
                    Some(_) => {
                        return Err(RpcError::invalid_params("arguments must be an object"));
                    }
                };

                let client = self
                    .provider
                    .get()
                    .map_err(|e| RpcError::internal(e.to_string()))?;

                match execute_tool(&self.registry, &params.name, client, arguments).await {
                    Ok(result) => {
                        let text = serde_json::to_string_pretty(&result)
                            .unwrap_or_else(|_| result.to_string());
                        Ok(json!({
                            "content": [text_content(&text)],
                            "isError": false
                        }))
                    }
                    Err(DispatchError::ToolNotFound(name)) => {
                        Err(RpcError::invalid_params(format!("Tool not found: {name}")))
                    }
                    // Tool-body failures are results, not protocol errors.
                    Err(error) => Ok(json!({
                        "content": [text_content(&error.to_string())],
                        "isError": true
                    })),
                }
            }

            "prompts/list" => {
                let prompts: Vec<Value> = self
                    .registry
                    .describe_prompts()
                    .await
                    .iter()
                    .map(|d| json!({ "name": d.name, "description": d.description }))
                    .collect();
                Ok(json!({ "prompts": prompts }))
            }

            "prompts/get" => {
                let params: PromptGetParams = parse_params(params)?;
                let arguments: Map<String, Value> = params
                    .arguments
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect();

                let description = self
                    .registry
                    .describe_prompt(&params.name)
                    .await
                    .map(|d| d.description);

                match execute_prompt(&self.registry, &params.name, arguments).await {
                    Ok(text) => Ok(json!({
                        "description": description,
                        "messages": [{
                            "role": "user",
                            "content": { "type": "text", "text": text }
                        }]
                    })),
                    Err(DispatchError::PromptNotFound(name)) => {
                        Err(RpcError::invalid_params(format!("Prompt not found: {name}")))
                    }
                    Err(error) => Err(RpcError::internal(error.to_string())),
                }
            }

            other => Err(RpcError::method_not_found(other)),
        }
    }
}

fn parse_params<T: serde::de::DeserializeOwned>(params: Option<Value>) -> Result<T, RpcError> {
    let params = params.ok_or_else(|| RpcError::invalid_params("missing params"))?;
    serde_json::from_value(params).map_err(|e| RpcError::invalid_params(e.to_string()))
}
