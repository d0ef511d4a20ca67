// ABOUTME: MCP module - JSON-RPC 2.0 types and the stdio server loop that
// ABOUTME: exposes the registry for discovery and dispatch.

mod server;
mod types;

pub use server::*;
pub use types::*;
