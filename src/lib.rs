// ABOUTME: Root module for netbox-mcp - NetBox tool registry and MCP server.
// ABOUTME: Re-exports all public types from submodules.

pub mod catalog;
pub mod client;
pub mod dispatch;
pub mod error;
pub mod mcp;
pub mod prelude;
pub mod registry;
pub mod schema;

pub use error::NetBoxMcpError;
