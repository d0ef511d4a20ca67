// ABOUTME: Client module - NetBox configuration, the NetBoxApi trait and its
// ABOUTME: reqwest implementation, and the shared-client provider.

mod config;
mod netbox;
mod provider;

pub use config::*;
pub use netbox::*;
pub use provider::*;
