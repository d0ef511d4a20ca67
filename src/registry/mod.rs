// ABOUTME: Registry module - tool and prompt descriptors, the registry store,
// ABOUTME: and API-facing serialized views.

mod descriptor;
mod metadata;
mod store;

pub use descriptor::*;
pub use metadata::*;
pub use store::*;

#[cfg(test)]
mod descriptor_test;
#[cfg(test)]
mod store_test;
