// ABOUTME: Catalog module - built-in NetBox tool/prompt modules and the
// ABOUTME: loader that registers them all at startup.

mod dcim;
mod ipam;
mod loader;
mod prompts;
mod support;
mod system;
mod virtualization;

pub use loader::*;
