// ABOUTME: Catalog loader - walks the built-in module list and registers
// ABOUTME: every spec, isolating failures so one broken module cannot block
// ABOUTME: discovery of the rest.

use crate::registry::{PromptSpec, Registry, ToolSpec};

/// What a catalog module yields: tool specs or prompt specs.
#[derive(Clone, Copy)]
pub enum ModuleProvider {
    Tools(fn() -> anyhow::Result<Vec<ToolSpec>>),
    Prompts(fn() -> anyhow::Result<Vec<PromptSpec>>),
}

/// One loadable catalog module.
#[derive(Clone, Copy)]
pub struct CatalogModule {
    pub name: &'static str,
    pub provider: ModuleProvider,
}

/// The built-in catalog.
pub fn builtin_modules() -> Vec<CatalogModule> {
    vec![
        CatalogModule {
            name: "catalog.dcim",
            provider: ModuleProvider::Tools(super::dcim::tools),
        },
        CatalogModule {
            name: "catalog.ipam",
            provider: ModuleProvider::Tools(super::ipam::tools),
        },
        CatalogModule {
            name: "catalog.virtualization",
            provider: ModuleProvider::Tools(super::virtualization::tools),
        },
        CatalogModule {
            name: "catalog.system",
            provider: ModuleProvider::Tools(super::system::tools),
        },
        CatalogModule {
            name: "catalog.prompts",
            provider: ModuleProvider::Prompts(super::prompts::prompts),
        },
    ]
}

/// Load every built-in module into the registry. Must complete before any
/// discovery or dispatch call is served.
pub async fn load_all(registry: &Registry) -> Vec<String> {
    load_modules(registry, &builtin_modules()).await
}

/// Load the given modules, returning the names of those that loaded
/// successfully. A failing module is logged and skipped - it never aborts
/// the walk or the process.
pub async fn load_modules(registry: &Registry, modules: &[CatalogModule]) -> Vec<String> {
    let mut loaded = Vec::new();

    for module in modules {
        match load_module(registry, module).await {
            Ok(count) => {
                tracing::info!(module = module.name, count, "loaded catalog module");
                loaded.push(module.name.to_string());
            }
            Err(error) => {
                tracing::error!(module = module.name, %error, "failed to load catalog module");
            }
        }
    }

    loaded
}

async fn load_module(registry: &Registry, module: &CatalogModule) -> anyhow::Result<usize> {
    match module.provider {
        ModuleProvider::Tools(provider) => {
            let specs = provider()?;
            let count = specs.len();
            for spec in specs {
                registry.register_tool(module.name, spec).await?;
            }
            Ok(count)
        }
        ModuleProvider::Prompts(provider) => {
            let specs = provider()?;
            let count = specs.len();
            for spec in specs {
                registry.register_prompt(spec).await?;
            }
            Ok(count)
        }
    }
}
