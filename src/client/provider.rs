// ABOUTME: ClientProvider - lazy, thread-safe construction of the single
// ABOUTME: shared NetBoxClient, with reset and status introspection for tests.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use uuid::Uuid;

use super::{NetBoxClient, NetBoxConfig};
use crate::error::ClientError;

type ConfigSource = Box<dyn Fn() -> Result<NetBoxConfig, ClientError> + Send + Sync>;

/// Provides the one shared NetBox client for the process.
///
/// Construction is lazy: the first call to [`ClientProvider::get`] loads the
/// configuration, builds the client, and memoizes it. The critical section
/// covers only check-and-construct, so concurrent first calls produce exactly
/// one client. A failed load or construction is never cached - the next call
/// retries.
pub struct ClientProvider {
    source: ConfigSource,
    config: Mutex<Option<Arc<NetBoxConfig>>>,
    client: Mutex<Option<Arc<NetBoxClient>>>,
}

/// Introspection snapshot of the provider, without exposing the client.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderStatus {
    pub initialized: bool,
    pub client_id: Option<Uuid>,
}

impl ClientProvider {
    /// Provider that reads configuration from the environment.
    pub fn new() -> Self {
        Self::with_source(NetBoxConfig::from_env)
    }

    /// Provider with a fixed configuration, bypassing the environment.
    pub fn with_config(config: NetBoxConfig) -> Self {
        Self::with_source(move || Ok(config.clone()))
    }

    /// Provider with a custom configuration source.
    pub fn with_source(
        source: impl Fn() -> Result<NetBoxConfig, ClientError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: Box::new(source),
            config: Mutex::new(None),
            client: Mutex::new(None),
        }
    }

    /// The shared configuration, loaded once and memoized. A load failure
    /// propagates and is not cached.
    pub fn config(&self) -> Result<Arc<NetBoxConfig>, ClientError> {
        let mut slot = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(config) = slot.as_ref() {
            return Ok(config.clone());
        }
        let config = Arc::new((self.source)()?);
        *slot = Some(config.clone());
        Ok(config)
    }

    /// The shared client, constructed on first use.
    pub fn get(&self) -> Result<Arc<NetBoxClient>, ClientError> {
        let mut slot = self.client.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let config = self.config()?;
        let client = Arc::new(NetBoxClient::new(config)?);
        tracing::info!(client_id = %client.id(), "constructed shared NetBox client");
        *slot = Some(client.clone());
        Ok(client)
    }

    /// Clear the memoized client and configuration.
    ///
    /// Intended for test isolation only; not safe under concurrent
    /// production use, hence the warning.
    pub fn reset(&self) {
        tracing::warn!("resetting shared NetBox client");
        self.client
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        self.config
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    /// Whether a client exists, and its identity marker if so.
    pub fn status(&self) -> ProviderStatus {
        let slot = self.client.lock().unwrap_or_else(PoisonError::into_inner);
        ProviderStatus {
            initialized: slot.is_some(),
            client_id: slot.as_ref().map(|c| c.id()),
        }
    }
}

impl Default for ClientProvider {
    fn default() -> Self {
        Self::new()
    }
}
