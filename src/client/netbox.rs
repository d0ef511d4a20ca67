// ABOUTME: NetBoxApi trait and the reqwest-backed NetBoxClient implementing
// ABOUTME: CRUD operations against the NetBox REST API.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::NetBoxConfig;
use crate::error::ClientError;

/// Uniform interface to the NetBox REST API.
///
/// Tool handlers receive this trait rather than a concrete client so tests
/// can substitute a mock.
#[async_trait]
pub trait NetBoxApi: Send + Sync {
    /// Fetch a single object by numeric ID, e.g. `get("dcim/devices", 42)`.
    async fn get(&self, endpoint: &str, id: u64) -> Result<Value, ClientError>;

    /// List objects with query-string filters.
    async fn list(&self, endpoint: &str, filters: &Map<String, Value>) -> Result<Value, ClientError>;

    /// Create an object.
    async fn create(&self, endpoint: &str, payload: Value) -> Result<Value, ClientError>;

    /// Partially update an object.
    async fn update(&self, endpoint: &str, id: u64, payload: Value) -> Result<Value, ClientError>;

    /// Delete an object.
    async fn delete(&self, endpoint: &str, id: u64) -> Result<Value, ClientError>;

    /// Fetch `/api/status/`.
    async fn status(&self) -> Result<Value, ClientError>;
}

/// HTTP client for a NetBox instance.
pub struct NetBoxClient {
    config: Arc<NetBoxConfig>,
    http: reqwest::Client,
    id: Uuid,
}

impl NetBoxClient {
    /// Build a client from configuration. Fails if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: Arc<NetBoxConfig>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        Ok(Self {
            config,
            http,
            id: Uuid::new_v4(),
        })
    }

    /// Opaque identity marker for this client instance.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &NetBoxConfig {
        &self.config
    }

    async fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}/{}", self.config.url, path);
        tracing::debug!(%method, %url, "netbox request");

        let mut request = self
            .http
            .request(method, &url)
            .header("Authorization", format!("Token {}", self.config.token))
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        Ok(response.json().await?)
    }
}

/// Build an `a=1&b=two` query string from a filter map, percent-encoding
/// both keys and values. String values are used verbatim; other values use
/// their JSON rendering.
pub fn query_string(filters: &Map<String, Value>) -> String {
    filters
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&rendered)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[async_trait]
impl NetBoxApi for NetBoxClient {
    async fn get(&self, endpoint: &str, id: u64) -> Result<Value, ClientError> {
        let path = format!("api/{}/{}/", endpoint, id);
        self.request(reqwest::Method::GET, &path, None).await
    }

    async fn list(&self, endpoint: &str, filters: &Map<String, Value>) -> Result<Value, ClientError> {
        let mut path = format!("api/{}/", endpoint);
        if !filters.is_empty() {
            path.push('?');
            path.push_str(&query_string(filters));
        }
        self.request(reqwest::Method::GET, &path, None).await
    }

    async fn create(&self, endpoint: &str, payload: Value) -> Result<Value, ClientError> {
        let path = format!("api/{}/", endpoint);
        self.request(reqwest::Method::POST, &path, Some(payload)).await
    }

    async fn update(&self, endpoint: &str, id: u64, payload: Value) -> Result<Value, ClientError> {
        let path = format!("api/{}/{}/", endpoint, id);
        self.request(reqwest::Method::PATCH, &path, Some(payload)).await
    }

    async fn delete(&self, endpoint: &str, id: u64) -> Result<Value, ClientError> {
        let path = format!("api/{}/{}/", endpoint, id);
        self.request(reqwest::Method::DELETE, &path, None).await
    }

    async fn status(&self) -> Result<Value, ClientError> {
        self.request(reqwest::Method::GET, "api/status/", None).await
    }
}
