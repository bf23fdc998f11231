use std::time::Duration;

use higress_model::{
    constants::{CONTROLLER_ENDPOINT_SHARDZ_PATH, CONTROLLER_REGISTRYZ_PATH},
    RegistryzService, ServiceEndpointShards,
};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;

use super::k8s::{connectivity::CredentialResolver, K8s};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client of the controller's debug endpoints, used for live service and endpoint introspection.
#[derive(Debug, Clone)]
pub struct ControllerClient {
    client: reqwest::Client,
    base_url: String,
    credentials: CredentialResolver,
}

impl ControllerClient {
    /// `base_url` is `scheme://host:port`, without a trailing slash.
    pub fn new(base_url: impl Into<String>, credentials: CredentialResolver) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            credentials,
        })
    }

    /// Reach the controller the way `k8s` resolves its address.
    pub fn from_k8s(k8s: &K8s) -> Result<Self> {
        let base_url = format!("http://{}:{}", k8s.controller_service_address(), k8s.options().controller.service_port);
        Self::new(base_url, k8s.credentials().clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_registered_services(&self) -> Result<Option<Vec<RegistryzService>>> {
        self.get_json(CONTROLLER_REGISTRYZ_PATH).await
    }

    /// Service name to shard key to shard.
    pub async fn fetch_service_endpoints(&self) -> Result<Option<ServiceEndpointShards>> {
        self.get_json(CONTROLLER_ENDPOINT_SHARDZ_PATH).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.client.get(&url);
        if let Some(token) = self.credentials.controller_token().await? {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        debug!("[Hi.Config] request controller {url}");
        let body = request.send().await?.error_for_status()?.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&body)?))
    }
}
