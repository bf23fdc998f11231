use serde::{Deserialize, Serialize};

use kube::CustomResource;

/// Service registries the gateway bridges into its mesh, one entry per registry.
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[kube(kind = "McpBridge", group = "networking.higress.io", version = "v1", plural = "mcpbridges", namespaced, schema = "disabled", derive = "PartialEq")]
pub struct McpBridgeSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub registries: Vec<RegistryConfig>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    /// # Registry Type
    /// can be:
    /// - nacos / nacos2
    /// - zookeeper
    /// - consul
    /// - eureka
    /// - static
    /// - dns
    #[serde(rename = "type")]
    pub r#type: String,
    pub name: String,
    pub domain: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nacos_namespace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nacos_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nacos_refresh_interval: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zk_services_path: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consul_namespace: Option<String>,
    /// name of the secret holding registry credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_secret_name: Option<String>,
}
