//! Payloads served by the controller's debug endpoints.
//!
//! The controller serializes these straight from its internal registry, so field names follow
//! its conventions (a mix of `PascalCase` and `camelCase`). Unknown fields are ignored.
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of `/debug/registryz`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RegistryzService {
    #[serde(rename = "Attributes")]
    pub attributes: ServiceAttributes,
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub ports: Vec<ServicePort>,
    pub hostname: String,
    #[serde(rename = "clusterVIPs")]
    pub cluster_vips: ClusterVips,
    #[serde(rename = "Resolution")]
    pub resolution: i32,
    #[serde(rename = "MeshExternal")]
    pub mesh_external: bool,
    #[serde(rename = "ResourceVersion")]
    pub resource_version: String,
    #[serde(rename = "creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct ServiceAttributes {
    /// e.g. `Kubernetes`, `nacos`, `consul`
    pub service_registry: String,
    pub name: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "deserialize_null_as_default")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "deserialize_null_as_default")]
    pub export_to: BTreeMap<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ServicePort {
    pub name: String,
    pub port: u16,
    pub protocol: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct ClusterVips {
    /// cluster id -> addresses
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub addresses: BTreeMap<String, Vec<String>>,
}

/// One shard of `/debug/endpointShardz`, keyed there by service name then namespace.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct IstioEndpointShard {
    /// `<registry>/<cluster>` -> endpoints
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub shards: BTreeMap<String, Vec<IstioEndpoint>>,
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub service_accounts: BTreeMap<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct IstioEndpoint {
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub labels: BTreeMap<String, String>,
    pub address: String,
    pub service_port_name: String,
    pub service_account: String,
    pub network: String,
    pub locality: Value,
    pub endpoint_port: u32,
    pub lb_weight: u32,
    #[serde(rename = "TLSMode")]
    pub tls_mode: String,
    pub namespace: String,
    pub workload_name: String,
    pub host_name: String,
    pub sub_domain: String,
    pub health_status: i32,
    pub node_name: String,
}

/// The controller writes empty maps and lists as `null`.
fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// service name -> namespace -> shard
pub type ServiceEndpointShards = BTreeMap<String, BTreeMap<String, IstioEndpointShard>>;
