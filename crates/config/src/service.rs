/// Controller debug endpoints
pub mod controller;
/// Kubernetes backend
pub mod k8s;
/// Route orchestration over ingresses
pub mod route;

use futures_util::Future;
use higress_model::{constants::SECRET_TYPE_FIELD, McpBridge, WasmPlugin};
use k8s_openapi::api::{
    core::v1::{ConfigMap, Secret},
    networking::v1::Ingress,
};

use crate::error::Result;

pub use k8s::{
    resource::ManagedResource,
    selector::{build_domain_label_selector, build_field_selector, WasmPluginQuery},
};

/// Reads of managed objects.
///
/// Every listing is scoped to the objects carrying the ownership label and comes back sorted by name.
pub trait Retrieve: Sync + Send {
    /// `label_selectors` are ANDed after the ownership fragment.
    fn list_resources<K: ManagedResource>(&self, label_selectors: &[String], field_selector: Option<&str>) -> impl Future<Output = Result<Vec<K>>> + Send;
    /// `None` when the object does not exist.
    fn read_resource<K: ManagedResource>(&self, name: &str) -> impl Future<Output = Result<Option<K>>> + Send;

    fn list_ingress(&self) -> impl Future<Output = Result<Vec<Ingress>>> + Send {
        self.list_resources::<Ingress>(&[], None)
    }
    fn list_ingress_by_domain(&self, domain: &str) -> impl Future<Output = Result<Vec<Ingress>>> + Send {
        async move { self.list_resources::<Ingress>(&[build_domain_label_selector(domain)], None).await }
    }
    fn read_ingress(&self, name: &str) -> impl Future<Output = Result<Option<Ingress>>> + Send {
        self.read_resource::<Ingress>(name)
    }

    fn list_config_map(&self) -> impl Future<Output = Result<Vec<ConfigMap>>> + Send {
        self.list_resources::<ConfigMap>(&[], None)
    }
    fn read_config_map(&self, name: &str) -> impl Future<Output = Result<Option<ConfigMap>>> + Send {
        self.read_resource::<ConfigMap>(name)
    }

    /// An absent or empty `secret_type` lists secrets of every type.
    fn list_secret(&self, secret_type: Option<&str>) -> impl Future<Output = Result<Vec<Secret>>> + Send {
        async move {
            let field_selector = secret_type.filter(|t| !t.is_empty()).map(|t| build_field_selector(SECRET_TYPE_FIELD, t));
            self.list_resources::<Secret>(&[], field_selector.as_deref()).await
        }
    }
    fn read_secret(&self, name: &str) -> impl Future<Output = Result<Option<Secret>>> + Send {
        self.read_resource::<Secret>(name)
    }

    fn list_mcp_bridge(&self) -> impl Future<Output = Result<Vec<McpBridge>>> + Send {
        self.list_resources::<McpBridge>(&[], None)
    }
    fn read_mcp_bridge(&self, name: &str) -> impl Future<Output = Result<Option<McpBridge>>> + Send {
        self.read_resource::<McpBridge>(name)
    }

    fn list_wasm_plugin(&self, query: &WasmPluginQuery) -> impl Future<Output = Result<Vec<WasmPlugin>>> + Send {
        async move { self.list_resources::<WasmPlugin>(&query.fragments(), None).await }
    }
    fn read_wasm_plugin(&self, name: &str) -> impl Future<Output = Result<Option<WasmPlugin>>> + Send {
        self.read_resource::<WasmPlugin>(name)
    }
}

/// Writes of new objects. The ownership label is stamped on the way out.
pub trait Create: Sync + Send {
    fn create_resource<K: ManagedResource>(&self, object: K) -> impl Future<Output = Result<K>> + Send;

    fn create_ingress(&self, ingress: Ingress) -> impl Future<Output = Result<Ingress>> + Send {
        self.create_resource(ingress)
    }
    fn create_config_map(&self, config_map: ConfigMap) -> impl Future<Output = Result<ConfigMap>> + Send {
        self.create_resource(config_map)
    }
    fn create_secret(&self, secret: Secret) -> impl Future<Output = Result<Secret>> + Send {
        self.create_resource(secret)
    }
    fn create_mcp_bridge(&self, mcp_bridge: McpBridge) -> impl Future<Output = Result<McpBridge>> + Send {
        self.create_resource(mcp_bridge)
    }
    fn create_wasm_plugin(&self, wasm_plugin: WasmPlugin) -> impl Future<Output = Result<WasmPlugin>> + Send {
        self.create_resource(wasm_plugin)
    }
}

/// Full replacement of existing objects, keyed by `metadata.name`.
pub trait Update: Sync + Send {
    fn replace_resource<K: ManagedResource>(&self, object: K) -> impl Future<Output = Result<K>> + Send;

    fn replace_ingress(&self, ingress: Ingress) -> impl Future<Output = Result<Ingress>> + Send {
        self.replace_resource(ingress)
    }
    fn replace_config_map(&self, config_map: ConfigMap) -> impl Future<Output = Result<ConfigMap>> + Send {
        self.replace_resource(config_map)
    }
    fn replace_secret(&self, secret: Secret) -> impl Future<Output = Result<Secret>> + Send {
        self.replace_resource(secret)
    }
    fn replace_mcp_bridge(&self, mcp_bridge: McpBridge) -> impl Future<Output = Result<McpBridge>> + Send {
        self.replace_resource(mcp_bridge)
    }
    fn replace_wasm_plugin(&self, wasm_plugin: WasmPlugin) -> impl Future<Output = Result<WasmPlugin>> + Send {
        self.replace_resource(wasm_plugin)
    }
}

/// Idempotent deletes: removing an object that is already gone succeeds.
pub trait Delete: Sync + Send {
    fn delete_resource<K: ManagedResource>(&self, name: &str) -> impl Future<Output = Result<()>> + Send;

    fn delete_ingress(&self, name: &str) -> impl Future<Output = Result<()>> + Send {
        self.delete_resource::<Ingress>(name)
    }
    fn delete_config_map(&self, name: &str) -> impl Future<Output = Result<()>> + Send {
        self.delete_resource::<ConfigMap>(name)
    }
    fn delete_secret(&self, name: &str) -> impl Future<Output = Result<()>> + Send {
        self.delete_resource::<Secret>(name)
    }
    fn delete_mcp_bridge(&self, name: &str) -> impl Future<Output = Result<()>> + Send {
        self.delete_resource::<McpBridge>(name)
    }
    fn delete_wasm_plugin(&self, name: &str) -> impl Future<Output = Result<()>> + Send {
        self.delete_resource::<WasmPlugin>(name)
    }
}

