use std::fmt::Debug;

use higress_model::{
    constants::{RESOURCE_DEFINER_KEY, RESOURCE_DEFINER_VALUE},
    McpBridge, WasmPlugin,
};
use k8s_openapi::{
    api::{
        core::v1::{ConfigMap, Secret},
        networking::v1::Ingress,
    },
    NamespaceResourceScope,
};
use kube::{Resource, ResourceExt};
use serde::{de::DeserializeOwned, Serialize};

use crate::options::K8sOptions;

/// A kind the console manages in its namespace.
///
/// Built-in kinds come from `k8s-openapi`, custom kinds are derived with `kube::CustomResource`;
/// both reach the api server through the same typed `kube::Api`.
pub trait ManagedResource: Resource<Scope = NamespaceResourceScope, DynamicType = ()> + Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Kind specific adjustments applied before every create or replace.
    fn render(&mut self, _options: &K8sOptions) {}

    fn kind_name() -> String {
        Self::kind(&()).to_string()
    }
}

impl ManagedResource for Ingress {
    fn render(&mut self, options: &K8sOptions) {
        self.spec.get_or_insert_with(Default::default).ingress_class_name = Some(options.ingress_class_name.clone());
    }
}

impl ManagedResource for ConfigMap {}

impl ManagedResource for Secret {}

impl ManagedResource for McpBridge {}

impl ManagedResource for WasmPlugin {}

/// Stamp the ownership label and pin the object into `namespace`, keeping other labels.
pub(crate) fn render_default<K: ManagedResource>(object: &mut K, namespace: &str, options: &K8sOptions) {
    object.render(options);
    object.labels_mut().insert(RESOURCE_DEFINER_KEY.to_string(), RESOURCE_DEFINER_VALUE.to_string());
    object.meta_mut().namespace = Some(namespace.to_string());
}

/// Ascending by name, objects without a name first.
pub(crate) fn sort_by_name<K: Resource>(objects: &mut [K]) {
    objects.sort_by(|a, b| a.meta().name.cmp(&b.meta().name));
}
