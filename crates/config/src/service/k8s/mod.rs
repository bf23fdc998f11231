use std::sync::Arc;

use k8s_openapi::NamespaceResourceScope;

use crate::{error::Result, options::K8sOptions};

pub mod connectivity;
pub mod create;
pub mod delete;
pub mod resource;
pub mod retrieve;
pub mod selector;
pub mod update;

use connectivity::{build_client, Connectivity, CredentialResolver};

/// Kubernetes backend bound to the single namespace the console manages.
#[derive(Clone)]
pub struct K8s {
    pub namespace: Arc<str>,
    client: kube::Client,
    options: Arc<K8sOptions>,
    credentials: CredentialResolver,
}

impl K8s {
    pub fn new(client: kube::Client, options: K8sOptions, connectivity: Arc<Connectivity>) -> Self {
        let credentials = CredentialResolver::new(connectivity, &options);
        Self {
            namespace: options.namespace.as_str().into(),
            client,
            options: Arc::new(options),
            credentials,
        }
    }

    /// Detect the execution context once and build the matching client.
    pub async fn from_options(options: K8sOptions) -> Result<Self> {
        let connectivity = Arc::new(Connectivity::new(&options.service_account_token_path));
        let client = build_client(&connectivity, &options).await?;
        Ok(Self::new(client, options, connectivity))
    }

    pub fn options(&self) -> &K8sOptions {
        &self.options
    }

    pub fn credentials(&self) -> &CredentialResolver {
        &self.credentials
    }

    pub fn in_cluster(&self) -> bool {
        self.credentials.connectivity().in_cluster()
    }

    pub fn get_namespace_api<T: kube::Resource<Scope = NamespaceResourceScope>>(&self) -> kube::Api<T>
    where
        <T as kube::Resource>::DynamicType: Default,
    {
        kube::Api::namespaced(self.client.clone(), &self.namespace)
    }

    /// The managed namespace and the configured protected ones.
    ///
    /// Only a predicate: refusing destructive operations is up to the caller.
    pub fn is_namespace_protected(&self, namespace: &str) -> bool {
        self.options.is_namespace_protected(namespace)
    }

    /// `<service>.<namespace>` in-cluster, the configured host otherwise.
    pub fn controller_service_address(&self) -> String {
        if self.in_cluster() {
            format!("{}.{}", self.options.controller.service_name, self.namespace)
        } else {
            self.options.controller.service_host.clone()
        }
    }
}
