use std::{collections::HashSet, ffi::OsString, fmt, path::PathBuf, str::FromStr};

use higress_model::constants;
use serde::{Deserialize, Serialize};

/// Options of the kubernetes access layer.
///
/// Every field has a default, so a partial document deserializes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct K8sOptions {
    /// # `KUBECONFIG`
    ///
    /// Only used when running outside of the cluster.
    /// If unset, `~/.kube/config`. `$KUBECONFIG` is not consulted.
    pub kube_config: Option<PathBuf>,
    /// The single namespace the console manages.
    pub namespace: String,
    pub protected_namespaces: HashSet<String>,
    /// Forced onto every created or replaced Ingress.
    pub ingress_class_name: String,
    pub controller: ControllerOptions,
    /// Its existence marks in-cluster execution.
    pub service_account_token_path: PathBuf,
    pub access_token_path: PathBuf,
}

impl Default for K8sOptions {
    fn default() -> Self {
        Self {
            kube_config: None,
            namespace: constants::DEFAULT_NAMESPACE.to_string(),
            protected_namespaces: constants::DEFAULT_PROTECTED_NAMESPACES.iter().map(|ns| ns.to_string()).collect(),
            ingress_class_name: constants::DEFAULT_INGRESS_CLASS_NAME.to_string(),
            controller: ControllerOptions::default(),
            service_account_token_path: PathBuf::from(constants::POD_SERVICE_ACCOUNT_TOKEN_FILE_PATH),
            access_token_path: PathBuf::from(constants::CONTROLLER_ACCESS_TOKEN_FILE_PATH),
        }
    }
}

impl K8sOptions {
    /// The managed namespace and the configured protected ones.
    pub fn is_namespace_protected(&self, namespace: &str) -> bool {
        self.namespace == namespace || self.protected_namespaces.contains(namespace)
    }

    /// The configured kubeconfig, else the one under the home directory.
    pub fn kube_config_path(&self) -> Option<PathBuf> {
        match &self.kube_config {
            Some(path) => Some(path.clone()),
            None => default_kube_config_path(std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"))),
        }
    }
}

fn default_kube_config_path(home: Option<OsString>) -> Option<PathBuf> {
    home.filter(|home| !home.is_empty()).map(|home| PathBuf::from(home).join(constants::KUBE_CONFIG_DEFAULT_PATH))
}

/// Where and how to reach the controller's debug endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControllerOptions {
    /// Used in-cluster, together with [`K8sOptions::namespace`].
    pub service_name: String,
    /// Used outside of the cluster.
    pub service_host: String,
    pub service_port: u16,
    pub jwt_policy: JwtPolicy,
    /// Static token used outside of the cluster, empty means no `Authorization` header.
    pub access_token: Option<String>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            service_name: constants::DEFAULT_CONTROLLER_SERVICE_NAME.to_string(),
            service_host: constants::DEFAULT_CONTROLLER_SERVICE_HOST.to_string(),
            service_port: constants::DEFAULT_CONTROLLER_SERVICE_PORT,
            jwt_policy: JwtPolicy::default(),
            access_token: None,
        }
    }
}

/// Which mounted token authenticates controller calls in-cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JwtPolicy {
    /// The pod's own service account token.
    FirstParty,
    /// A separately projected access token.
    #[default]
    ThirdParty,
}

impl From<String> for JwtPolicy {
    fn from(value: String) -> Self {
        if value == constants::FIRST_PARTY_JWT {
            JwtPolicy::FirstParty
        } else {
            JwtPolicy::ThirdParty
        }
    }
}

impl From<JwtPolicy> for String {
    fn from(value: JwtPolicy) -> Self {
        value.to_string()
    }
}

impl FromStr for JwtPolicy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(JwtPolicy::from(s.to_string()))
    }
}

impl fmt::Display for JwtPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JwtPolicy::FirstParty => write!(f, "{}", constants::FIRST_PARTY_JWT),
            JwtPolicy::ThirdParty => write!(f, "{}", constants::THIRD_PARTY_JWT),
        }
    }
}
