//! Execution context detection and the credentials derived from it.
use std::{
    fmt,
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use kube::config::{KubeConfigOptions, Kubeconfig};
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    options::{JwtPolicy, K8sOptions},
};

type Probe = Box<dyn Fn(&Path) -> bool + Send + Sync>;

/// Whether the process runs as a workload inside the cluster.
///
/// Decided by the presence of the service account token file, checked once on first use and then
/// fixed for the lifetime of the value. Share it behind an [`Arc`].
pub struct Connectivity {
    marker: PathBuf,
    probe: Probe,
    in_cluster: OnceLock<bool>,
}

impl fmt::Debug for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connectivity").field("marker", &self.marker).field("in_cluster", &self.in_cluster.get()).finish()
    }
}

impl Connectivity {
    pub fn new(marker: impl Into<PathBuf>) -> Self {
        Self::with_probe(marker, |path| path.exists())
    }

    /// Use `probe` instead of a filesystem existence check.
    pub fn with_probe(marker: impl Into<PathBuf>, probe: impl Fn(&Path) -> bool + Send + Sync + 'static) -> Self {
        Self {
            marker: marker.into(),
            probe: Box::new(probe),
            in_cluster: OnceLock::new(),
        }
    }

    /// Already decided, the probe is never called.
    pub fn fixed(in_cluster: bool) -> Self {
        let connectivity = Self::with_probe(PathBuf::new(), |_| false);
        let _ = connectivity.in_cluster.set(in_cluster);
        connectivity
    }

    pub fn in_cluster(&self) -> bool {
        *self.in_cluster.get_or_init(|| {
            let in_cluster = (self.probe)(&self.marker);
            debug!("[Hi.Config] {} exists: {in_cluster}", self.marker.display());
            in_cluster
        })
    }
}

/// Build the api client matching the execution context.
///
/// In-cluster this uses the mounted service account, otherwise the kubeconfig at
/// [`K8sOptions::kube_config_path`].
pub async fn build_client(connectivity: &Connectivity, options: &K8sOptions) -> Result<kube::Client> {
    let config = if connectivity.in_cluster() {
        let config = kube::Config::incluster().map_err(|e| Error::configuration(None, e))?;
        info!("[Hi.Config] init kubernetes client in cluster");
        config
    } else {
        let path = options.kube_config_path().ok_or_else(|| Error::configuration(None, "no kubeconfig given and no home directory"))?;
        let kube_config = Kubeconfig::read_from(&path).map_err(|e| Error::configuration(Some(path.as_path()), e))?;
        let config = kube::Config::from_custom_kubeconfig(kube_config, &KubeConfigOptions::default()).await.map_err(|e| Error::configuration(Some(path.as_path()), e))?;
        info!("[Hi.Config] init kubernetes client by kubeconfig {}", path.display());
        config
    };
    kube::Client::try_from(config).map_err(|e| Error::configuration(options.kube_config.as_deref(), e))
}

/// Picks the bearer token for controller calls.
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    connectivity: Arc<Connectivity>,
    jwt_policy: JwtPolicy,
    service_account_token_path: PathBuf,
    access_token_path: PathBuf,
    access_token: Option<String>,
}

impl CredentialResolver {
    pub fn new(connectivity: Arc<Connectivity>, options: &K8sOptions) -> Self {
        Self {
            connectivity,
            jwt_policy: options.controller.jwt_policy,
            service_account_token_path: options.service_account_token_path.clone(),
            access_token_path: options.access_token_path.clone(),
            access_token: options.controller.access_token.clone(),
        }
    }

    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    /// The token file read in-cluster.
    pub fn token_path(&self) -> &Path {
        match self.jwt_policy {
            JwtPolicy::FirstParty => &self.service_account_token_path,
            JwtPolicy::ThirdParty => &self.access_token_path,
        }
    }

    /// `None` means the request goes out without an `Authorization` header.
    ///
    /// In-cluster an unreadable token file is an error.
    pub async fn controller_token(&self) -> Result<Option<String>> {
        let token = if self.connectivity.in_cluster() {
            let token = tokio::fs::read_to_string(self.token_path()).await?;
            token.trim().to_string()
        } else {
            self.access_token.clone().unwrap_or_default()
        };
        Ok(Some(token).filter(|t| !t.is_empty()))
    }
}
