use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use higress_config::{JwtPolicy, K8sOptions};
use tracing::info;

/// Inspect and manage the gateway's kubernetes objects
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// toml file holding the options, flags below override it
    #[arg(short, long, env = "HIGRESS_CONSOLE_CONFIG")]
    pub config: Option<PathBuf>,
    /// kubeconfig used outside of the cluster
    #[arg(long, env = "HIGRESS_CONSOLE_KUBE_CONFIG")]
    pub kube_config: Option<PathBuf>,
    /// the namespace the console manages
    #[arg(short, long, env = "HIGRESS_CONSOLE_NAMESPACE")]
    pub namespace: Option<String>,
    #[arg(long, env = "HIGRESS_CONSOLE_PROTECTED_NAMESPACES", value_delimiter = ',')]
    pub protected_namespaces: Vec<String>,
    #[arg(long, env = "HIGRESS_CONSOLE_INGRESS_CLASS")]
    pub ingress_class: Option<String>,
    #[arg(long, env = "HIGRESS_CONSOLE_CONTROLLER_SERVICE_NAME")]
    pub controller_service_name: Option<String>,
    #[arg(long, env = "HIGRESS_CONSOLE_CONTROLLER_SERVICE_HOST")]
    pub controller_service_host: Option<String>,
    #[arg(long, env = "HIGRESS_CONSOLE_CONTROLLER_SERVICE_PORT")]
    pub controller_service_port: Option<u16>,
    /// `first-party-jwt` or `third-party-jwt`
    #[arg(long, env = "HIGRESS_CONSOLE_CONTROLLER_JWT_POLICY")]
    pub controller_jwt_policy: Option<JwtPolicy>,
    #[arg(long, env = "HIGRESS_CONSOLE_CONTROLLER_ACCESS_TOKEN", hide_env_values = true)]
    pub controller_access_token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// list the managed objects of a kind, sorted by name
    List {
        #[arg(value_enum)]
        kind: Kind,
        /// ingresses of this domain only
        #[arg(long)]
        domain: Option<String>,
        /// secrets of this type only, e.g. `kubernetes.io/tls`
        #[arg(long = "type")]
        secret_type: Option<String>,
        #[arg(long)]
        plugin_name: Option<String>,
        #[arg(long)]
        plugin_version: Option<String>,
        #[arg(long)]
        built_in: Option<bool>,
    },
    Get {
        #[arg(value_enum)]
        kind: Kind,
        name: String,
    },
    Delete {
        #[arg(value_enum)]
        kind: Kind,
        name: String,
    },
    /// services registered in the controller
    Services,
    /// endpoint shards known to the controller
    Endpoints,
    /// whether the console refuses destructive operations on a namespace
    Protected { namespace: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Ingress,
    ConfigMap,
    Secret,
    McpBridge,
    WasmPlugin,
}

impl Args {
    /// The config file if any, then the flags on top of it.
    pub fn load_options(&self) -> Result<K8sOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => {
                info!("load options from {}", path.display());
                toml::from_str::<K8sOptions>(&std::fs::read_to_string(path)?)?
            }
            None => K8sOptions::default(),
        };
        if let Some(kube_config) = &self.kube_config {
            options.kube_config = Some(kube_config.clone());
        }
        if let Some(namespace) = &self.namespace {
            options.namespace.clone_from(namespace);
        }
        if !self.protected_namespaces.is_empty() {
            options.protected_namespaces = self.protected_namespaces.iter().cloned().collect();
        }
        if let Some(ingress_class) = &self.ingress_class {
            options.ingress_class_name.clone_from(ingress_class);
        }
        let controller = &mut options.controller;
        if let Some(service_name) = &self.controller_service_name {
            controller.service_name.clone_from(service_name);
        }
        if let Some(service_host) = &self.controller_service_host {
            controller.service_host.clone_from(service_host);
        }
        if let Some(service_port) = self.controller_service_port {
            controller.service_port = service_port;
        }
        if let Some(jwt_policy) = self.controller_jwt_policy {
            controller.jwt_policy = jwt_policy;
        }
        if let Some(access_token) = &self.controller_access_token {
            controller.access_token = Some(access_token.clone());
        }
        Ok(options)
    }
}
