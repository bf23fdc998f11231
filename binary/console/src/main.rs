use higress_config::{
    service::{Delete, Retrieve, WasmPluginQuery},
    ControllerClient, K8s,
};
use serde_json::{json, Value};

use crate::clap::{Command, Kind};

pub mod clap;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    // stdout carries the json output
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(EnvFilter::from_default_env()).init();
    let args = <crate::clap::Args as ::clap::Parser>::parse();
    tracing::debug!("console started with args: {:?}", args);
    let options = args.load_options()?;

    let output = match args.command {
        Command::Protected { namespace } => json!({ "namespace": namespace, "protected": options.is_namespace_protected(&namespace) }),
        command => {
            let k8s = K8s::from_options(options).await?;
            run(&k8s, command).await?
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run(k8s: &K8s, command: Command) -> Result<Value, Box<dyn std::error::Error>> {
    let output = match command {
        Command::List {
            kind,
            domain,
            secret_type,
            plugin_name,
            plugin_version,
            built_in,
        } => match kind {
            Kind::Ingress => match domain.as_deref().filter(|d| !d.is_empty()) {
                Some(domain) => serde_json::to_value(k8s.list_ingress_by_domain(domain).await?)?,
                None => serde_json::to_value(k8s.list_ingress().await?)?,
            },
            Kind::ConfigMap => serde_json::to_value(k8s.list_config_map().await?)?,
            Kind::Secret => serde_json::to_value(k8s.list_secret(secret_type.as_deref()).await?)?,
            Kind::McpBridge => serde_json::to_value(k8s.list_mcp_bridge().await?)?,
            Kind::WasmPlugin => {
                let query = WasmPluginQuery {
                    name: plugin_name,
                    version: plugin_version,
                    built_in,
                };
                serde_json::to_value(k8s.list_wasm_plugin(&query).await?)?
            }
        },
        Command::Get { kind, name } => match kind {
            Kind::Ingress => serde_json::to_value(k8s.read_ingress(&name).await?)?,
            Kind::ConfigMap => serde_json::to_value(k8s.read_config_map(&name).await?)?,
            Kind::Secret => serde_json::to_value(k8s.read_secret(&name).await?)?,
            Kind::McpBridge => serde_json::to_value(k8s.read_mcp_bridge(&name).await?)?,
            Kind::WasmPlugin => serde_json::to_value(k8s.read_wasm_plugin(&name).await?)?,
        },
        Command::Delete { kind, name } => {
            tracing::info!("delete {kind:?} [{name}] in {}", k8s.namespace);
            match kind {
                Kind::Ingress => k8s.delete_ingress(&name).await?,
                Kind::ConfigMap => k8s.delete_config_map(&name).await?,
                Kind::Secret => k8s.delete_secret(&name).await?,
                Kind::McpBridge => k8s.delete_mcp_bridge(&name).await?,
                Kind::WasmPlugin => k8s.delete_wasm_plugin(&name).await?,
            }
            json!({ "deleted": name })
        }
        Command::Services => serde_json::to_value(ControllerClient::from_k8s(k8s)?.fetch_registered_services().await?)?,
        Command::Endpoints => serde_json::to_value(ControllerClient::from_k8s(k8s)?.fetch_service_endpoints().await?)?,
        Command::Protected { namespace } => json!({ "namespace": namespace, "protected": k8s.is_namespace_protected(&namespace) }),
    };
    Ok(output)
}
