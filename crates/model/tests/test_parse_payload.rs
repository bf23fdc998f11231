use higress_model::{constants, IstioEndpointShard, RegistryzService, ServiceEndpointShards, WasmPlugin};
use kube::ResourceExt;

#[test]
fn test_parse_registryz() {
    let file = include_str!("test_parse_payload/registryz.json");
    let services = match serde_json::from_str::<Vec<RegistryzService>>(file) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", e);
            panic!();
        }
    };
    assert_eq!(services.len(), 3);
    let httpbin = &services[0];
    assert_eq!(httpbin.attributes.service_registry, "Kubernetes");
    assert_eq!(httpbin.attributes.labels.get("app").map(String::as_str), Some("httpbin"));
    assert_eq!(httpbin.ports[0].port, 8000);
    assert_eq!(httpbin.cluster_vips.addresses["Kubernetes"], vec!["10.96.12.7".to_string()]);

    // missing fields fall back to their defaults
    let nacos = &services[1];
    assert!(nacos.mesh_external);
    assert!(nacos.attributes.labels.is_empty());
    assert!(nacos.cluster_vips.addresses.is_empty());
    assert_eq!(nacos.creation_time, None);

    // the controller writes empty maps and lists as null
    assert!(nacos.attributes.export_to.is_empty());
    let headless = &services[2];
    assert!(headless.ports.is_empty());
    assert!(headless.attributes.labels.is_empty());
    assert_eq!(headless.resolution, 2);
}

#[test]
fn test_parse_endpoint_shardz() {
    let file = include_str!("test_parse_payload/endpoint_shardz.json");
    let shards: ServiceEndpointShards = serde_json::from_str(file).expect("invalid endpoint shards");
    let shard: &IstioEndpointShard = &shards["httpbin.default.svc.cluster.local"]["default"];
    let endpoints = &shard.shards["Kubernetes/Kubernetes"];
    assert_eq!(endpoints.len(), 1);
    assert_eq!(endpoints[0].address, "10.244.0.12");
    assert_eq!(endpoints[0].endpoint_port, 80);
    assert_eq!(endpoints[0].tls_mode, "disabled");
    assert_eq!(shard.service_accounts.len(), 1);

    let canary = &shards["httpbin.default.svc.cluster.local"]["canary"];
    assert!(canary.service_accounts.is_empty());
    let endpoint = &canary.shards["Kubernetes/Kubernetes"][0];
    assert!(endpoint.labels.is_empty());
    assert_eq!(endpoint.address, "10.244.0.13");

    let drained = &shards["drained.default.svc.cluster.local"]["default"];
    assert!(drained.shards.is_empty());
    assert!(drained.service_accounts.is_empty());
}

#[test]
fn test_parse_wasm_plugin() {
    let file = include_str!("test_parse_payload/wasm_plugin.json");
    let plugin: WasmPlugin = serde_json::from_str(file).expect("invalid wasm plugin");
    assert_eq!(plugin.name_any(), "key-auth-1.0.0");
    assert_eq!(plugin.labels().get(constants::WASM_PLUGIN_BUILT_IN_KEY).map(String::as_str), Some("true"));
    assert_eq!(plugin.spec.priority, Some(310));
    assert_eq!(plugin.spec.default_config_disable, Some(true));
    assert_eq!(plugin.spec.match_rules[0].ingress, vec!["route-a".to_string()]);

    // optional fields are not emitted back
    let value = serde_json::to_value(&plugin).expect("fail to serialize");
    assert!(value["spec"].get("sha256").is_none());
    assert_eq!(value["spec"]["phase"], "AUTHN");
}
