//! Label keys, configuration defaults and well-known paths shared by the console crates.

/// Label stamped on every object the console writes, used to scope list queries.
pub const RESOURCE_DEFINER_KEY: &str = "higress.io/resource-definer";
pub const RESOURCE_DEFINER_VALUE: &str = "higress";

pub const DOMAIN_LABEL_KEY: &str = "higress.io/domain";

pub const WASM_PLUGIN_NAME_KEY: &str = "higress.io/wasm-plugin-name";
pub const WASM_PLUGIN_VERSION_KEY: &str = "higress.io/wasm-plugin-version";
pub const WASM_PLUGIN_BUILT_IN_KEY: &str = "higress.io/wasm-plugin-built-in";

pub const SECRET_TYPE_FIELD: &str = "type";
pub const TLS_SECRET_TYPE: &str = "kubernetes.io/tls";

pub const LABEL_SELECTOR_SEPARATOR: &str = ",";
pub const LABEL_SELECTOR_EQUALS: &str = "=";

pub const DEFAULT_NAMESPACE: &str = "higress-system";
pub const DEFAULT_PROTECTED_NAMESPACES: &[&str] = &["kube-system"];
pub const DEFAULT_INGRESS_CLASS_NAME: &str = "higress";

pub const DEFAULT_CONTROLLER_SERVICE_NAME: &str = "higress-controller";
pub const DEFAULT_CONTROLLER_SERVICE_HOST: &str = "localhost";
pub const DEFAULT_CONTROLLER_SERVICE_PORT: u16 = 15014;

pub const FIRST_PARTY_JWT: &str = "first-party-jwt";
pub const THIRD_PARTY_JWT: &str = "third-party-jwt";

/// Relative to the home directory.
pub const KUBE_CONFIG_DEFAULT_PATH: &str = ".kube/config";
pub const POD_SERVICE_ACCOUNT_TOKEN_FILE_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/token";
pub const CONTROLLER_ACCESS_TOKEN_FILE_PATH: &str = "/var/run/secrets/access-token/token";

pub const CONTROLLER_REGISTRYZ_PATH: &str = "/debug/registryz";
pub const CONTROLLER_ENDPOINT_SHARDZ_PATH: &str = "/debug/endpointShardz";
