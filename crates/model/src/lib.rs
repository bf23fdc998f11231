//! Object shapes and constants shared by the higress console crates.
pub mod constants;
pub mod ext;

pub mod registryz;
pub use registryz::*;

pub use ext::k8s::crd::{McpBridge, McpBridgeSpec, WasmPlugin, WasmPluginSpec};
