pub mod mcp_bridge;
pub mod wasm_plugin;

pub use mcp_bridge::{McpBridge, McpBridgeSpec, RegistryConfig};
pub use wasm_plugin::{MatchRule, WasmPlugin, WasmPluginSpec};
